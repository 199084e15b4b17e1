use nutriscan::prelude::*;
use std::sync::Mutex;

/// What the sink was told, in call order
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEntry {
    Scan(String),
    Result(String, ProductLookupResult),
    Error(String, LookupErrorKind),
}

/// Mock PresentationSink that captures every call
#[derive(Default)]
pub struct MockPresentationSink {
    entries: Mutex<Vec<SinkEntry>>,
}

impl MockPresentationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn scans(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                SinkEntry::Scan(code) => Some(code),
                _ => None,
            })
            .collect()
    }

    pub fn results(&self) -> Vec<(String, ProductLookupResult)> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                SinkEntry::Result(code, result) => Some((code, result)),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<(String, LookupErrorKind)> {
        self.entries()
            .into_iter()
            .filter_map(|e| match e {
                SinkEntry::Error(code, kind) => Some((code, kind)),
                _ => None,
            })
            .collect()
    }
}

impl PresentationSink for MockPresentationSink {
    fn on_scan(&self, event: &ScanEvent) {
        self.entries
            .lock()
            .unwrap()
            .push(SinkEntry::Scan(event.barcode().to_string()));
    }

    fn on_result(&self, event: &ScanEvent, result: &ProductLookupResult) {
        self.entries
            .lock()
            .unwrap()
            .push(SinkEntry::Result(event.barcode().to_string(), result.clone()));
    }

    fn on_error(&self, event: &ScanEvent, error: &LookupError) {
        self.entries
            .lock()
            .unwrap()
            .push(SinkEntry::Error(event.barcode().to_string(), error.kind()));
    }
}
