use crate::product_scanning::domain::{ProductLookupResult, ScanEvent};
use crate::shared::error::LookupError;

/// PresentationSink port for rendering scan status and lookup outcomes
///
/// Calls arrive from the analysis worker (`on_scan`) and from lookup tasks
/// (`on_result`, `on_error`), possibly on different threads. An implementation
/// bound to a UI thread is responsible for handing the update over to it.
/// Every call overwrites whatever was displayed before.
pub trait PresentationSink: Send + Sync {
    /// A barcode was decoded and a lookup is about to start
    fn on_scan(&self, event: &ScanEvent);

    /// The catalog answered for the given scan (found or not found)
    fn on_result(&self, event: &ScanEvent, result: &ProductLookupResult);

    /// The lookup for the given scan failed; scanning continues
    fn on_error(&self, event: &ScanEvent, error: &LookupError);
}
