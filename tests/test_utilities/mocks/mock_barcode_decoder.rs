use async_trait::async_trait;
use nutriscan::prelude::*;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock BarcodeDecoder that replays scripted results, one per frame
///
/// Once the script runs out every further frame decodes to nothing.
pub struct MockBarcodeDecoder {
    script: Mutex<VecDeque<std::result::Result<Vec<String>, String>>>,
}

impl MockBarcodeDecoder {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn then_decode(self, values: &[&str]) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(values.iter().map(|v| v.to_string()).collect()));
        self
    }

    pub fn then_fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }
}

impl Default for MockBarcodeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BarcodeDecoder for MockBarcodeDecoder {
    async fn decode(&self, _frame: &Frame) -> Result<Vec<String>> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(values)) => Ok(values),
            Some(Err(message)) => anyhow::bail!(message),
            None => Ok(Vec::new()),
        }
    }
}
