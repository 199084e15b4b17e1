/// ScanOptions - Behavior switches for the scan pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Drop lookup results that arrive after a result for a newer scan was
    /// already shown. Off by default: every result is shown in arrival order.
    pub discard_stale_results: bool,
}

impl ScanOptions {
    pub fn new(discard_stale_results: bool) -> Self {
        Self {
            discard_stale_results,
        }
    }
}
