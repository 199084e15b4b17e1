/// ScanSummary - Totals for one run of the scan pipeline over a frame source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Frames pulled from the source and analyzed
    pub frames_analyzed: u64,
    /// Lookups dispatched across all frames
    pub lookups_dispatched: u64,
}
