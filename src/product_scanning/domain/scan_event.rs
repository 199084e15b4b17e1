use super::Barcode;
use chrono::{DateTime, Utc};

/// A successful decode, emitted once per barcode value found in a frame.
///
/// `sequence` is assigned by the pipeline in decode order and is only
/// meaningful relative to other events from the same pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEvent {
    barcode: Barcode,
    sequence: u64,
    scanned_at: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(barcode: Barcode, sequence: u64) -> Self {
        Self::at(barcode, sequence, Utc::now())
    }

    /// Event with an explicit decode time
    pub fn at(barcode: Barcode, sequence: u64, scanned_at: DateTime<Utc>) -> Self {
        Self {
            barcode,
            sequence,
            scanned_at,
        }
    }

    pub fn barcode(&self) -> &Barcode {
        &self.barcode
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn scanned_at(&self) -> DateTime<Utc> {
        self.scanned_at
    }
}
