use crate::product_scanning::domain::Barcode;

/// LookupRequest - Request DTO for one-shot product lookups
#[derive(Debug, Clone)]
pub struct LookupRequest {
    /// Barcodes to look up, in the order results should be reported
    pub barcodes: Vec<Barcode>,
}

impl LookupRequest {
    pub fn new(barcodes: Vec<Barcode>) -> Self {
        Self { barcodes }
    }
}
