use crate::product_scanning::domain::{Barcode, ProductLookupResult};
use crate::shared::error::LookupError;

/// Outcome of a single barcode lookup
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub barcode: Barcode,
    pub result: Result<ProductLookupResult, LookupError>,
}

/// LookupResponse - Response DTO for one-shot product lookups
///
/// Outcomes are kept in request order.
#[derive(Debug, Clone)]
pub struct LookupResponse {
    pub outcomes: Vec<LookupOutcome>,
}

impl LookupResponse {
    pub fn new(outcomes: Vec<LookupOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn found_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(r) if r.is_found()))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// True when every barcode resolved to a product
    pub fn is_complete(&self) -> bool {
        self.found_count() == self.outcomes.len()
    }
}
