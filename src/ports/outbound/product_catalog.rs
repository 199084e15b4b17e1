use crate::product_scanning::domain::{Barcode, ProductLookupResult};
use crate::shared::error::LookupError;
use async_trait::async_trait;

/// ProductCatalog port for resolving a barcode to product information
///
/// This port abstracts the remote product database (e.g., Open Food Facts)
/// queried after every successful decode.
///
/// # Async Support
/// Lookups run concurrently and independently of frame analysis, so
/// implementations must be `Send + Sync`.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Looks up a single barcode
    ///
    /// # Returns
    /// A `ProductLookupResult`, which is `NotFound` when the catalog answered
    /// but does not know the barcode
    ///
    /// # Errors
    /// Returns a `LookupError` if:
    /// - The API answers with a non-success HTTP status
    /// - The request cannot be sent or completed
    /// - The response body cannot be parsed
    async fn lookup(&self, barcode: &Barcode) -> Result<ProductLookupResult, LookupError>;
}
