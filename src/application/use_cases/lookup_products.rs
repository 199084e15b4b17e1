use crate::application::dto::{LookupOutcome, LookupRequest, LookupResponse};
use crate::ports::outbound::ProductCatalog;
use futures::stream::{self, StreamExt};
use tracing::debug;

/// Upper bound on concurrent requests so a long barcode list does not hammer the API
const MAX_CONCURRENT_LOOKUPS: usize = 4;

/// LookupProductsUseCase - Looks up a fixed list of barcodes without a camera
///
/// Lookups run concurrently but outcomes are returned in request order.
pub struct LookupProductsUseCase<C> {
    catalog: C,
}

impl<C: ProductCatalog> LookupProductsUseCase<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self, request: LookupRequest) -> LookupResponse {
        debug!(count = request.barcodes.len(), "starting batch lookup");

        let outcomes: Vec<LookupOutcome> = stream::iter(request.barcodes)
            .map(|barcode| async move {
                let result = self.catalog.lookup(&barcode).await;
                LookupOutcome { barcode, result }
            })
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await;

        LookupResponse::new(outcomes)
    }
}
