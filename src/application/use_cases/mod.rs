/// Use cases module containing application business logic orchestration
mod lookup_products;
mod scan_pipeline;

pub use lookup_products::LookupProductsUseCase;
pub use scan_pipeline::ScanPipeline;
