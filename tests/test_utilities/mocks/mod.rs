/// Mock implementations for testing
mod mock_barcode_decoder;
mod mock_presentation_sink;
mod mock_product_catalog;

pub use mock_barcode_decoder::MockBarcodeDecoder;
pub use mock_presentation_sink::{MockPresentationSink, SinkEntry};
pub use mock_product_catalog::MockProductCatalog;
