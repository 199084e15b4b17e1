/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (camera, decoder, network, display).
pub mod barcode_decoder;
pub mod frame_source;
pub mod presentation_sink;
pub mod product_catalog;

pub use barcode_decoder::BarcodeDecoder;
pub use frame_source::{Frame, FrameSource};
pub use presentation_sink::PresentationSink;
pub use product_catalog::ProductCatalog;
