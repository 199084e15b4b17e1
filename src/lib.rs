//! nutriscan - barcode scan-to-lookup pipeline
//!
//! This library turns camera frames into product information: frames are
//! decoded into barcodes, each barcode is looked up in the Open Food Facts
//! catalog, and scan events and results are pushed to a presentation sink.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`product_scanning`): Barcodes, scan events, lookup results
//! - **Application Layer** (`application`): The scan pipeline and batch lookups
//! - **Ports** (`ports`): Interface definitions for decoder, camera, catalog and display
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use nutriscan::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! let catalog = OpenFoodFactsClient::new()?;
//! let presenter = Arc::new(ConsolePresenter::stdout());
//! let pipeline = ScanPipeline::new(
//!     TextPayloadDecoder::new(),
//!     catalog,
//!     presenter,
//!     ScanOptions::default(),
//! );
//!
//! // Camera callback side
//! let (publisher, slot) = latest_frame_slot();
//! publisher.push(Frame::new(b"3017620422003".to_vec(), 0));
//! drop(publisher);
//!
//! // Analysis worker side
//! pipeline.run(slot).await;
//! pipeline.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod product_scanning;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsolePresenter;
    pub use crate::adapters::outbound::frames::{
        latest_frame_slot, FramePublisher, LatestFrameSlot, LineFrameSource, TextPayloadDecoder,
    };
    pub use crate::adapters::outbound::network::{
        default_user_agent, OpenFoodFactsClient, DEFAULT_BASE_URL,
    };
    pub use crate::application::dto::{
        LookupOutcome, LookupRequest, LookupResponse, ScanOptions, ScanSummary,
    };
    pub use crate::application::use_cases::{LookupProductsUseCase, ScanPipeline};
    pub use crate::ports::inbound::FrameAnalyzer;
    pub use crate::ports::outbound::{
        BarcodeDecoder, Frame, FrameSource, PresentationSink, ProductCatalog,
    };
    pub use crate::product_scanning::domain::{
        Barcode, LookupState, LookupStatus, ProductLookupResult, ScanEvent, UNKNOWN,
    };
    pub use crate::product_scanning::services::ResponseInterpreter;
    pub use crate::shared::error::{ExitCode, LookupError, LookupErrorKind};
    pub use crate::shared::Result;
}
