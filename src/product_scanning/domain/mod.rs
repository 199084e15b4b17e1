pub mod barcode;
pub mod lookup_state;
pub mod product_lookup_result;
pub mod scan_event;

pub use barcode::Barcode;
pub use lookup_state::LookupState;
pub use product_lookup_result::{LookupStatus, ProductLookupResult, UNKNOWN};
pub use scan_event::ScanEvent;
