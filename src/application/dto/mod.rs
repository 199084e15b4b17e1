/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod lookup_request;
mod lookup_response;
mod scan_options;
mod scan_summary;

pub use lookup_request::LookupRequest;
pub use lookup_response::{LookupOutcome, LookupResponse};
pub use scan_options::ScanOptions;
pub use scan_summary::ScanSummary;
