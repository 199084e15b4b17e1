/// Product scanning domain - barcodes, scan events and lookup outcomes
///
/// Pure types and rules with no knowledge of cameras, HTTP or terminals.
pub mod domain;
pub mod services;
