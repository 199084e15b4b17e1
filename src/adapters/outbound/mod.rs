/// Outbound adapters (Driven adapters)
///
/// Concrete implementations of the outbound ports.
pub mod console;
pub mod frames;
pub mod network;
