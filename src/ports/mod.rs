/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what the camera side calls into; outbound ports are
/// the decoder, frame feed, product catalog and display the core depends on.
pub mod inbound;
pub mod outbound;
