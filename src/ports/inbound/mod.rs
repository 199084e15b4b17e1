/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (camera
/// callbacks, CLI) use to interact with the application core.
pub mod frame_analyzer;

pub use frame_analyzer::FrameAnalyzer;
