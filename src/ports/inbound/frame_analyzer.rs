use crate::ports::outbound::Frame;
use async_trait::async_trait;

/// FrameAnalyzer - Inbound port fed by the camera analysis callback
///
/// Frames are handed over by value; the analyzer guarantees the frame is
/// released exactly once regardless of how analysis ends.
#[async_trait]
pub trait FrameAnalyzer: Send + Sync {
    /// Analyzes one frame
    ///
    /// # Returns
    /// The number of lookups dispatched for this frame
    async fn on_frame(&self, frame: Frame) -> usize;
}
