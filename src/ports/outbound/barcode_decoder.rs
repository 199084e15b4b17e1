use super::Frame;
use crate::shared::Result;
use async_trait::async_trait;

/// BarcodeDecoder port wrapping an on-device barcode recognition capability
///
/// The decoder only borrows the frame; releasing it stays the caller's job.
#[async_trait]
pub trait BarcodeDecoder: Send + Sync {
    /// Decodes every barcode visible in the frame
    ///
    /// # Returns
    /// The raw decoded values, possibly empty. Values are not validated here.
    ///
    /// # Errors
    /// Returns an error if the decoder could not process the frame at all
    async fn decode(&self, frame: &Frame) -> Result<Vec<String>>;
}
