use crate::ports::outbound::{BarcodeDecoder, Frame};
use crate::shared::Result;
use async_trait::async_trait;

/// TextPayloadDecoder adapter treating the frame payload as already-decoded text
///
/// Each whitespace-separated token is one barcode value. Used where frames
/// come from a text stream instead of a camera (CLI, scripted tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct TextPayloadDecoder;

impl TextPayloadDecoder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BarcodeDecoder for TextPayloadDecoder {
    async fn decode(&self, frame: &Frame) -> Result<Vec<String>> {
        let text = std::str::from_utf8(frame.data())
            .map_err(|e| anyhow::anyhow!("Frame payload is not valid UTF-8: {}", e))?;

        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
