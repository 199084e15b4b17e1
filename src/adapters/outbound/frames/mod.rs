/// Frame adapters - in-process frame delivery and a text-based decoder
mod latest_frame_slot;
mod line_frame_source;
mod text_payload_decoder;

pub use latest_frame_slot::{latest_frame_slot, FramePublisher, LatestFrameSlot};
pub use line_frame_source::LineFrameSource;
pub use text_payload_decoder::TextPayloadDecoder;
