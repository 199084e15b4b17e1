use crate::ports::outbound::{Frame, FrameSource};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::warn;

/// LineFrameSource adapter reading one frame payload per text line
///
/// Pull-based: a line is only read when the analyzer asks for the next
/// frame, so there is never a backlog to drop.
pub struct LineFrameSource<R> {
    lines: Lines<R>,
}

impl<R> LineFrameSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R> FrameSource for LineFrameSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_frame(&mut self) -> Option<Frame> {
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(Frame::new(line.into_bytes(), 0)),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read frame input, stopping");
                None
            }
        }
    }
}
