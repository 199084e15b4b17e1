use async_trait::async_trait;
use std::fmt;

type ReleaseHook = Box<dyn FnOnce() + Send + Sync>;

/// A single image frame handed over by a frame source
///
/// Owning a `Frame` means owning the underlying buffer: the release hook
/// runs exactly once, when the frame is dropped. Consumers therefore take
/// frames by value and never need to release them explicitly.
pub struct Frame {
    data: Vec<u8>,
    rotation_degrees: u16,
    release: Option<ReleaseHook>,
}

impl Frame {
    pub fn new(data: Vec<u8>, rotation_degrees: u16) -> Self {
        Self {
            data,
            rotation_degrees,
            release: None,
        }
    }

    /// Attaches a hook that hands the buffer back to its producer on drop
    pub fn with_release<F>(mut self, release: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        self.release = Some(Box::new(release));
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn rotation_degrees(&self) -> u16 {
        self.rotation_degrees
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("len", &self.data.len())
            .field("rotation_degrees", &self.rotation_degrees)
            .field("has_release", &self.release.is_some())
            .finish()
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// FrameSource port for push-style camera feeds
///
/// Sources are expected to drop backlog rather than queue it, so that the
/// frame returned by `next_frame` is always the freshest one available.
#[async_trait]
pub trait FrameSource: Send {
    /// Waits for the next frame; `None` once the source is exhausted
    async fn next_frame(&mut self) -> Option<Frame>;
}
