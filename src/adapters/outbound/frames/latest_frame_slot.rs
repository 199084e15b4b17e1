use crate::ports::outbound::{Frame, FrameSource};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Notify;
use tracing::trace;

#[derive(Default)]
struct SlotState {
    frame: Option<Frame>,
    closed: bool,
    dropped: u64,
}

#[derive(Default)]
struct Shared {
    state: Mutex<SlotState>,
    notify: Notify,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Creates a keep-only-latest frame channel.
///
/// The publisher side is fed by the camera callback; the slot side is a
/// [`FrameSource`] for the analysis worker. A frame that has not been picked
/// up when the next one arrives is dropped (and thereby released), never queued.
pub fn latest_frame_slot() -> (FramePublisher, LatestFrameSlot) {
    let shared = Arc::new(Shared::default());
    (
        FramePublisher {
            shared: shared.clone(),
        },
        LatestFrameSlot { shared },
    )
}

/// Producer half of [`latest_frame_slot`]. Dropping it ends the stream.
pub struct FramePublisher {
    shared: Arc<Shared>,
}

impl FramePublisher {
    /// Publishes a frame, replacing any frame still waiting.
    ///
    /// Returns `true` if a waiting frame was replaced.
    pub fn push(&self, frame: Frame) -> bool {
        let stale = {
            let mut state = self.shared.lock();
            let stale = state.frame.replace(frame);
            if stale.is_some() {
                state.dropped += 1;
            }
            stale
        };
        self.shared.notify.notify_one();

        // Release outside the lock; hooks may call back into the producer
        let replaced = stale.is_some();
        if replaced {
            trace!("replaced unconsumed frame");
        }
        drop(stale);
        replaced
    }
}

impl Drop for FramePublisher {
    fn drop(&mut self) {
        self.shared.lock().closed = true;
        self.shared.notify.notify_one();
    }
}

/// Consumer half of [`latest_frame_slot`].
pub struct LatestFrameSlot {
    shared: Arc<Shared>,
}

impl LatestFrameSlot {
    /// Number of frames replaced before they could be analyzed
    pub fn dropped_frames(&self) -> u64 {
        self.shared.lock().dropped
    }
}

#[async_trait]
impl FrameSource for LatestFrameSlot {
    async fn next_frame(&mut self) -> Option<Frame> {
        loop {
            let notified = self.shared.notify.notified();
            {
                let mut state = self.shared.lock();
                if let Some(frame) = state.frame.take() {
                    return Some(frame);
                }
                if state.closed {
                    return None;
                }
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn tracked_frame(payload: &str, released: &Arc<AtomicUsize>) -> Frame {
        let counter = released.clone();
        Frame::new(payload.as_bytes().to_vec(), 0).with_release(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test]
    async fn test_delivers_pushed_frame() {
        let (publisher, mut slot) = latest_frame_slot();
        publisher.push(Frame::new(b"123".to_vec(), 0));

        let frame = slot.next_frame().await.unwrap();
        assert_eq!(frame.data(), b"123");
    }

    #[tokio::test]
    async fn test_keeps_only_latest_and_releases_replaced() {
        let released = Arc::new(AtomicUsize::new(0));
        let (publisher, mut slot) = latest_frame_slot();

        assert!(!publisher.push(tracked_frame("first", &released)));
        assert!(publisher.push(tracked_frame("second", &released)));
        assert!(publisher.push(tracked_frame("third", &released)));

        // Two stale frames were released without ever being analyzed
        assert_eq!(released.load(Ordering::SeqCst), 2);
        assert_eq!(slot.dropped_frames(), 2);

        let frame = slot.next_frame().await.unwrap();
        assert_eq!(frame.data(), b"third");
        drop(frame);
        assert_eq!(released.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_ends_when_publisher_dropped() {
        let (publisher, mut slot) = latest_frame_slot();
        publisher.push(Frame::new(b"last".to_vec(), 0));
        drop(publisher);

        // Pending frame is still delivered before the end of stream
        assert!(slot.next_frame().await.is_some());
        assert!(slot.next_frame().await.is_none());
    }

    #[tokio::test]
    async fn test_waits_for_frame_from_other_task() {
        let (publisher, mut slot) = latest_frame_slot();

        let producer = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            publisher.push(Frame::new(b"late".to_vec(), 180));
        });

        let frame = tokio::time::timeout(Duration::from_secs(5), slot.next_frame())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(frame.rotation_degrees(), 180);
        producer.await.unwrap();
        assert!(slot.next_frame().await.is_none());
    }
}
