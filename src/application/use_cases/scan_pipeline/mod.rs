use crate::application::dto::{ScanOptions, ScanSummary};
use crate::ports::inbound::FrameAnalyzer;
use crate::ports::outbound::{BarcodeDecoder, Frame, FrameSource, PresentationSink, ProductCatalog};
use crate::product_scanning::domain::{Barcode, LookupState, ProductLookupResult, ScanEvent};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// ScanPipeline - Bridges a frame stream to decode-and-lookup actions
///
/// Frames are analyzed one at a time by whoever drives the pipeline (the
/// analysis worker). Each decoded barcode produces a `ScanEvent` and an
/// independent lookup task; lookups never block frame analysis and any
/// number of them may be in flight.
///
/// # Type Parameters
/// * `D` - BarcodeDecoder implementation
/// * `C` - ProductCatalog implementation (owned; its lifetime is the pipeline's)
/// * `S` - PresentationSink implementation
pub struct ScanPipeline<D, C, S> {
    decoder: D,
    catalog: Arc<C>,
    sink: Arc<S>,
    options: ScanOptions,
    next_sequence: AtomicU64,
    // Highest scan sequence whose result has been shown; 0 = none yet.
    // Held while the result is rendered so admission and delivery cannot interleave.
    latest_shown: Arc<Mutex<u64>>,
    lookups: TaskTracker,
}

impl<D, C, S> ScanPipeline<D, C, S>
where
    D: BarcodeDecoder,
    C: ProductCatalog + 'static,
    S: PresentationSink + 'static,
{
    /// Creates a new ScanPipeline with injected dependencies
    pub fn new(decoder: D, catalog: C, sink: Arc<S>, options: ScanOptions) -> Self {
        Self {
            decoder,
            catalog: Arc::new(catalog),
            sink,
            options,
            next_sequence: AtomicU64::new(1),
            latest_shown: Arc::new(Mutex::new(0)),
            lookups: TaskTracker::new(),
        }
    }

    /// Analyzes one frame and dispatches a lookup per decoded barcode
    ///
    /// The frame is released as soon as decoding finishes, on every path.
    /// Decode failures are logged and otherwise ignored.
    ///
    /// # Returns
    /// The number of lookups dispatched for this frame
    pub async fn analyze_frame(&self, frame: Frame) -> usize {
        debug!(
            bytes = frame.data().len(),
            rotation = frame.rotation_degrees(),
            "analyzing frame"
        );

        let decoded = self.decoder.decode(&frame).await;
        drop(frame);

        let values = match decoded {
            Ok(values) => values,
            Err(e) => {
                debug!(error = %e, "no barcode decoded");
                return 0;
            }
        };

        let mut dispatched = 0;
        for value in values {
            let barcode = match Barcode::new(value) {
                Ok(barcode) => barcode,
                Err(e) => {
                    debug!(error = %e, "skipping decoded value");
                    continue;
                }
            };

            let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
            let event = ScanEvent::new(barcode, sequence);
            info!(barcode = %event.barcode(), sequence, "barcode detected");

            self.sink.on_scan(&event);
            self.dispatch_lookup(event);
            dispatched += 1;
        }

        dispatched
    }

    /// Drains a frame source on the current task until it ends
    pub async fn run<F: FrameSource>(&self, mut source: F) -> ScanSummary {
        let mut summary = ScanSummary::default();

        while let Some(frame) = source.next_frame().await {
            summary.frames_analyzed += 1;
            summary.lookups_dispatched += self.analyze_frame(frame).await as u64;
        }

        debug!(
            frames = summary.frames_analyzed,
            lookups = summary.lookups_dispatched,
            "frame source exhausted"
        );
        summary
    }

    /// Number of lookups still waiting for a response
    pub fn lookups_in_flight(&self) -> usize {
        self.lookups.len()
    }

    /// Closes the lookup tracker and waits for in-flight lookups to finish
    pub async fn shutdown(&self) {
        self.lookups.close();
        self.lookups.wait().await;
    }

    fn dispatch_lookup(&self, event: ScanEvent) {
        let catalog = Arc::clone(&self.catalog);
        let sink = Arc::clone(&self.sink);
        let latest_shown = self
            .options
            .discard_stale_results
            .then(|| Arc::clone(&self.latest_shown));

        self.lookups.spawn(async move {
            let state = LookupState::new().start();
            let outcome = catalog.lookup(event.barcode()).await;

            match state.complete(outcome) {
                LookupState::Succeeded(result) => match latest_shown {
                    Some(latest_shown) => {
                        deliver_if_latest(&latest_shown, &*sink, &event, &result)
                    }
                    None => sink.on_result(&event, &result),
                },
                LookupState::Failed(error) => sink.on_error(&event, &error),
                state => unreachable!("lookup completed in non-terminal state {:?}", state),
            }
        });
    }
}

/// Shows a result unless a newer scan's result is already on display.
///
/// The sequence check and the sink call run under one lock, so an older
/// result can never be rendered after a newer one.
fn deliver_if_latest<S: PresentationSink>(
    latest_shown: &Mutex<u64>,
    sink: &S,
    event: &ScanEvent,
    result: &ProductLookupResult,
) {
    let mut shown = latest_shown.lock().unwrap_or_else(|e| e.into_inner());
    if !admit_result(&mut shown, event.sequence()) {
        debug!(
            barcode = %event.barcode(),
            sequence = event.sequence(),
            "discarding stale lookup result"
        );
        return;
    }
    sink.on_result(event, result);
}

/// A result may be shown only if no newer scan's result has been shown
fn admit_result(latest_shown: &mut u64, sequence: u64) -> bool {
    if sequence > *latest_shown {
        *latest_shown = sequence;
        true
    } else {
        false
    }
}

#[async_trait]
impl<D, C, S> FrameAnalyzer for ScanPipeline<D, C, S>
where
    D: BarcodeDecoder,
    C: ProductCatalog + 'static,
    S: PresentationSink + 'static,
{
    async fn on_frame(&self, frame: Frame) -> usize {
        self.analyze_frame(frame).await
    }
}
