use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use brewline_error::AppError;
use futures::{FutureExt, Stream, StreamExt};
use tracing::{error, info};

use crate::kafka::{ConsumptionEvent, ReceivedOrder};
use crate::shutdown::ShutdownSignal;

/// Processes one order delivered by the dispatch loop.
#[async_trait]
pub trait OrderHandler {
    async fn handle(&self, order: ReceivedOrder) -> Result<(), AppError>;
}

/// Counters owned by the dispatch loop, reported once at termination.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Messages dispatched to the handler
    pub received: u64,
    /// Handler invocations that failed or panicked
    pub failed: u64,
}

/// Run the ordered dispatch loop until the shutdown interrupt fires.
///
/// Each iteration blocks on whichever event source is ready first — a
/// broker-delivered message, a broker-reported error, or the interrupt —
/// with no priority among ready sources.
///
/// - Message: the handler runs to completion before the next event is
///   considered, so per-partition order is preserved and an interrupt never
///   abandons an in-flight order. A handler error or panic is contained and
///   logged; the message is not retried in-process (redelivery relies on
///   broker replay after a restart).
/// - Error: logged, the stream is not closed.
/// - Interrupt: the loop drains — no further dispatch — and returns its
///   report.
///
/// The broker stream itself is unbounded; a finite source (mock, test
/// harness) drains like an interrupt when it ends.
pub async fn run_dispatch_loop<S, H>(
    mut events: S,
    handler: &H,
    mut shutdown: ShutdownSignal,
) -> DispatchReport
where
    S: Stream<Item = Result<ReceivedOrder, AppError>> + Unpin,
    H: OrderHandler + Sync,
{
    let mut report = DispatchReport::default();

    info!("Dispatch loop running");

    loop {
        let event = tokio::select! {
            item = events.next() => match item {
                Some(Ok(order)) => ConsumptionEvent::Message(order),
                Some(Err(cause)) => ConsumptionEvent::Error(cause),
                None => ConsumptionEvent::Interrupt,
            },
            _ = shutdown.triggered() => ConsumptionEvent::Interrupt,
        };

        match event {
            ConsumptionEvent::Message(order) => {
                report.received += 1;
                let offset = order.offset;

                match AssertUnwindSafe(handler.handle(order)).catch_unwind().await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        report.failed += 1;
                        error!(error = %e, offset, "Order processing failed");
                    }
                    Err(_) => {
                        report.failed += 1;
                        error!(offset, "Order processing panicked, continuing");
                    }
                }
            }
            ConsumptionEvent::Error(cause) => {
                error!(error = %cause, "Consumer reported an error, stream continues");
            }
            ConsumptionEvent::Interrupt => {
                info!("Interrupt detected, draining");
                break;
            }
        }
    }

    info!(
        received = report.received,
        failed = report.failed,
        "Dispatch loop terminated"
    );

    report
}
