// Interrupt coordination for the fulfillment worker.
//
// The controller broadcasts exactly one logical interrupt over a watch
// channel; triggering it again is a no-op. The worker's dispatch loop holds a
// `ShutdownSignal` and observes the interrupt as one of its event sources.

use tokio::sync::watch;
use tracing::info;

/// Broadcasts the shutdown interrupt to any number of subscribers.
#[derive(Clone)]
pub struct ShutdownController {
    tx: watch::Sender<bool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the interrupt
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Deliver the interrupt. Idempotent: the second trigger is a no-op.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Whether the interrupt has already fired
    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of the shutdown interrupt.
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Wait until the interrupt fires.
    ///
    /// Resolves immediately if it already has; cancel-safe, so it can sit in
    /// a `select!` arm across loop iterations. A dropped controller counts as
    /// an interrupt.
    pub async fn triggered(&mut self) {
        let _ = self.rx.wait_for(|stopped| *stopped).await;
    }
}

/// Register SIGTERM/SIGINT handlers that trigger the controller once.
pub fn spawn_signal_listener(controller: ShutdownController) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm =
                signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown...");
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("SIGINT received, initiating graceful shutdown...");
                }
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.ok();
            info!("Ctrl-C received, initiating graceful shutdown...");
        }
        controller.trigger();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_resolves_waiting_subscriber() {
        let controller = ShutdownController::new();
        let mut signal = controller.subscribe();

        let waiter = tokio::spawn(async move { signal.triggered().await });
        controller.trigger();

        waiter.await.unwrap();
        assert!(controller.is_triggered());
    }

    #[tokio::test]
    async fn second_trigger_is_noop() {
        let controller = ShutdownController::new();
        controller.trigger();
        controller.trigger();

        // A subscriber created after both triggers still observes exactly
        // one interrupt and resolves immediately.
        let mut signal = controller.subscribe();
        signal.triggered().await;
    }

    #[tokio::test]
    async fn dropped_controller_counts_as_interrupt() {
        let controller = ShutdownController::new();
        let mut signal = controller.subscribe();
        drop(controller);

        signal.triggered().await;
    }
}
