use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Sleep, sleep};

/// Fire-once tick timer.
///
/// `after` arms it; `fired` resolves once the delay has elapsed and leaves
/// the timer disarmed until the next `after`. A disarmed timer never fires,
/// so the loop that awaits it simply stops ticking.
#[derive(Default)]
pub struct TickScheduler {
    pending: Option<Pin<Box<Sleep>>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one tick after `delay`, replacing any pending request
    pub fn after(&mut self, delay: Duration) {
        self.pending = Some(Box::pin(sleep(delay)));
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the armed tick. Cancel safe: dropping this future keeps the
    /// request armed.
    pub async fn fired(&mut self) {
        match self.pending.as_mut() {
            Some(timer) => {
                timer.as_mut().await;
                self.pending = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
