//! Scoped, cancelable screen timers.

use std::time::Duration;

use tokio::task::JoinHandle;

/// A fire-once timer owned by the screen that armed it.
///
/// Dropping the handle cancels the timer, so a callback never runs after
/// its screen has been retired.
#[derive(Debug)]
pub struct ScreenTimer {
    handle: JoinHandle<()>,
}

impl ScreenTimer {
    /// Run `on_fire` once after `delay` on the current tokio runtime.
    pub fn start<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });
        Self { handle }
    }

    /// Cancel explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for ScreenTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
