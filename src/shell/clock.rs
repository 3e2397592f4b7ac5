//! Wall-clock display refresh, independent of navigation state.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, instrument};

/// Formats the local time as 24-hour `HH:MM`.
pub fn local_time() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Periodic task publishing the current time text.
///
/// [`Clock::shutdown`] cancels the task and waits for it; dropping the handle
/// aborts it without waiting. Either way no tick outlives the handle.
#[derive(Debug)]
pub struct Clock {
    rx: watch::Receiver<String>,
    task: Option<JoinHandle<()>>,
}

impl Clock {
    /// Starts a clock refreshing the local time every `period`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument]
    pub fn spawn(period: Duration) -> Self {
        Self::spawn_with(period, local_time)
    }

    /// Starts a clock that samples `source` every `period`.
    #[instrument(skip(source))]
    pub fn spawn_with<F>(period: Duration, source: F) -> Self
    where
        F: Fn() -> String + Send + 'static,
    {
        let (tx, rx) = watch::channel(source());
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if tx.send(source()).is_err() {
                    break;
                }
            }
        });
        debug!(?period, "Clock started");
        Self {
            rx,
            task: Some(task),
        }
    }

    /// The most recently published time text.
    pub fn now(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Whether the refresh task is still alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancels the refresh task and waits until it has stopped.
    #[instrument(skip(self))]
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            match task.await {
                Err(err) if err.is_panic() => error!(error = %err, "Clock task panicked"),
                _ => debug!("Clock stopped"),
            }
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_format() {
        let text = local_time();
        assert_eq!(text.len(), 5);
        assert_eq!(&text[2..3], ":");
        assert!(text[..2].parse::<u8>().unwrap() < 24);
        assert!(text[3..].parse::<u8>().unwrap() < 60);
    }
}
