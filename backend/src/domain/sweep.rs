//! Supervised periodic background tasks.
//!
//! The two sweeps (weather alerts and overdue watering) run as supervised
//! loops: a successful tick sleeps for the task's interval, a failed tick
//! logs the error and sleeps for a shorter retry delay. A panicking tick
//! tears down nothing but that supervisor's task; the server keeps serving.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};

/// Error produced by one sweep tick.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TickError(pub String);

impl TickError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One unit of recurring background work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeriodicTask: Send + Sync {
    /// Task name used in supervisor logs.
    fn name(&self) -> &'static str;

    /// Run one sweep pass.
    async fn tick(&self) -> Result<(), TickError>;
}

/// Sleep abstraction so supervisor scheduling is testable without waiting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Runs a [`PeriodicTask`] forever, backing off after failures.
pub struct TaskSupervisor<T, S> {
    task: T,
    sleeper: S,
    interval: Duration,
    retry_delay: Duration,
}

impl<T, S> TaskSupervisor<T, S>
where
    T: PeriodicTask,
    S: Sleeper,
{
    pub fn new(task: T, sleeper: S, interval: Duration, retry_delay: Duration) -> Self {
        Self {
            task,
            sleeper,
            interval,
            retry_delay,
        }
    }

    /// Run one tick and the sleep that follows it.
    pub async fn step(&self) {
        match self.task.tick().await {
            Ok(()) => {
                self.sleeper.sleep(self.interval).await;
            }
            Err(err) => {
                error!(task = self.task.name(), error = %err, "sweep tick failed");
                self.sleeper.sleep(self.retry_delay).await;
            }
        }
    }

    /// Loop forever. Intended to be spawned onto the runtime.
    pub async fn run(self) {
        info!(
            task = self.task.name(),
            interval_secs = self.interval.as_secs(),
            "starting background sweep"
        );
        loop {
            self.step().await;
        }
    }
}
