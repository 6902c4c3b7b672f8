//! Cosmetic progress for the analysis request.
//!
//! The value says nothing about real progress. It climbs by a fixed step on
//! a fixed interval, saturates at a cap below 100, and is cancelled as soon
//! as the request resolves.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::config::ProgressConfig;
use crate::error::Result;

/// Tick arithmetic without any timing attached.
#[derive(Clone, Debug)]
pub struct ProgressSimulation {
    value: u8,
    step: u8,
    cap: u8,
}

impl ProgressSimulation {
    pub fn new(step: u8, cap: u8) -> Self {
        Self {
            value: 0,
            step,
            cap: cap.min(99),
        }
    }

    pub fn from_config(config: &ProgressConfig) -> Self {
        Self::new(config.step, config.cap)
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_saturated(&self) -> bool {
        self.value >= self.cap
    }

    /// Advance by one step, clamped to the cap. Returns `None` once the value
    /// already sits at the cap, which is the signal to stop ticking.
    pub fn tick(&mut self) -> Option<u8> {
        if self.is_saturated() {
            return None;
        }
        self.value = self.value.saturating_add(self.step).min(self.cap);
        Some(self.value)
    }
}

/// A repeating timer driving a [`ProgressSimulation`] on its own thread.
///
/// `cancel` (or dropping the ticker) stops the thread and waits for it, so no
/// callback runs after it returns.
pub struct ProgressTicker {
    stop_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn start<F>(config: &ProgressConfig, on_tick: F) -> Result<Self>
    where
        F: Fn(u8) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let interval = config.interval();
        let mut simulation = ProgressSimulation::from_config(config);

        let handle = std::thread::Builder::new()
            .name("nutscan-progress".into())
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => match simulation.tick() {
                        Some(value) => on_tick(value),
                        None => {
                            debug!("Progress saturated at {}", simulation.value());
                            break;
                        }
                    },
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// True while the timer thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Progress ticker thread panicked");
            }
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
