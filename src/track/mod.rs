//! Experiment-tracking collaborator seam
//!
//! Provides the [`Tracker`] trait the launch sequence reports to, plus the
//! in-memory [`MemoryTracker`] backend used offline and in tests.
//!
//! # Example
//!
//! ```
//! use lanzar::track::{MemoryTracker, RunStatus, Tracker};
//!
//! let mut tracker = MemoryTracker::new();
//! tracker.login().unwrap();
//!
//! let config = lanzar::config::Hparams::new();
//! let run_id = tracker.init_run(&config).unwrap();
//! tracker.log_metric(&run_id, "loss", 0, 0.5).unwrap();
//! tracker.finish_run(&run_id).unwrap();
//!
//! assert_eq!(tracker.run(&run_id).unwrap().status, RunStatus::Finished);
//! ```

pub mod memory;

pub use memory::MemoryTracker;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Hparams;
use crate::error::Result;

/// Status of a tracked run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Run is open and accepting metrics
    Running,
    /// Run completion has been signalled
    Finished,
}

/// A single metric data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Training step
    pub step: u64,
    /// Metric value
    pub value: f64,
    /// Timestamp when recorded
    pub timestamp: DateTime<Utc>,
}

impl MetricPoint {
    /// Create a new metric point with current timestamp
    pub fn new(step: u64, value: f64) -> Self {
        Self {
            step,
            value,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for experiment-tracking backends
///
/// `login` must be idempotent: run initialization is allowed to call it
/// again internally without harm.
pub trait Tracker {
    /// Authenticate with the tracking service.
    fn login(&mut self) -> Result<()>;

    /// Open a run for the given configuration, returning its id.
    ///
    /// The project name is read from the configuration's `wandb_project`
    /// entry when present.
    fn init_run(&mut self, config: &Hparams) -> Result<String>;

    /// Record a metric value for a running run.
    fn log_metric(&mut self, run_id: &str, key: &str, step: u64, value: f64) -> Result<()>;

    /// Signal completion of a run to the tracking service.
    fn finish_run(&mut self, run_id: &str) -> Result<()>;
}
