//! In-memory tracking backend
//!
//! Keeps runs and metric series in process memory. Used by the launcher
//! when no remote tracking service is wired in, and by tests.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{MetricPoint, RunStatus, Tracker};
use crate::config::{get_str, Hparams};
use crate::error::{Error, Result};

/// Project name used when the configuration carries no `wandb_project`
const UNNAMED_PROJECT: &str = "(unnamed)";

/// In-memory experiment tracker
#[derive(Debug, Default)]
pub struct MemoryTracker {
    runs: HashMap<String, RunRecord>,
    metrics: HashMap<String, Vec<MetricPoint>>, // run_id:key -> series
    next_run_id: u64,
    logins: u64,
}

/// State held for one tracked run
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub project: String,
    pub config: Hparams,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl MemoryTracker {
    /// Create a new in-memory tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs ever opened
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Number of login calls observed
    pub fn login_count(&self) -> u64 {
        self.logins
    }

    /// Whether any login has happened
    pub fn is_logged_in(&self) -> bool {
        self.logins > 0
    }

    /// Look up a run record
    pub fn run(&self, run_id: &str) -> Option<&RunRecord> {
        self.runs.get(run_id)
    }

    /// Metric series for a run and key, ordered by step
    pub fn metrics(&self, run_id: &str, key: &str) -> Result<Vec<MetricPoint>> {
        if !self.runs.contains_key(run_id) {
            return Err(Error::Tracking(format!("run not found: {run_id}")));
        }

        let mut points = self
            .metrics
            .get(&format!("{run_id}:{key}"))
            .cloned()
            .unwrap_or_default();
        points.sort_by_key(|p| p.step);
        Ok(points)
    }
}

impl Tracker for MemoryTracker {
    fn login(&mut self) -> Result<()> {
        self.logins += 1;
        Ok(())
    }

    fn init_run(&mut self, config: &Hparams) -> Result<String> {
        // Explicit login may have been skipped; logging in here is harmless
        // because login is idempotent.
        if !self.is_logged_in() {
            self.login()?;
        }

        let project = get_str(config, "wandb_project")
            .unwrap_or(UNNAMED_PROJECT)
            .to_string();

        let id = self.next_run_id;
        self.next_run_id += 1;
        let run_id = format!("run-{id}");

        self.runs.insert(
            run_id.clone(),
            RunRecord {
                project,
                config: config.clone(),
                status: RunStatus::Running,
                started_at: Utc::now(),
                finished_at: None,
            },
        );

        Ok(run_id)
    }

    fn log_metric(&mut self, run_id: &str, key: &str, step: u64, value: f64) -> Result<()> {
        let run = self
            .runs
            .get(run_id)
            .ok_or_else(|| Error::Tracking(format!("run not found: {run_id}")))?;

        if run.status != RunStatus::Running {
            return Err(Error::Tracking(format!(
                "cannot log to finished run {run_id}"
            )));
        }

        self.metrics
            .entry(format!("{run_id}:{key}"))
            .or_default()
            .push(MetricPoint::new(step, value));

        Ok(())
    }

    fn finish_run(&mut self, run_id: &str) -> Result<()> {
        let run = self
            .runs
            .get_mut(run_id)
            .ok_or_else(|| Error::Tracking(format!("run not found: {run_id}")))?;

        if run.status != RunStatus::Running {
            return Err(Error::Tracking(format!("run {run_id} already finished")));
        }

        run.status = RunStatus::Finished;
        run.finished_at = Some(Utc::now());
        Ok(())
    }
}
