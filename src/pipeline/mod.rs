//! Fixed launch sequence over the collaborator seams
//!
//! One linear sequence, no retries, no branching beyond the interrupt
//! boundary: report the configuration, log in, prepare data, open the
//! run, train, finish the run. Collaborator errors propagate unmodified.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::{render_report, Hparams};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::track::Tracker;

/// Execute the launch sequence against the given collaborators.
///
/// The interrupt flag is observed before each step; once set, the
/// remaining steps are skipped (run finalization included) and
/// [`Error::Interrupted`] is returned. Collaborator calls are blocking, so
/// an interrupt raised mid-call takes effect when that call returns.
///
/// Returns the tracker-issued run id on success.
pub fn execute<E: Engine, T: Tracker>(
    config: &Hparams,
    engine: &mut E,
    tracker: &mut T,
    interrupted: &AtomicBool,
) -> Result<String> {
    check(interrupted)?;
    println!("[config] final hyperparameters\n{}", render_report(config));

    // Authenticate up front; init_run may log in again internally, which
    // the Tracker contract declares harmless.
    check(interrupted)?;
    tracker.login()?;

    check(interrupted)?;
    let data = engine.prepare_data(config)?;

    check(interrupted)?;
    let run_id = tracker.init_run(config)?;

    check(interrupted)?;
    engine.train(config, &data)?;

    check(interrupted)?;
    tracker.finish_run(&run_id)?;

    Ok(run_id)
}

fn check(interrupted: &AtomicBool) -> Result<()> {
    if interrupted.load(Ordering::SeqCst) {
        Err(Error::Interrupted)
    } else {
        Ok(())
    }
}
