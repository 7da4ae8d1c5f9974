//! Lanzar CLI
//!
//! Single-command training-run launcher.
//!
//! # Usage
//!
//! ```bash
//! # Launch with engine defaults
//! lanzar --train_dir data/train --val_dir data/val
//!
//! # Launch with overrides
//! lanzar --train_dir data/train --val_dir data/val --epochs 5 --batch_size 32
//!
//! # Tolerant booleans and integer sequences
//! lanzar --train_dir data/train --val_dir data/val \
//!     --data_augumentation yes --filter_size 3 3 5
//! ```

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use lanzar::engine::{Engine, FolderEngine};
use lanzar::track::MemoryTracker;
use lanzar::{merge_cli_into_hparams, pipeline, Cli, Error};

/// Conventional exit status for a user-initiated abort
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    // Argument errors exit here with clap's usage message and status.
    let cli = Cli::parse();

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        eprintln!("Error: failed to install interrupt handler: {e}");
        return ExitCode::FAILURE;
    }

    let mut engine = FolderEngine::new();
    let mut tracker = MemoryTracker::new();

    let defaults = engine.default_hparams();
    let hparams = merge_cli_into_hparams(&defaults, &cli);

    match pipeline::execute(&hparams, &mut engine, &mut tracker, &interrupted) {
        Ok(run_id) => {
            println!("[done] run {run_id} finished");
            ExitCode::SUCCESS
        }
        Err(Error::Interrupted) => {
            println!("[interrupted] training halted by user, exiting");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
