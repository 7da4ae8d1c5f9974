//! # Lanzar: Training-Run Launcher
//!
//! Lanzar is a single-command CLI wrapper around a pluggable training
//! engine and experiment tracker. It parses hyperparameter arguments,
//! merges them over the engine's default configuration, and drives the
//! fixed launch sequence: login, data preparation, run initialization,
//! training, run finalization.
//!
//! ## Architecture
//!
//! - **config**: CLI surface, hyperparameter value model, config merge
//! - **engine**: data-preparation + training collaborator seam
//! - **track**: experiment-tracking collaborator seam
//! - **pipeline**: the fixed dispatch sequence

pub mod config;
pub mod engine;
pub mod pipeline;
pub mod track;

pub mod error;

// Re-export commonly used types
pub use config::{merge_cli_into_hparams, parse_args, Cli, HparamValue, Hparams};
pub use error::{Error, Result};
