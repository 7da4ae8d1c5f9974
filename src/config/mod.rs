//! Command-line configuration
//!
//! This module owns the CLI surface, the hyperparameter value model, and
//! the merge step that combines parsed arguments with the engine's
//! default configuration.
//!
//! # Example
//!
//! ```
//! use lanzar::config::{merge_cli_into_hparams, parse_args, HparamValue};
//!
//! let cli = parse_args([
//!     "lanzar",
//!     "--train_dir", "data/train",
//!     "--val_dir", "data/val",
//!     "--epochs", "5",
//! ])
//! .unwrap();
//!
//! let mut defaults = lanzar::config::Hparams::new();
//! defaults.insert("epochs".to_string(), HparamValue::Int(10));
//!
//! let merged = merge_cli_into_hparams(&defaults, &cli);
//! assert_eq!(merged.get("epochs"), Some(&HparamValue::Int(5)));
//! ```

mod cli;
mod hparams;
mod merge;

pub use cli::{parse_args, parse_bool, Activation, Cli};
pub use hparams::{
    get_bool, get_float, get_int, get_int_list, get_str, render_report, HparamValue, Hparams,
};
pub use merge::merge_cli_into_hparams;
