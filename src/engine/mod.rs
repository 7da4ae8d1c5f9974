//! Training-engine collaborator seam
//!
//! The launcher never trains anything itself; it drives an [`Engine`]
//! through data preparation and training. The shipped [`FolderEngine`]
//! supplies the baseline hyperparameters and organizes class-subfolder
//! datasets; real engines implement the same trait out of tree.

pub mod folder;

pub use folder::{DatasetSummary, FolderEngine, SplitSummary};

use crate::config::Hparams;
use crate::error::Result;

/// Trait for training engines
///
/// An engine owns the default hyperparameter mapping and the two
/// collaborator operations the launch sequence delegates to. Both
/// operations are blocking and receive the final configuration read-only.
pub trait Engine {
    /// Opaque handle produced by data preparation and consumed by training.
    type Data;

    /// Baseline hyperparameter mapping, produced once at startup and
    /// treated as an immutable template by the merge step.
    fn default_hparams(&self) -> Hparams;

    /// Load and organize training/validation data for this configuration.
    fn prepare_data(&mut self, config: &Hparams) -> Result<Self::Data>;

    /// Run training to completion against prepared data.
    fn train(&mut self, config: &Hparams, data: &Self::Data) -> Result<()>;
}
