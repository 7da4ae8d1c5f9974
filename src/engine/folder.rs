//! Directory-backed engine
//!
//! `FolderEngine` works with the usual image-classification layout: a
//! dataset root holding one sub-folder per class, one file per sample.
//! Data preparation scans both splits into a [`DatasetSummary`]; the
//! training pass re-checks the hyperparameters it consumes against the
//! prepared data. Engines that actually optimize a model implement
//! [`Engine`](super::Engine) with the same contract.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::Engine;
use crate::config::{get_float, get_int, get_str, HparamValue, Hparams};
use crate::error::{Error, Result};

/// Engine over class-subfolder datasets
#[derive(Debug, Default)]
pub struct FolderEngine;

impl FolderEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Per-class sample counts for one dataset split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    /// Split root directory
    pub root: PathBuf,
    /// Class name -> sample count
    pub classes: BTreeMap<String, usize>,
}

impl SplitSummary {
    /// Total samples across all classes
    pub fn sample_count(&self) -> usize {
        self.classes.values().sum()
    }

    /// Number of classes
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// Opaque data handle produced by [`FolderEngine::prepare_data`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub train: SplitSummary,
    pub val: SplitSummary,
}

fn scan_split(root: &Path) -> Result<SplitSummary> {
    if !root.is_dir() {
        return Err(Error::Data(format!(
            "dataset root {} is not a directory",
            root.display()
        )));
    }

    let mut classes = BTreeMap::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let samples = fs::read_dir(entry.path())?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .count();
        classes.insert(entry.file_name().to_string_lossy().into_owned(), samples);
    }

    if classes.is_empty() {
        return Err(Error::Data(format!(
            "no class sub-folders under {}",
            root.display()
        )));
    }

    Ok(SplitSummary {
        root: root.to_path_buf(),
        classes,
    })
}

impl Engine for FolderEngine {
    type Data = DatasetSummary;

    fn default_hparams(&self) -> Hparams {
        let mut hp = Hparams::new();
        hp.insert("wandb_project".into(), HparamValue::from("DL Assignment 2"));
        hp.insert("epochs".into(), HparamValue::Int(10));
        hp.insert("learning_rate".into(), HparamValue::Float(1e-4));
        hp.insert("batch_size".into(), HparamValue::Int(64));
        hp.insert("num_of_filter".into(), HparamValue::Int(32));
        hp.insert(
            "filter_size".into(),
            HparamValue::IntList(vec![3, 3, 3, 3, 3]),
        );
        hp.insert("actv_func".into(), HparamValue::from("gelu"));
        hp.insert("filter_multiplier".into(), HparamValue::Float(1.0));
        hp.insert("data_augumentation".into(), HparamValue::Bool(false));
        hp.insert("batch_normalization".into(), HparamValue::Bool(true));
        hp.insert("dropout".into(), HparamValue::Float(0.2));
        hp.insert("dense_layer_size".into(), HparamValue::Int(128));
        hp.insert("conv_layers".into(), HparamValue::Int(5));
        hp
    }

    fn prepare_data(&mut self, config: &Hparams) -> Result<Self::Data> {
        let train_root = get_str(config, "train_dir").map_err(Error::Data)?;
        let val_root = get_str(config, "val_dir").map_err(Error::Data)?;

        let train = scan_split(Path::new(train_root))?;
        let val = scan_split(Path::new(val_root))?;

        if train.classes.keys().ne(val.classes.keys()) {
            let train_classes: Vec<_> = train.classes.keys().cloned().collect();
            let val_classes: Vec<_> = val.classes.keys().cloned().collect();
            return Err(Error::Data(format!(
                "validation classes {val_classes:?} do not match training classes {train_classes:?}"
            )));
        }

        println!(
            "[data] {} training / {} validation samples across {} classes",
            train.sample_count(),
            val.sample_count(),
            train.class_count()
        );

        Ok(DatasetSummary { train, val })
    }

    fn train(&mut self, config: &Hparams, data: &Self::Data) -> Result<()> {
        let epochs = get_int(config, "epochs").map_err(Error::Training)?;
        let batch_size = get_int(config, "batch_size").map_err(Error::Training)?;
        let learning_rate = get_float(config, "learning_rate").map_err(Error::Training)?;

        if epochs <= 0 {
            return Err(Error::Training(format!("epochs must be positive, got {epochs}")));
        }
        if batch_size <= 0 {
            return Err(Error::Training(format!(
                "batch_size must be positive, got {batch_size}"
            )));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(Error::Training(format!(
                "learning_rate must be a positive finite value, got {learning_rate}"
            )));
        }

        let samples = data.train.sample_count();
        if batch_size as usize > samples {
            return Err(Error::Training(format!(
                "batch_size {batch_size} exceeds the {samples} available training samples"
            )));
        }

        println!(
            "[train] offline pass checked: {} epochs, batches of {} over {} samples (lr={})",
            epochs, batch_size, samples, learning_rate
        );
        Ok(())
    }
}
