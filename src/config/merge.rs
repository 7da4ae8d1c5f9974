//! Merge parsed CLI values over the engine's default configuration
//!
//! The merge starts from a copy of the defaults and overwrites one key per
//! option through an explicit table, so a mistyped key is a compile error
//! rather than a silently dropped override. An option whose key is absent
//! from the defaults is accepted by the parser but never applied; the two
//! dataset paths are always attached.

use super::cli::Cli;
use super::hparams::{HparamValue, Hparams};

/// Combine the default configuration with parsed CLI values.
///
/// Infallible: every default key survives, CLI-supplied values win where
/// their key exists in the defaults, and `train_dir`/`val_dir` are injected
/// unconditionally from the two required options.
pub fn merge_cli_into_hparams(defaults: &Hparams, cli: &Cli) -> Hparams {
    let mut params = defaults.clone();

    // One entry per CLI option. `wandb_project` carries a literal CLI
    // default, so its parsed value is always present.
    override_key(
        &mut params,
        "wandb_project",
        Some(HparamValue::Str(cli.wandb_project.clone())),
    );
    override_key(&mut params, "epochs", cli.epochs.map(HparamValue::Int));
    override_key(
        &mut params,
        "learning_rate",
        cli.learning_rate.map(HparamValue::Float),
    );
    override_key(
        &mut params,
        "batch_size",
        cli.batch_size.map(HparamValue::Int),
    );
    override_key(
        &mut params,
        "num_of_filter",
        cli.num_of_filter.map(HparamValue::Int),
    );
    override_key(
        &mut params,
        "filter_size",
        cli.filter_size.clone().map(HparamValue::IntList),
    );
    override_key(
        &mut params,
        "actv_func",
        cli.actv_func.map(|a| HparamValue::Str(a.as_str().to_string())),
    );
    override_key(
        &mut params,
        "filter_multiplier",
        cli.filter_multiplier.map(HparamValue::Float),
    );
    override_key(
        &mut params,
        "data_augumentation",
        cli.data_augumentation.map(HparamValue::Bool),
    );
    override_key(
        &mut params,
        "batch_normalization",
        cli.batch_normalization.map(HparamValue::Bool),
    );
    override_key(&mut params, "dropout", cli.dropout.map(HparamValue::Float));
    override_key(
        &mut params,
        "dense_layer_size",
        cli.dense_layer_size.map(HparamValue::Int),
    );
    override_key(
        &mut params,
        "conv_layers",
        cli.conv_layers.map(HparamValue::Int),
    );

    // Dataset paths expected by data preparation, attached regardless of
    // whether the defaults know these keys.
    params.insert(
        "train_dir".to_string(),
        HparamValue::Str(cli.train_dir.to_string_lossy().into_owned()),
    );
    params.insert(
        "val_dir".to_string(),
        HparamValue::Str(cli.val_dir.to_string_lossy().into_owned()),
    );

    params
}

/// Overwrite `key` only when the CLI supplied a value and the defaults
/// already contain the key.
fn override_key(params: &mut Hparams, key: &str, value: Option<HparamValue>) {
    if let Some(value) = value {
        if params.contains_key(key) {
            params.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod fixtures {
    use super::*;
    use crate::config::cli::parse_args;

    pub fn defaults() -> Hparams {
        let mut hp = Hparams::new();
        hp.insert("wandb_project".into(), HparamValue::from("DL Assignment 2"));
        hp.insert("epochs".into(), HparamValue::Int(10));
        hp.insert("learning_rate".into(), HparamValue::Float(1e-4));
        hp.insert("batch_size".into(), HparamValue::Int(64));
        hp.insert("num_of_filter".into(), HparamValue::Int(32));
        hp.insert("filter_size".into(), HparamValue::IntList(vec![3, 3, 3, 3, 3]));
        hp.insert("actv_func".into(), HparamValue::from("gelu"));
        hp.insert("filter_multiplier".into(), HparamValue::Float(1.0));
        hp.insert("data_augumentation".into(), HparamValue::Bool(false));
        hp.insert("batch_normalization".into(), HparamValue::Bool(true));
        hp.insert("dropout".into(), HparamValue::Float(0.2));
        hp.insert("dense_layer_size".into(), HparamValue::Int(128));
        hp.insert("conv_layers".into(), HparamValue::Int(5));
        hp
    }

    pub fn cli(extra: &[&str]) -> Cli {
        let mut args = vec!["lanzar", "--train_dir", "/data/train", "--val_dir", "/data/val"];
        args.extend_from_slice(extra);
        parse_args(args).unwrap()
    }
}
