//! CLI argument parsing and validation
//!
//! Single command, no subcommands. Option names keep their underscored
//! spelling so existing launch scripts keep working unchanged.
//!
//! # Usage
//!
//! ```bash
//! lanzar --train_dir data/train --val_dir data/val
//! lanzar --train_dir data/train --val_dir data/val --epochs 5 --batch_size 32
//! lanzar --train_dir data/train --val_dir data/val --actv_func silu --filter_size 3 3 5
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::error::Error;

/// Lanzar: launch a tracked training run with custom hyperparameters
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lanzar")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(about = "Launch a tracked training run with custom hyperparameters")]
pub struct Cli {
    /// Tracking-service project name
    #[arg(long = "wandb_project", default_value = "DL Assignment 2")]
    pub wandb_project: String,

    /// Folder with training sub-folders (one per class)
    #[arg(long = "train_dir")]
    pub train_dir: PathBuf,

    /// Folder with validation sub-folders (one per class)
    #[arg(long = "val_dir")]
    pub val_dir: PathBuf,

    /// Number of training epochs
    #[arg(long = "epochs")]
    pub epochs: Option<i64>,

    /// Optimizer learning rate
    #[arg(long = "learning_rate")]
    pub learning_rate: Option<f64>,

    /// Samples per batch
    #[arg(long = "batch_size")]
    pub batch_size: Option<i64>,

    /// Filters in the first convolution block
    #[arg(long = "num_of_filter")]
    pub num_of_filter: Option<i64>,

    /// Kernel sizes, one per convolution block
    #[arg(long = "filter_size", num_args = 1.., value_name = "N")]
    pub filter_size: Option<Vec<i64>>,

    /// Activation function
    #[arg(long = "actv_func")]
    pub actv_func: Option<Activation>,

    /// Filter-count growth factor between blocks
    #[arg(long = "filter_multiplier")]
    pub filter_multiplier: Option<f64>,

    /// Enable data augmentation (yes/no, true/false, t/f, 1/0)
    #[arg(long = "data_augumentation", value_parser = parse_bool)]
    pub data_augumentation: Option<bool>,

    /// Enable batch normalization (yes/no, true/false, t/f, 1/0)
    #[arg(long = "batch_normalization", value_parser = parse_bool)]
    pub batch_normalization: Option<bool>,

    /// Dropout probability
    #[arg(long = "dropout")]
    pub dropout: Option<f64>,

    /// Units in the dense classification layer
    #[arg(long = "dense_layer_size")]
    pub dense_layer_size: Option<i64>,

    /// Number of convolution blocks
    #[arg(long = "conv_layers")]
    pub conv_layers: Option<i64>,
}

/// Handle diverse truthy/falsey CLI inputs
pub fn parse_bool(v: &str) -> Result<bool, Error> {
    match v.to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "1" => Ok(true),
        "no" | "false" | "f" | "0" => Ok(false),
        _ => Err(Error::InvalidArgument(format!(
            "boolean value expected, got '{v}' (accepted: yes/no, true/false, t/f, 1/0)"
        ))),
    }
}

/// Activation function choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Gelu,
    Elu,
    Silu,
    Selu,
    LeakyRelu,
}

impl Activation {
    /// Name used in the configuration mapping
    pub fn as_str(self) -> &'static str {
        match self {
            Activation::Gelu => "gelu",
            Activation::Elu => "elu",
            Activation::Silu => "silu",
            Activation::Selu => "selu",
            Activation::LeakyRelu => "leaky_relu",
        }
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Activation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gelu" => Ok(Activation::Gelu),
            "elu" => Ok(Activation::Elu),
            "silu" => Ok(Activation::Silu),
            "selu" => Ok(Activation::Selu),
            "leaky_relu" => Ok(Activation::LeakyRelu),
            _ => Err(Error::InvalidArgument(format!(
                "unknown activation: {s}. Valid choices: gelu, elu, silu, selu, leaky_relu"
            ))),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec!["lanzar", "--train_dir", "data/train", "--val_dir", "data/val"]
    }

    #[test]
    fn test_parse_minimal() {
        let cli = parse_args(base_args()).unwrap();
        assert_eq!(cli.train_dir, PathBuf::from("data/train"));
        assert_eq!(cli.val_dir, PathBuf::from("data/val"));
        assert_eq!(cli.wandb_project, "DL Assignment 2");
        assert_eq!(cli.epochs, None);
        assert_eq!(cli.filter_size, None);
        assert_eq!(cli.actv_func, None);
    }

    #[test]
    fn test_parse_overrides() {
        let mut args = base_args();
        args.extend([
            "--epochs",
            "5",
            "--batch_size",
            "32",
            "--learning_rate",
            "0.001",
            "--dropout",
            "0.3",
        ]);
        let cli = parse_args(args).unwrap();
        assert_eq!(cli.epochs, Some(5));
        assert_eq!(cli.batch_size, Some(32));
        assert!((cli.learning_rate.unwrap() - 0.001).abs() < 1e-9);
        assert!((cli.dropout.unwrap() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_parse_filter_size_sequence() {
        let mut args = base_args();
        args.extend(["--filter_size", "3", "3", "5", "--epochs", "2"]);
        let cli = parse_args(args).unwrap();
        assert_eq!(cli.filter_size, Some(vec![3, 3, 5]));
        assert_eq!(cli.epochs, Some(2));
    }

    #[test]
    fn test_parse_activation() {
        let mut args = base_args();
        args.extend(["--actv_func", "leaky_relu"]);
        let cli = parse_args(args).unwrap();
        assert_eq!(cli.actv_func, Some(Activation::LeakyRelu));
    }

    #[test]
    fn test_parse_activation_invalid() {
        let mut args = base_args();
        args.extend(["--actv_func", "relu6"]);
        assert!(parse_args(args).is_err());
    }

    #[test]
    fn test_parse_wandb_project_override() {
        let mut args = base_args();
        args.extend(["--wandb_project", "sweep-7"]);
        let cli = parse_args(args).unwrap();
        assert_eq!(cli.wandb_project, "sweep-7");
    }

    #[test]
    fn test_missing_train_dir() {
        let result = parse_args(["lanzar", "--val_dir", "data/val"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_val_dir() {
        let result = parse_args(["lanzar", "--train_dir", "data/train"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bool_truthy() {
        for v in ["yes", "true", "t", "1", "YES", "True", "T", "Yes"] {
            assert!(parse_bool(v).unwrap(), "input: {v}");
        }
    }

    #[test]
    fn test_parse_bool_falsey() {
        for v in ["no", "false", "f", "0", "NO", "False", "F", "No"] {
            assert!(!parse_bool(v).unwrap(), "input: {v}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        for v in ["maybe", "2", "on", "off", ""] {
            let err = parse_bool(v).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "input: {v}");
        }
    }

    #[test]
    fn test_parse_bool_option_rejected() {
        let mut args = base_args();
        args.extend(["--data_augumentation", "maybe"]);
        assert!(parse_args(args).is_err());
    }

    #[test]
    fn test_parse_bool_options_accepted() {
        let mut args = base_args();
        args.extend(["--data_augumentation", "Yes", "--batch_normalization", "0"]);
        let cli = parse_args(args).unwrap();
        assert_eq!(cli.data_augumentation, Some(true));
        assert_eq!(cli.batch_normalization, Some(false));
    }

    #[test]
    fn test_activation_from_str_exact() {
        assert_eq!("gelu".parse::<Activation>().unwrap(), Activation::Gelu);
        assert_eq!("elu".parse::<Activation>().unwrap(), Activation::Elu);
        assert_eq!("silu".parse::<Activation>().unwrap(), Activation::Silu);
        assert_eq!("selu".parse::<Activation>().unwrap(), Activation::Selu);
        assert_eq!(
            "leaky_relu".parse::<Activation>().unwrap(),
            Activation::LeakyRelu
        );
        // Choices are exact; case variants are rejected.
        assert!("GELU".parse::<Activation>().is_err());
        assert!("".parse::<Activation>().is_err());
    }

    #[test]
    fn test_activation_round_trip() {
        for a in [
            Activation::Gelu,
            Activation::Elu,
            Activation::Silu,
            Activation::Selu,
            Activation::LeakyRelu,
        ] {
            assert_eq!(a.as_str().parse::<Activation>().unwrap(), a);
        }
    }
}
