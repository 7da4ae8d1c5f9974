//! Hyperparameter value model
//!
//! The configuration handed to collaborators is a flat mapping from option
//! name to a primitive value. Values serialize untagged, so the report
//! printed at launch reads as plain JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final configuration mapping passed read-only to collaborators.
///
/// A `BTreeMap` keeps the rendered report deterministic.
pub type Hparams = BTreeMap<String, HparamValue>;

/// A single hyperparameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HparamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    IntList(Vec<i64>),
}

impl HparamValue {
    fn kind(&self) -> &'static str {
        match self {
            HparamValue::Bool(_) => "boolean",
            HparamValue::Int(_) => "integer",
            HparamValue::Float(_) => "float",
            HparamValue::Str(_) => "string",
            HparamValue::IntList(_) => "integer list",
        }
    }
}

impl From<bool> for HparamValue {
    fn from(v: bool) -> Self {
        HparamValue::Bool(v)
    }
}

impl From<i64> for HparamValue {
    fn from(v: i64) -> Self {
        HparamValue::Int(v)
    }
}

impl From<f64> for HparamValue {
    fn from(v: f64) -> Self {
        HparamValue::Float(v)
    }
}

impl From<&str> for HparamValue {
    fn from(v: &str) -> Self {
        HparamValue::Str(v.to_string())
    }
}

impl From<String> for HparamValue {
    fn from(v: String) -> Self {
        HparamValue::Str(v)
    }
}

impl From<Vec<i64>> for HparamValue {
    fn from(v: Vec<i64>) -> Self {
        HparamValue::IntList(v)
    }
}

/// Read an integer value, with a message suitable for collaborator errors
pub fn get_int(params: &Hparams, key: &str) -> Result<i64, String> {
    match params.get(key) {
        Some(HparamValue::Int(v)) => Ok(*v),
        Some(other) => Err(format!("{key}: expected integer, got {}", other.kind())),
        None => Err(format!("{key}: missing from configuration")),
    }
}

/// Read a float value; integer values are widened
pub fn get_float(params: &Hparams, key: &str) -> Result<f64, String> {
    match params.get(key) {
        Some(HparamValue::Float(v)) => Ok(*v),
        Some(HparamValue::Int(v)) => Ok(*v as f64),
        Some(other) => Err(format!("{key}: expected float, got {}", other.kind())),
        None => Err(format!("{key}: missing from configuration")),
    }
}

/// Read a boolean value
pub fn get_bool(params: &Hparams, key: &str) -> Result<bool, String> {
    match params.get(key) {
        Some(HparamValue::Bool(v)) => Ok(*v),
        Some(other) => Err(format!("{key}: expected boolean, got {}", other.kind())),
        None => Err(format!("{key}: missing from configuration")),
    }
}

/// Read a string value
pub fn get_str<'a>(params: &'a Hparams, key: &str) -> Result<&'a str, String> {
    match params.get(key) {
        Some(HparamValue::Str(v)) => Ok(v),
        Some(other) => Err(format!("{key}: expected string, got {}", other.kind())),
        None => Err(format!("{key}: missing from configuration")),
    }
}

/// Read an integer-sequence value
pub fn get_int_list<'a>(params: &'a Hparams, key: &str) -> Result<&'a [i64], String> {
    match params.get(key) {
        Some(HparamValue::IntList(v)) => Ok(v),
        Some(other) => Err(format!(
            "{key}: expected integer list, got {}",
            other.kind()
        )),
        None => Err(format!("{key}: missing from configuration")),
    }
}

/// Render the configuration as pretty-printed JSON for the launch report
pub fn render_report(params: &Hparams) -> String {
    serde_json::to_string_pretty(params).unwrap_or_else(|_| format!("{params:#?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hparams {
        let mut params = Hparams::new();
        params.insert("epochs".to_string(), HparamValue::Int(10));
        params.insert("learning_rate".to_string(), HparamValue::Float(1e-4));
        params.insert("batch_normalization".to_string(), HparamValue::Bool(true));
        params.insert("actv_func".to_string(), HparamValue::from("gelu"));
        params.insert(
            "filter_size".to_string(),
            HparamValue::IntList(vec![3, 3, 5]),
        );
        params
    }

    #[test]
    fn test_typed_getters() {
        let params = sample();
        assert_eq!(get_int(&params, "epochs"), Ok(10));
        assert_eq!(get_float(&params, "learning_rate"), Ok(1e-4));
        assert_eq!(get_bool(&params, "batch_normalization"), Ok(true));
        assert_eq!(get_str(&params, "actv_func"), Ok("gelu"));
        assert_eq!(get_int_list(&params, "filter_size"), Ok(&[3, 3, 5][..]));
    }

    #[test]
    fn test_get_float_widens_int() {
        let params = sample();
        assert_eq!(get_float(&params, "epochs"), Ok(10.0));
    }

    #[test]
    fn test_getter_type_mismatch() {
        let params = sample();
        let err = get_int(&params, "actv_func").unwrap_err();
        assert!(err.contains("expected integer"));
        assert!(err.contains("string"));
    }

    #[test]
    fn test_getter_missing_key() {
        let params = sample();
        let err = get_bool(&params, "nonexistent").unwrap_err();
        assert!(err.contains("missing"));
    }

    #[test]
    fn test_report_is_plain_json() {
        let params = sample();
        let report = render_report(&params);

        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed["epochs"], serde_json::json!(10));
        assert_eq!(parsed["actv_func"], serde_json::json!("gelu"));
        assert_eq!(parsed["filter_size"], serde_json::json!([3, 3, 5]));
        assert_eq!(parsed["batch_normalization"], serde_json::json!(true));
    }

    #[test]
    fn test_report_deterministic_order() {
        let params = sample();
        assert_eq!(render_report(&params), render_report(&params.clone()));

        // BTreeMap iteration is sorted, so keys appear alphabetically.
        let report = render_report(&params);
        let actv = report.find("actv_func").unwrap();
        let epochs = report.find("epochs").unwrap();
        assert!(actv < epochs);
    }

    #[test]
    fn test_value_serde_round_trip() {
        let params = sample();
        let json = serde_json::to_string(&params).unwrap();
        let back: Hparams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
