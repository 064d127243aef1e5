//! Shared types for the filtra pipeline core.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Static description of one numeric filter parameter.
///
/// Every parameter in this domain is an integer; `step` exists so the
/// UI can render a slider with the right granularity (e.g. blur kernel
/// sizes advance in steps of 2 to stay odd).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Wire name, unique within its filter (e.g. `"ksize"`).
    pub name: &'static str,
    /// Human-readable label shown next to the control.
    pub label: &'static str,
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
    /// Slider increment.
    pub step: i64,
    /// Value a fresh pipeline entry starts with.
    pub default: i64,
}

impl ParameterSpec {
    /// Clamp `value` into this parameter's `[min, max]` range.
    #[must_use]
    pub const fn clamp(&self, value: i64) -> i64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// One filter invocation in the wire representation consumed by both
/// service endpoints.
///
/// `params` is omitted from the JSON entirely for filters that take no
/// parameters, so parameterless entries serialize as `{"name": "gray"}`.
/// A `BTreeMap` keeps the emitted key order deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInvocation {
    /// Catalog key of the filter (e.g. `"blur"`).
    pub name: String,
    /// Parameter name -> value, in spec order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<String, i64>>,
}

/// Internal consistency faults in pipeline bookkeeping.
///
/// These indicate a programming error (a control referencing state that
/// does not exist), not a recoverable user condition. They are still
/// surfaced as `Result`s so callers decide how loudly to fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// A key was looked up that is not in the static catalog.
    #[error("unknown filter key: {0:?}")]
    UnknownFilter(String),

    /// An entry index referenced a position past the end of the pipeline.
    #[error("no pipeline entry at index {0}")]
    NoSuchEntry(usize),

    /// A parameter name is not declared by the entry's filter.
    #[error("filter {filter:?} has no parameter {name:?}")]
    UnknownParameter {
        /// Catalog key of the entry's filter.
        filter: &'static str,
        /// The parameter name that failed to resolve.
        name: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_range_is_identity() {
        let spec = ParameterSpec {
            name: "thresh",
            label: "Threshold",
            min: 0,
            max: 255,
            step: 1,
            default: 127,
        };
        assert_eq!(spec.clamp(0), 0);
        assert_eq!(spec.clamp(200), 200);
        assert_eq!(spec.clamp(255), 255);
    }

    #[test]
    fn clamp_snaps_to_bounds() {
        let spec = ParameterSpec {
            name: "ksize",
            label: "Kernel Size",
            min: 1,
            max: 31,
            step: 2,
            default: 5,
        };
        assert_eq!(spec.clamp(-4), 1);
        assert_eq!(spec.clamp(100), 31);
    }

    #[test]
    fn invocation_without_params_omits_field() {
        let inv = FilterInvocation {
            name: "gray".to_owned(),
            params: None,
        };
        let json = serde_json::to_string(&inv).unwrap();
        assert_eq!(json, r#"{"name":"gray"}"#);
    }

    #[test]
    fn invocation_with_params_serializes_map() {
        let mut params = BTreeMap::new();
        params.insert("ksize".to_owned(), 9);
        let inv = FilterInvocation {
            name: "blur".to_owned(),
            params: Some(params),
        };
        let json = serde_json::to_string(&inv).unwrap();
        assert_eq!(json, r#"{"name":"blur","params":{"ksize":9}}"#);
    }

    #[test]
    fn invocation_round_trips() {
        let mut params = BTreeMap::new();
        params.insert("threshold1".to_owned(), 100);
        params.insert("threshold2".to_owned(), 200);
        let inv = FilterInvocation {
            name: "canny".to_owned(),
            params: Some(params),
        };
        let json = serde_json::to_string(&inv).unwrap();
        let back: FilterInvocation = serde_json::from_str(&json).unwrap();
        assert_eq!(inv, back);
    }

    #[test]
    fn error_display_messages() {
        assert_eq!(
            PipelineError::UnknownFilter("sepia".to_owned()).to_string(),
            "unknown filter key: \"sepia\"",
        );
        assert_eq!(
            PipelineError::NoSuchEntry(3).to_string(),
            "no pipeline entry at index 3",
        );
        assert_eq!(
            PipelineError::UnknownParameter {
                filter: "blur",
                name: "sigma".to_owned(),
            }
            .to_string(),
            "filter \"blur\" has no parameter \"sigma\"",
        );
    }
}
