use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::{ChartConfig, ChartData};
use crate::error::{ChartError, ChartResult};

fn from_json<T: DeserializeOwned>(input: &str, what: &str) -> ChartResult<T> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse {what} json: {e}")))
}

fn to_json_pretty<T: Serialize>(value: &T, what: &str) -> ChartResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize {what} json: {e}")))
}

impl ChartConfig {
    /// Parses a configuration document (`bg`, `dimensions`, `grid`, `series`).
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        from_json(input, "chart config")
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        to_json_pretty(self, "chart config")
    }
}

impl ChartData {
    /// Parses a data document (`title`, `grid.x`, `grid.y`, `series`).
    ///
    /// Axis variants are selected by their `type` field; fields that belong
    /// to another variant (such as `base` on a linear axis) are ignored.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        from_json(input, "chart data")
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        to_json_pretty(self, "chart data")
    }
}
