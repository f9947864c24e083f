use serde::{Deserialize, Serialize};

/// Addressable group a chart renders into.
///
/// Each target maps to a stable key derived from the chart id, so a surface
/// can replace previous output instead of accumulating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderTarget {
    Grid,
    Datasets,
    Dataset(usize),
}

impl RenderTarget {
    #[must_use]
    pub fn key(self, chart_id: &str) -> String {
        match self {
            Self::Grid => format!("{chart_id}_grid"),
            Self::Datasets => format!("{chart_id}_datasets"),
            Self::Dataset(index) => format!("{chart_id}_dataset_{index}"),
        }
    }
}
