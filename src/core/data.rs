use serde::{Deserialize, Serialize};

use crate::core::scale::LogBase;
use crate::core::time_format::TimeFormat;

/// Data snapshot rendered by a chart. Replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub title: String,
    pub grid: AxesData,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesData {
    pub x: XAxis,
    pub y: YAxis,
}

/// Domain bounds of an axis. `range` is expected to equal `max - min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRange {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl TickRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            range: max - min,
        }
    }
}

/// Precomputed x tick set; `raw[j]` is the x value of every series' `data[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XTicks {
    pub raw: Vec<f64>,
    /// Labels formatted by the producer. Gridline labels are regenerated, so
    /// these are only carried through.
    #[serde(default)]
    pub formatted: Vec<String>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl XTicks {
    #[must_use]
    pub fn bounds(&self) -> TickRange {
        TickRange {
            min: self.min,
            max: self.max,
            range: self.range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum XAxis {
    Linear {
        #[serde(default)]
        title: String,
        ticks: XTicks,
    },
    Time {
        #[serde(default)]
        title: String,
        ticks: XTicks,
        time_format: TimeFormat,
    },
}

impl XAxis {
    #[must_use]
    pub fn ticks(&self) -> &XTicks {
        match self {
            Self::Linear { ticks, .. } | Self::Time { ticks, .. } => ticks,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Linear { title, .. } | Self::Time { title, .. } => title,
        }
    }

    /// Duration format for time axes, `None` for numeric ones.
    #[must_use]
    pub fn time_format(&self) -> Option<TimeFormat> {
        match self {
            Self::Linear { .. } => None,
            Self::Time { time_format, .. } => Some(*time_format),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum YAxis {
    Linear {
        #[serde(default)]
        title: String,
        /// Absent only for degenerate data that has nothing to draw.
        #[serde(default)]
        ticks: Option<TickRange>,
    },
    Log {
        #[serde(default)]
        title: String,
        ticks: TickRange,
        base: LogBase,
    },
}

impl YAxis {
    #[must_use]
    pub fn ticks(&self) -> Option<TickRange> {
        match self {
            Self::Linear { ticks, .. } => *ticks,
            Self::Log { ticks, .. } => Some(*ticks),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Linear { title, .. } | Self::Log { title, .. } => title,
        }
    }

    #[must_use]
    pub fn base(&self) -> Option<LogBase> {
        match self {
            Self::Linear { .. } => None,
            Self::Log { base, .. } => Some(*base),
        }
    }
}

/// One line of the chart. `None` values are gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub data: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            data,
        }
    }

    /// True when at least one adjacent pair of values is present.
    #[must_use]
    pub fn has_drawable_pair(&self) -> bool {
        self.data
            .windows(2)
            .any(|pair| pair[0].is_some() && pair[1].is_some())
    }
}
