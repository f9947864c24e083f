use serde::{Deserialize, Serialize};

use crate::core::config::ChartConfig;
use crate::core::data::TickRange;

/// Affine map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values outside the input range extrapolate; nothing is clamped.
#[must_use]
pub fn scale_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Logarithmic map: the affine map applied to `log_base` of each input.
///
/// `value <= 0` yields a non-finite result.
#[must_use]
pub fn scale_log(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    base: LogBase,
) -> f64 {
    let log = |v: f64| v.ln() / base.value().ln();
    scale_linear(log(value), log(in_min), log(in_max), out_min, out_max)
}

/// Supported logarithm bases for a log y-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LogBase {
    Two,
    Ten,
}

impl LogBase {
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Two => 2.0,
            Self::Ten => 10.0,
        }
    }
}

impl TryFrom<u32> for LogBase {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Self::Two),
            10 => Ok(Self::Ten),
            other => Err(format!("log base must be 2 or 10, got {other}")),
        }
    }
}

impl From<LogBase> for u32 {
    fn from(base: LogBase) -> Self {
        match base {
            LogBase::Two => 2,
            LogBase::Ten => 10,
        }
    }
}

/// Pixel boundaries of the plot area inside the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn from_config(config: &ChartConfig) -> Self {
        let dimensions = &config.dimensions;
        let top = dimensions.margins.top;
        let left = dimensions.margins.left;
        Self {
            top,
            left,
            bottom: top + dimensions.height.plot,
            right: left + dimensions.width.plot,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}

/// Binds the scale functions to the plot bounds and the current tick ranges.
///
/// The y-axis is inverted: increasing domain values move toward `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: PlotBounds,
    x_range: TickRange,
    y_range: Option<TickRange>,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(bounds: PlotBounds, x_range: TickRange, y_range: Option<TickRange>) -> Self {
        Self {
            bounds,
            x_range,
            y_range,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> PlotBounds {
        self.bounds
    }

    #[must_use]
    pub fn px_x(&self, value: f64) -> f64 {
        scale_linear(
            value,
            self.x_range.min,
            self.x_range.max,
            self.bounds.left,
            self.bounds.right,
        )
    }

    /// Maps a y value, logarithmically when `base` is given.
    ///
    /// Without a y tick range every value maps to `NaN`; callers validate the
    /// data before projecting anything onto the y-axis.
    #[must_use]
    pub fn px_y(&self, value: f64, base: Option<LogBase>) -> f64 {
        let Some(range) = self.y_range else {
            return f64::NAN;
        };
        match base {
            None => scale_linear(
                value,
                range.min,
                range.max,
                self.bounds.bottom,
                self.bounds.top,
            ),
            Some(base) => scale_log(
                value,
                range.min,
                range.max,
                self.bounds.bottom,
                self.bounds.top,
                base,
            ),
        }
    }
}
