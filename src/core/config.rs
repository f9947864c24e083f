use serde::{Deserialize, Serialize};

/// Rendering configuration for one chart.
///
/// Field names follow the JSON documents hosts already produce, so a config
/// can be loaded with [`ChartConfig::from_json_str`] without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Background fill painted behind everything; `None` leaves it transparent.
    #[serde(rename = "bg", default)]
    pub background: Option<String>,
    pub dimensions: Dimensions,
    pub grid: GridConfig,
    pub series: SeriesStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: Extent,
    pub height: Extent,
    pub margins: Margins,
}

/// Size of the whole image and of the plot area along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub image: f64,
    pub plot: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub gaps: GridGaps,
    pub lines: GridLines,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGaps {
    pub x: GapPolicy,
    /// Only a linear y-axis consumes this; log axes step by their base.
    #[serde(default)]
    pub y: Option<GapPolicy>,
}

/// Spacing policy between consecutive gridlines.
///
/// Serialized as `{"gap_by": "val" | "px", "val": <number>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gap_by", content = "val")]
pub enum GapPolicy {
    /// Fixed step in domain units.
    #[serde(rename = "val")]
    Value(f64),
    /// Step derived from a pixel distance along the plot.
    #[serde(rename = "px")]
    Pixels(f64),
}

impl GapPolicy {
    /// Resolves the domain-unit gap for an axis spanning `range` domain units
    /// over `plot_size` pixels.
    #[must_use]
    pub fn domain_gap(self, range: f64, plot_size: f64) -> f64 {
        match self {
            Self::Value(gap) => gap,
            Self::Pixels(px) => range / (plot_size / px),
        }
    }

    #[must_use]
    pub fn raw(self) -> f64 {
        match self {
            Self::Value(value) | Self::Pixels(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    pub axes: LineStyle,
    pub main: LineStyle,
    pub font: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub color: String,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub width: f64,
    pub alpha: f64,
    #[serde(default)]
    pub point: Option<PointStyle>,
    #[serde(default)]
    pub fill: Option<FillStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub alpha: f64,
}
