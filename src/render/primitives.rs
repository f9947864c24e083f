use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

fn ensure_size(value: f64, what: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Straight stroke between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: impl Into<String>,
        stroke_width: f64,
    ) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.into(),
            stroke_width,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        ensure_size(self.stroke_width, "line stroke width")
    }
}

/// SVG `text-anchor` of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub fill: String,
    pub anchor: TextAnchor,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
        fill: impl Into<String>,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            fill: fill.into(),
            anchor,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.x, self.y], "text")?;
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

impl RectPrimitive {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: fill.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.x, self.y], "rect")?;
        ensure_size(self.width, "rect width")?;
        ensure_size(self.height, "rect height")
    }
}

/// Filled circle with an outline, used for series point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        ensure_finite(&[self.cx, self.cy], "circle")?;
        ensure_size(self.radius, "circle radius")?;
        ensure_size(self.stroke_width, "circle stroke width")
    }
}

/// Closed filled polygon. Points are `(x, y)` pairs in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub points: Vec<(f64, f64)>,
    pub fill: String,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.points.len() < 3 {
            return Err(ChartError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        for (x, y) in &self.points {
            ensure_finite(&[*x, *y], "polygon")?;
        }
        Ok(())
    }
}
