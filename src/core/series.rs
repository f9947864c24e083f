#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::data::Series;
use crate::core::scale::{CoordinateMapper, LogBase};

/// Vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub const fn start(self) -> Vertex {
        Vertex::new(self.x1, self.y1)
    }

    #[must_use]
    pub const fn end(self) -> Vertex {
        Vertex::new(self.x2, self.y2)
    }

    /// Trapezoid between the segment and the horizontal line at `baseline_y`.
    #[must_use]
    pub const fn fill_to(self, baseline_y: f64) -> [Vertex; 4] {
        [
            Vertex::new(self.x1, self.y1),
            Vertex::new(self.x2, self.y2),
            Vertex::new(self.x2, baseline_y),
            Vertex::new(self.x1, baseline_y),
        ]
    }
}

/// Geometry of one drawn pair `(j, j + 1)`.
///
/// `markers` holds the start point, plus the end point when the pair is the
/// last one of its series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentGeometry {
    pub index: usize,
    pub line: LineSegment,
    pub fill: Option<[Vertex; 4]>,
    pub markers: SmallVec<[Vertex; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    pub fill: bool,
    pub markers: bool,
    pub base: Option<LogBase>,
}

/// Projects one series into per-pair geometry, skipping any pair that touches
/// a missing value.
///
/// Only the first `min(values, x_raw)` entries take part, so trailing values
/// without an x position are ignored.
#[must_use]
pub fn project_series_segments(
    series: &Series,
    x_raw: &[f64],
    mapper: &CoordinateMapper,
    options: ProjectionOptions,
) -> Vec<SegmentGeometry> {
    let len = series.data.len().min(x_raw.len());
    if len < 2 {
        return Vec::new();
    }

    let baseline_y = mapper.bounds().bottom;
    let last_pair = len - 2;
    let mut segments = Vec::with_capacity(len - 1);

    for j in 0..len - 1 {
        let (Some(y1), Some(y2)) = (series.data[j], series.data[j + 1]) else {
            continue;
        };

        let line = LineSegment {
            x1: mapper.px_x(x_raw[j]),
            y1: mapper.px_y(y1, options.base),
            x2: mapper.px_x(x_raw[j + 1]),
            y2: mapper.px_y(y2, options.base),
        };

        let mut markers = SmallVec::new();
        if options.markers {
            markers.push(line.start());
            if j == last_pair {
                markers.push(line.end());
            }
        }

        segments.push(SegmentGeometry {
            index: j,
            line,
            fill: options.fill.then(|| line.fill_to(baseline_y)),
            markers,
        });
    }

    segments
}

/// Projects every series, preserving series order.
#[must_use]
pub fn project_all_series(
    series: &[Series],
    x_raw: &[f64],
    mapper: &CoordinateMapper,
    options: ProjectionOptions,
) -> Vec<Vec<SegmentGeometry>> {
    #[cfg(feature = "parallel-projection")]
    {
        series
            .par_iter()
            .map(|one| project_series_segments(one, x_raw, mapper, options))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        series
            .iter()
            .map(|one| project_series_segments(one, x_raw, mapper, options))
            .collect()
    }
}
