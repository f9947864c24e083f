//! svg-chart: line and time-series charts as SVG node trees.
//!
//! The crate splits a chart into pure layout (`core`), a backend-agnostic
//! node model and drawing surfaces (`render`), and the mutable chart handle
//! that ties them together (`api`). Grid and data are rendered into keyed
//! groups, so either can be redrawn in place without touching the other.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::SvgChart;
pub use crate::core::{ChartConfig, ChartData};
pub use error::{ChartError, ChartResult};
