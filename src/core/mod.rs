pub mod color;
pub mod config;
pub mod data;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod time_format;

pub use color::{Rgba, add_alpha};
pub use config::{
    ChartConfig, Dimensions, Extent, FillStyle, FontStyle, GapPolicy, GridConfig, GridGaps,
    GridLines, LineStyle, Margins, PointStyle, SeriesStyle,
};
pub use data::{AxesData, ChartData, Series, TickRange, XAxis, XTicks, YAxis};
pub use scale::{CoordinateMapper, LogBase, PlotBounds, scale_linear, scale_log};
pub use series::{
    LineSegment, ProjectionOptions, SegmentGeometry, Vertex, project_all_series,
    project_series_segments,
};
pub use ticks::{
    GridLayout, GridTick, MAX_TICKS_PER_AXIS, TickKind, layout_x_ticks, layout_y_ticks,
};
pub use time_format::{TimeFormat, format_elapsed};
