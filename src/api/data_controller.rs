use std::mem;

use tracing::{debug, trace, warn};

use crate::core::{
    ChartData, ProjectionOptions, SegmentGeometry, Series, add_alpha, project_all_series,
};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, DrawingSurface, Group, LinePrimitive, Node, PolygonPrimitive, RenderTarget,
};

use super::SvgChart;
use super::validation::validate_data;

/// Outline drawn around every point marker.
const MARKER_STROKE: &str = "white";
const MARKER_STROKE_WIDTH: f64 = 2.0;

impl<S: DrawingSurface> SvgChart<S> {
    /// Replaces the data snapshot without rendering anything.
    ///
    /// The new data is validated against the current configuration first; on
    /// error the previous snapshot stays in place.
    pub fn set_data(&mut self, data: ChartData) -> ChartResult<()> {
        validate_data(&data, &self.config)?;
        debug!(
            chart_id = %self.id,
            previous_series = self.data.series.len(),
            series = data.series.len(),
            "chart data replaced"
        );
        self.data = data;
        Ok(())
    }

    /// Projects every series onto the plot area without building nodes.
    #[must_use]
    pub fn project_series(&self) -> Vec<Vec<SegmentGeometry>> {
        let style = &self.config.series;
        let options = ProjectionOptions {
            fill: style.fill.is_some(),
            markers: style.point.is_some(),
            base: self.data.grid.y.base(),
        };
        project_all_series(
            &self.data.series,
            &self.data.grid.x.ticks().raw,
            &self.mapper(),
            options,
        )
    }

    /// Redraws the series.
    ///
    /// `new_data` is swapped in first when given. With `refresh_grid` the grid
    /// is rebuilt and replaced before the series are drawn. With `append` the
    /// datasets group replaces `{id}_datasets` under the mounted root.
    ///
    /// On error the previous data snapshot is restored, so the chart state
    /// keeps matching what the surface shows.
    pub fn update_data(
        &mut self,
        append: bool,
        new_data: Option<ChartData>,
        refresh_grid: bool,
    ) -> ChartResult<Group> {
        let previous = match new_data {
            Some(data) => {
                validate_data(&data, &self.config)?;
                Some(mem::replace(&mut self.data, data))
            }
            None => None,
        };

        match self.redraw_datasets(append, refresh_grid) {
            Ok(datasets) => {
                if let Some(previous) = previous {
                    debug!(
                        chart_id = %self.id,
                        previous_series = previous.series.len(),
                        series = self.data.series.len(),
                        "chart data replaced"
                    );
                }
                Ok(datasets)
            }
            Err(err) => {
                if let Some(previous) = previous {
                    warn!(
                        chart_id = %self.id,
                        error = %err,
                        "data refresh failed; previous data restored"
                    );
                    self.data = previous;
                }
                Err(err)
            }
        }
    }

    fn redraw_datasets(&mut self, append: bool, refresh_grid: bool) -> ChartResult<Group> {
        if refresh_grid {
            self.update_grid(true)?;
        }

        let key = RenderTarget::Datasets.key(&self.id);
        let projected = self.project_series();
        let mut datasets = Group::with_id(&key);
        for (index, (series, segments)) in self.data.series.iter().zip(&projected).enumerate() {
            trace!(index, segments = segments.len(), "series projected");
            datasets = datasets.with_group(self.build_series_group(index, series, segments));
        }

        debug!(
            chart_id = %self.id,
            series = self.data.series.len(),
            append,
            refresh_grid,
            "datasets rebuilt"
        );

        if append {
            self.surface.upsert(&self.id, &key, datasets.clone())?;
        }
        Ok(datasets)
    }

    fn build_series_group(
        &self,
        index: usize,
        series: &Series,
        segments: &[SegmentGeometry],
    ) -> Group {
        let style = &self.config.series;
        let line_color = add_alpha(&series.color, style.alpha).to_string();
        let fill_color = style
            .fill
            .map(|fill| add_alpha(&series.color, fill.alpha).to_string());
        let point_style = style
            .point
            .map(|point| (point.radius, add_alpha(&series.color, point.alpha).to_string()));

        let mut lines = Group::new();
        for segment in segments {
            let line = segment.line;
            lines.push(Node::Line(LinePrimitive::new(
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line_color.clone(),
                style.width,
            )));

            if let (Some(quad), Some(fill)) = (segment.fill, &fill_color) {
                lines.push(Node::Polygon(PolygonPrimitive {
                    points: quad.iter().map(|v| (v.x, v.y)).collect(),
                    fill: fill.clone(),
                }));
            }

            if let Some((radius, color)) = &point_style {
                for marker in &segment.markers {
                    lines.push(Node::Circle(CirclePrimitive {
                        cx: marker.x,
                        cy: marker.y,
                        radius: *radius,
                        fill: color.clone(),
                        stroke: MARKER_STROKE.to_owned(),
                        stroke_width: MARKER_STROKE_WIDTH,
                    }));
                }
            }
        }

        Group::with_id(RenderTarget::Dataset(index).key(&self.id)).with_group(lines)
    }
}
