use tracing::{debug, trace};

use crate::core::{GridLayout, GridTick, PlotBounds, add_alpha, layout_x_ticks, layout_y_ticks};
use crate::error::ChartResult;
use crate::render::{
    DrawingSurface, Group, LinePrimitive, Node, RenderTarget, TextAnchor, TextPrimitive,
};

use super::SvgChart;

/// Vertical distance between the plot bottom and x-axis labels.
const X_LABEL_OFFSET_PX: f64 = 20.0;
/// Horizontal distance between the plot left edge and y-axis labels.
const Y_LABEL_OFFSET_PX: f64 = 10.0;

impl<S: DrawingSurface> SvgChart<S> {
    /// Computes gridline positions and labels for the current config/data.
    pub fn grid_layout(&self) -> ChartResult<GridLayout> {
        let mapper = self.mapper();
        let x = layout_x_ticks(&self.data.grid.x, self.config.grid.gaps.x, &mapper)?;
        let y = layout_y_ticks(&self.data.grid.y, self.config.grid.gaps.y, &mapper)?;
        Ok(GridLayout { x, y })
    }

    /// Rebuilds the grid group: x gridlines, y gridlines, then the axis frame.
    ///
    /// With `append` the group replaces `{id}_grid` under the mounted root.
    pub fn update_grid(&mut self, append: bool) -> ChartResult<Group> {
        let layout = self.grid_layout()?;
        let key = RenderTarget::Grid.key(&self.id);
        let grid = self.build_grid_group(&key, &layout);

        debug!(
            chart_id = %self.id,
            x_ticks = layout.x.len(),
            y_ticks = layout.y.len(),
            append,
            "grid rebuilt"
        );

        if append {
            self.surface.upsert(&self.id, &key, grid.clone())?;
            trace!(key = %key, "grid group replaced");
        }
        Ok(grid)
    }

    fn build_grid_group(&self, key: &str, layout: &GridLayout) -> Group {
        let bounds = self.plot_bounds();
        let lines = &self.config.grid.lines;
        let grid_color = add_alpha(&lines.main.color, 1.0).to_string();
        let grid_width = lines.main.width;

        let label = |tick: &GridTick, x: f64, y: f64, anchor: TextAnchor| {
            TextPrimitive::new(
                tick.label.clone(),
                x,
                y,
                lines.font.size,
                lines.font.color.clone(),
                anchor,
            )
        };

        let mut x_group = Group::new();
        for tick in &layout.x {
            x_group.push(Node::Group(
                Group::new()
                    .with_line(LinePrimitive::new(
                        tick.pixel,
                        bounds.bottom,
                        tick.pixel,
                        bounds.top,
                        grid_color.clone(),
                        grid_width,
                    ))
                    .with_text(label(
                        tick,
                        tick.pixel,
                        bounds.bottom + X_LABEL_OFFSET_PX,
                        TextAnchor::Middle,
                    )),
            ));
        }

        let mut y_group = Group::new();
        for tick in &layout.y {
            y_group.push(Node::Group(
                Group::new()
                    .with_line(LinePrimitive::new(
                        bounds.left,
                        tick.pixel,
                        bounds.right,
                        tick.pixel,
                        grid_color.clone(),
                        grid_width,
                    ))
                    .with_text(label(
                        tick,
                        bounds.left - Y_LABEL_OFFSET_PX,
                        tick.pixel,
                        TextAnchor::End,
                    )),
            ));
        }

        Group::with_id(key)
            .with_group(x_group)
            .with_group(y_group)
            .with_group(self.build_axis_frame(bounds))
    }

    fn build_axis_frame(&self, bounds: PlotBounds) -> Group {
        let axes = &self.config.grid.lines.axes;
        let color = add_alpha(&axes.color, 1.0).to_string();
        Group::new()
            .with_line(LinePrimitive::new(
                bounds.left,
                bounds.bottom,
                bounds.right,
                bounds.bottom,
                color.clone(),
                axes.width,
            ))
            .with_line(LinePrimitive::new(
                bounds.left,
                bounds.bottom,
                bounds.left,
                bounds.top,
                color,
                axes.width,
            ))
    }
}
