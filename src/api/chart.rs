use tracing::debug;

use crate::core::{ChartConfig, ChartData, CoordinateMapper, PlotBounds};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, SvgRoot};

use super::validation::{validate_config, validate_data};

/// Live chart handle bound to a drawing surface.
///
/// `SvgChart` owns the configuration and data snapshot it renders and knows
/// the id its root is mounted under. `init`, `update_grid` and `update_data`
/// can be called in any order after `init` and replace their previous output
/// instead of adding to it.
///
/// The surface is generic so the same chart logic drives an [`SvgDocument`]
/// or a headless [`NullSurface`]; pass `&mut surface` to share one document
/// between several charts.
///
/// [`SvgDocument`]: crate::render::SvgDocument
/// [`NullSurface`]: crate::render::NullSurface
pub struct SvgChart<S: DrawingSurface> {
    pub(super) surface: S,
    pub(super) id: String,
    pub(super) config: ChartConfig,
    pub(super) data: ChartData,
}

impl<S: DrawingSurface> SvgChart<S> {
    pub fn new(
        surface: S,
        id: impl Into<String>,
        config: ChartConfig,
        data: ChartData,
    ) -> ChartResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "chart id must not be empty".to_owned(),
            ));
        }
        validate_config(&config)?;
        validate_data(&data, &config)?;

        debug!(chart_id = %id, series = data.series.len(), "chart created");
        Ok(Self {
            surface,
            id,
            config,
            data,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Swaps the configuration used by subsequent render calls.
    ///
    /// The current data is re-checked against the new configuration; on error
    /// the previous configuration stays in place.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        validate_config(&config)?;
        validate_data(&self.data, &config)?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn plot_bounds(&self) -> PlotBounds {
        PlotBounds::from_config(&self.config)
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(
            self.plot_bounds(),
            self.data.grid.x.ticks().bounds(),
            self.data.grid.y.ticks(),
        )
    }

    /// Builds the root node sized to the image, with the optional background.
    ///
    /// When `mount` is true the root is mounted on the surface, replacing a
    /// previously mounted root with the same id together with its groups.
    pub fn init(&mut self, mount: bool) -> ChartResult<SvgRoot> {
        let dimensions = &self.config.dimensions;
        let mut root = SvgRoot::new(&self.id, dimensions.width.image, dimensions.height.image);
        if let Some(background) = &self.config.background {
            root = root.with_background(background);
        }

        if mount {
            self.surface.mount_root(root.clone())?;
            debug!(chart_id = %self.id, "chart root mounted");
        }
        Ok(root)
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
