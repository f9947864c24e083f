use tracing::{debug, warn};

use crate::core::{ChartConfig, ChartData, GapPolicy, TickRange, YAxis};
use crate::error::{ChartError, ChartResult};

/// Relative tolerance when comparing a supplied `range` with `max - min`.
const RANGE_MISMATCH_TOLERANCE: f64 = 1e-9;

pub(super) fn validate_config(config: &ChartConfig) -> ChartResult<()> {
    let dimensions = &config.dimensions;
    for (width, height) in [
        (dimensions.width.image, dimensions.height.image),
        (dimensions.width.plot, dimensions.height.plot),
    ] {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidDimensions { width, height });
        }
    }

    let margins = dimensions.margins;
    for (name, value) in [
        ("left", margins.left),
        ("right", margins.right),
        ("top", margins.top),
        ("bottom", margins.bottom),
    ] {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "margin `{name}` must be finite"
            )));
        }
    }

    validate_gap_policy(config.grid.gaps.x, 'x')?;
    if let Some(policy) = config.grid.gaps.y {
        validate_gap_policy(policy, 'y')?;
    }

    let lines = &config.grid.lines;
    for (name, width) in [
        ("axes", lines.axes.width),
        ("main", lines.main.width),
        ("series", config.series.width),
    ] {
        if !width.is_finite() || width < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} line width must be finite and >= 0"
            )));
        }
    }
    if !lines.font.size.is_finite() || lines.font.size <= 0.0 {
        return Err(ChartError::InvalidData(
            "label font size must be finite and > 0".to_owned(),
        ));
    }

    validate_alpha("series", config.series.alpha)?;
    if let Some(point) = config.series.point {
        validate_alpha("point", point.alpha)?;
        if !point.radius.is_finite() || point.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and >= 0".to_owned(),
            ));
        }
    }
    if let Some(fill) = config.series.fill {
        validate_alpha("fill", fill.alpha)?;
    }

    Ok(())
}

/// Checks the data against the axis contracts.
///
/// Shape mismatches between series and the x tick set stay lenient: they are
/// logged and later truncated to the shorter of the two.
pub(super) fn validate_data(data: &ChartData, config: &ChartConfig) -> ChartResult<()> {
    let x_ticks = data.grid.x.ticks();
    validate_tick_range(x_ticks.bounds(), 'x')?;
    if x_ticks.raw.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "x raw tick values must be finite".to_owned(),
        ));
    }

    match &data.grid.y {
        YAxis::Linear { ticks: None, .. } => {
            if let Some(series) = data.series.iter().find(|s| s.has_drawable_pair()) {
                return Err(ChartError::AxisContract(format!(
                    "linear y-axis has no tick range but series `{}` has values to draw",
                    series.label
                )));
            }
        }
        YAxis::Linear {
            ticks: Some(ticks), ..
        } => {
            validate_tick_range(*ticks, 'y')?;
            if config.grid.gaps.y.is_none() {
                return Err(ChartError::AxisContract(
                    "linear y-axis with a tick range requires `grid.gaps.y`".to_owned(),
                ));
            }
        }
        YAxis::Log { ticks, .. } => {
            validate_tick_range(*ticks, 'y')?;
            if ticks.min <= 0.0 {
                return Err(ChartError::AxisContract(format!(
                    "log y-axis requires min > 0, got {}",
                    ticks.min
                )));
            }
        }
    }

    let log_axis = data.grid.y.base().is_some();
    for series in &data.series {
        for value in series.data.iter().flatten() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains a non-finite value",
                    series.label
                )));
            }
            if log_axis && *value <= 0.0 {
                return Err(ChartError::AxisContract(format!(
                    "series `{}` has value {value} on a log y-axis",
                    series.label
                )));
            }
        }

        let expected = x_ticks.raw.len();
        let actual = series.data.len();
        if actual > expected {
            warn!(
                series = %series.label,
                expected,
                actual,
                "series longer than x ticks; trailing values are ignored"
            );
        } else if actual < expected {
            debug!(
                series = %series.label,
                expected,
                actual,
                "series shorter than x ticks"
            );
        }
    }

    Ok(())
}

fn validate_tick_range(ticks: TickRange, axis: char) -> ChartResult<()> {
    if !ticks.min.is_finite() || !ticks.max.is_finite() || !ticks.range.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis tick range must be finite"
        )));
    }
    if ticks.min >= ticks.max {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis tick range requires min < max, got min={} max={}",
            ticks.min, ticks.max
        )));
    }
    if ticks.range <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis tick range must be > 0, got {}",
            ticks.range
        )));
    }

    let span = ticks.max - ticks.min;
    if (ticks.range - span).abs() > RANGE_MISMATCH_TOLERANCE * span.abs().max(1.0) {
        warn!(
            axis = %axis,
            range = ticks.range,
            span,
            "tick range disagrees with max - min; using supplied range"
        );
    }
    Ok(())
}

fn validate_gap_policy(policy: GapPolicy, axis: char) -> ChartResult<()> {
    let value = policy.raw();
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis gap value must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_alpha(name: &str, alpha: f64) -> ChartResult<()> {
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(ChartError::InvalidData(format!(
            "{name} alpha must be finite and in [0, 1]"
        )));
    }
    Ok(())
}
