//! Gridline layout for both axes.
//!
//! Everything here is pure: ticks are computed in domain units, mapped to
//! pixels through a [`CoordinateMapper`] and labeled. Turning them into
//! drawable nodes is the grid controller's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::GapPolicy;
use crate::core::data::{TickRange, XAxis, YAxis};
use crate::core::scale::{CoordinateMapper, LogBase};
use crate::core::time_format::format_elapsed;
use crate::error::{ChartError, ChartResult};

/// Upper bound on gridlines generated for a single axis.
pub const MAX_TICKS_PER_AXIS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickKind {
    /// Stepped tick: linear gap or successive power of the log base.
    Major,
    /// `2x..9x` subdivision of a base-10 decade below a major tick.
    SubTick,
    /// Subdivision of the decade that contains the axis maximum.
    Underflow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTick {
    pub value: f64,
    pub pixel: f64,
    pub label: String,
    pub kind: TickKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub x: Vec<GridTick>,
    pub y: Vec<GridTick>,
}

/// Lays out vertical gridlines for the x-axis.
pub fn layout_x_ticks(
    axis: &XAxis,
    policy: GapPolicy,
    mapper: &CoordinateMapper,
) -> ChartResult<Vec<GridTick>> {
    let bounds = axis.ticks().bounds();
    let gap = policy.domain_gap(bounds.range, mapper.bounds().width());
    let time_format = axis.time_format();

    let ticks = accumulate_steps(bounds, gap, 'x')?
        .into_iter()
        .map(|value| GridTick {
            value,
            pixel: mapper.px_x(value),
            label: match time_format {
                Some(format) => format_elapsed(value.floor() as i64, format),
                None => format_fixed(value),
            },
            kind: TickKind::Major,
        })
        .collect();
    Ok(ticks)
}

/// Lays out horizontal gridlines for the y-axis.
///
/// A linear axis without a tick range has no gridlines.
pub fn layout_y_ticks(
    axis: &YAxis,
    policy: Option<GapPolicy>,
    mapper: &CoordinateMapper,
) -> ChartResult<Vec<GridTick>> {
    match axis {
        YAxis::Linear { ticks: None, .. } => Ok(Vec::new()),
        YAxis::Linear {
            ticks: Some(bounds),
            ..
        } => {
            let policy = policy.ok_or_else(|| {
                ChartError::AxisContract(
                    "linear y-axis with a tick range requires a y gap policy".to_owned(),
                )
            })?;
            let gap = policy.domain_gap(bounds.range, mapper.bounds().height());
            let ticks = accumulate_steps(*bounds, gap, 'y')?
                .into_iter()
                .map(|value| GridTick {
                    value,
                    pixel: mapper.px_y(value, None),
                    label: format_fixed(value),
                    kind: TickKind::Major,
                })
                .collect();
            Ok(ticks)
        }
        YAxis::Log { ticks, base, .. } => layout_log_ticks(*ticks, *base, mapper),
    }
}

fn layout_log_ticks(
    bounds: TickRange,
    base: LogBase,
    mapper: &CoordinateMapper,
) -> ChartResult<Vec<GridTick>> {
    let plot = mapper.bounds();
    let log_tick = |value: f64, kind: TickKind| GridTick {
        value,
        pixel: mapper.px_y(value, Some(base)),
        label: format_truncated(value),
        kind,
    };

    let mut ticks = Vec::new();
    let mut major = bounds.min;
    while major <= bounds.max {
        ensure_tick_budget(ticks.len(), 'y')?;
        ticks.push(log_tick(major, TickKind::Major));

        if base == LogBase::Ten && major != bounds.min {
            for value in decade_sub_ticks(major) {
                if mapper.px_y(value, Some(base)) > plot.bottom {
                    continue;
                }
                ticks.push(log_tick(value, TickKind::SubTick));
            }
        }
        major *= base.value();
    }

    if base == LogBase::Ten {
        let mut ceiling = bounds.min;
        let mut steps = 0;
        while ceiling < bounds.max {
            ensure_tick_budget(steps, 'y')?;
            ceiling *= 10.0;
            steps += 1;
        }
        for value in decade_sub_ticks(ceiling) {
            let pixel = mapper.px_y(value, Some(base));
            if pixel > plot.bottom || pixel < plot.top {
                continue;
            }
            ticks.push(log_tick(value, TickKind::Underflow));
        }
    }

    Ok(ticks)
}

/// `2, 3, .., 9` tenths of `upper`, stepped by accumulation.
fn decade_sub_ticks(upper: f64) -> SmallVec<[f64; 10]> {
    let gap = upper / 10.0;
    let mut values = SmallVec::new();
    let mut value = gap * 2.0;
    while value < upper {
        values.push(value);
        value += gap;
    }
    values
}

/// Steps from `min` to `max` inclusive by repeated addition of `gap`.
fn accumulate_steps(bounds: TickRange, gap: f64, axis: char) -> ChartResult<Vec<f64>> {
    if !gap.is_finite() || gap <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{axis}-axis gridline gap must be finite and > 0, got {gap}"
        )));
    }

    let mut values = Vec::new();
    let mut value = bounds.min;
    while value <= bounds.max {
        ensure_tick_budget(values.len(), axis)?;
        values.push(value);
        value += gap;
    }
    Ok(values)
}

fn ensure_tick_budget(count: usize, axis: char) -> ChartResult<()> {
    if count >= MAX_TICKS_PER_AXIS {
        return Err(ChartError::TooManyTicks {
            axis,
            limit: MAX_TICKS_PER_AXIS,
        });
    }
    Ok(())
}

/// Two-decimal label with exact midpoints rounded away from zero.
///
/// `{:.2}` breaks exact ties to even (`0.125` -> `0.12`); labels want `0.13`.
/// A double sits exactly halfway between two cents only when it is an odd
/// multiple of `1/8`, so only those values take the rounding path.
fn format_fixed(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_owned();
    }
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        let cents = (value * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }
    format!("{value:.2}")
}

fn format_truncated(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        // Avoid "-0" for values in (-1, 0).
        return "0".to_owned();
    }
    format!("{truncated}")
}
