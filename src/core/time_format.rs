use serde::{Deserialize, Serialize};

/// Duration layouts available for time x-axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `{ms}ms`
    #[serde(rename = "ms")]
    Millis,
    /// `{sec}.{msec:03}s`
    #[serde(rename = "s.ms")]
    SecondsMillis,
    /// `{min}:{sec:02}`
    #[serde(rename = "m:s")]
    MinutesSeconds,
    /// `{hour}:{min:02}:{sec:02}`
    #[serde(rename = "h:m:s")]
    HoursMinutesSeconds,
    /// `{day}-{hour:02}:{min:02}`
    #[serde(rename = "d-h:m")]
    DaysHoursMinutes,
}

/// Elapsed-duration parts; hours, minutes and seconds wrap at their period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ElapsedParts {
    total_seconds: i64,
    millis: i64,
    seconds: i64,
    minutes: i64,
    hours: i64,
    days: i64,
}

impl ElapsedParts {
    fn from_millis(ms: i64) -> Self {
        let total_seconds = ms.div_euclid(1_000);
        Self {
            total_seconds,
            millis: ms.rem_euclid(1_000),
            seconds: total_seconds.rem_euclid(60),
            minutes: total_seconds.div_euclid(60).rem_euclid(60),
            hours: total_seconds.div_euclid(3_600).rem_euclid(24),
            days: total_seconds.div_euclid(86_400),
        }
    }
}

/// Formats an elapsed millisecond count. No calendar is involved.
#[must_use]
pub fn format_elapsed(ms: i64, format: TimeFormat) -> String {
    let parts = ElapsedParts::from_millis(ms);
    match format {
        TimeFormat::Millis => format!("{ms}ms"),
        TimeFormat::SecondsMillis => format!("{}.{:03}s", parts.total_seconds, parts.millis),
        TimeFormat::MinutesSeconds => format!("{}:{:02}", parts.minutes, parts.seconds),
        TimeFormat::HoursMinutesSeconds => format!(
            "{}:{:02}:{:02}",
            parts.hours, parts.minutes, parts.seconds
        ),
        TimeFormat::DaysHoursMinutes => {
            format!("{}-{:02}:{:02}", parts.days, parts.hours, parts.minutes)
        }
    }
}
