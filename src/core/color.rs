use std::fmt;

use serde::{Deserialize, Serialize};

/// Translucent color produced from a hex color and an alpha value.
///
/// Channels that could not be parsed from the hex input are `NaN` and render
/// as `NaN`, matching the lenient contract of [`add_alpha`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub fn is_well_formed(self) -> bool {
        [self.red, self.green, self.blue]
            .into_iter()
            .all(|channel| channel.is_finite())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Converts `#rgb` / `#rrggbb` (leading `#` optional) plus `alpha` into an
/// `rgba(r, g, b, a)` color.
///
/// No validation is performed. Each channel is a whole two-digit pair: a pair
/// that is not entirely hex (`"1g"`) or is missing becomes `NaN`, even when
/// it starts with a valid hex digit. Prefix-tolerant parsers would read
/// `"1g"` as `1`; this one does not.
#[must_use]
pub fn add_alpha(hex: &str, alpha: f64) -> Rgba {
    let stripped = hex.replacen('#', "", 1);
    let digits: Vec<char> = if stripped.chars().count() == 3 {
        stripped.chars().flat_map(|c| [c, c]).collect()
    } else {
        stripped.chars().collect()
    };

    Rgba::new(
        parse_channel(&digits, 0),
        parse_channel(&digits, 2),
        parse_channel(&digits, 4),
        alpha,
    )
}

fn parse_channel(digits: &[char], start: usize) -> f64 {
    let pair: String = digits.iter().skip(start).take(2).collect();
    if pair.is_empty() {
        return f64::NAN;
    }
    u8::from_str_radix(&pair, 16).map_or(f64::NAN, f64::from)
}
