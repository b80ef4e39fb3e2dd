//! Terminal rendering of a generated password
//!
//! Everything shown here is derived from a `GeneratedPassword` value; there is
//! no separate presentation state.

use console::{style, StyledObject};

use crate::password::{StrengthLevel, StrengthResult};
use crate::types::GeneratedPassword;

/// Number of points in the strength meter
pub const METER_POINTS: u8 = 4;

const LENGTH_BAR_WIDTH: usize = 20;

/// Fill percentage of a range control at `value`.
///
/// A degenerate range (`max <= min`) is reported as full.
pub fn fill_percent(value: usize, min: usize, max: usize) -> f64 {
    if max <= min {
        return 100.0;
    }
    let clamped = value.clamp(min, max);
    (clamped - min) as f64 / (max - min) as f64 * 100.0
}

/// Text bar for the character length, e.g. `██████░░░░`
pub fn render_length_bar(value: usize, min: usize, max: usize, width: usize) -> String {
    let filled = (fill_percent(value, min, max) / 100.0 * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

/// Which meter points are lit for `result`.
///
/// Lighting is cumulative: points `1..=score` are on, not just point `score`.
pub fn meter_points(result: &StrengthResult) -> [bool; METER_POINTS as usize] {
    let mut points = [false; METER_POINTS as usize];
    for (i, point) in points.iter_mut().enumerate() {
        *point = (i as u8) < result.score;
    }
    points
}

fn colorize<D>(level: StrengthLevel, value: D) -> StyledObject<D> {
    match level {
        StrengthLevel::TooWeak => style(value).red(),
        StrengthLevel::Weak => style(value).color256(208),
        StrengthLevel::Medium => style(value).yellow(),
        StrengthLevel::Strong => style(value).green(),
    }
}

/// Strength label followed by the four-point meter
pub fn render_meter(result: &StrengthResult) -> String {
    let points: String = meter_points(result)
        .iter()
        .map(|lit| if *lit { "▮" } else { "▯" })
        .collect();

    format!(
        "{} {}",
        colorize(result.level, result.text).bold(),
        colorize(result.level, points)
    )
}

/// Full report for one generated password
pub fn render_report(generated: &GeneratedPassword, min: usize, max: usize) -> String {
    let length = generated.options.length;
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("🔐 {}\n", style(&generated.password).bold().cyan()));
    out.push_str("═══════════════════════════════════\n");
    out.push_str(&format!(
        "Character Length  {:>3}  {}\n",
        length,
        render_length_bar(length, min, max, LENGTH_BAR_WIDTH)
    ));

    for class in generated.options.classes() {
        out.push_str(&format!("  ✅ {}\n", class));
    }

    out.push_str(&format!("Strength          {}\n", render_meter(&generated.strength)));
    out
}
