//! Formatting utilities used for CLI and export outputs.

use crate::core::calculator::gauge::BudgetGauge;
use crate::utils::colors::{GREY, RED, RESET, color_for_gauge};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// es: "96h" / "1h"
pub fn hours2readable(hours: i32) -> String {
    format!("{}h", hours)
}

/// Width of the rendered gauge bar, in cells. 100% fills the whole bar;
/// the overflow tail can add at most half a bar on top (the 1.5x cap).
const GAUGE_WIDTH: usize = 20;

/// Render a budget gauge as a bar plus a textual percentage, e.g.
/// `[██████████----------] 50%` or `[████████████████████]>>>> 100% +20%`.
/// A group without a budget renders as a distinct "no budget" marker.
pub fn gauge_bar(gauge: BudgetGauge) -> String {
    match gauge {
        BudgetGauge::NoBudget => format!("{GREY}(no budget set){RESET}"),
        BudgetGauge::Level {
            percent,
            overflow_percent,
        } => {
            let filled = (percent.max(0) as usize * GAUGE_WIDTH) / 100;
            let empty = GAUGE_WIDTH - filled;
            let over = (overflow_percent.max(0) as usize * GAUGE_WIDTH) / 100;

            let color = color_for_gauge(percent, overflow_percent);

            let mut bar = String::new();
            bar.push('[');
            bar.push_str(color);
            bar.push_str(&"█".repeat(filled));
            bar.push_str(RESET);
            bar.push_str(GREY);
            bar.push_str(&"-".repeat(empty));
            bar.push_str(RESET);
            bar.push(']');

            if over > 0 {
                bar.push_str(RED);
                bar.push_str(&">".repeat(over));
                bar.push_str(RESET);
            }

            if overflow_percent > 0 {
                format!("{} {}% +{}%", bar, percent, overflow_percent)
            } else {
                format!("{} {}%", bar, percent)
            }
        }
    }
}
