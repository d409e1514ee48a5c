/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Gauge bar color: green while inside budget, yellow near the top,
/// red once the budget is exceeded.
pub fn color_for_gauge(percent: i32, overflow_percent: i32) -> &'static str {
    if overflow_percent > 0 {
        RED
    } else if percent >= 90 {
        YELLOW
    } else {
        GREEN
    }
}

/// Returns GREY for an empty/unassigned field, RESET otherwise.
pub fn color_for_optional_field(value: &str) -> &'static str {
    if value.trim().is_empty() || value.trim() == "--" {
        GREY
    } else {
        RESET
    }
}
