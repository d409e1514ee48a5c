//! Budget gauge: consumed vs allocated hours for a phase group.

/// Rendered overflow is capped so the bar never exceeds 1.5x its length.
/// Display policy only: real consumption can go far beyond 150%.
pub const OVERFLOW_CAP: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetGauge {
    /// No budget allocated. A distinct display state, not 0%.
    NoBudget,
    /// Filled percentage (clamped to 100) plus the over-budget tail.
    Level { percent: i32, overflow_percent: i32 },
}

pub fn gauge(consumed: i32, allocated: i32) -> BudgetGauge {
    if allocated <= 0 {
        return BudgetGauge::NoBudget;
    }

    let ratio = f64::from(consumed) * 100.0 / f64::from(allocated);
    let percent = (ratio.round() as i32).min(100);

    let overflow_percent = if consumed > allocated {
        let over = f64::from(consumed - allocated) * 100.0 / f64::from(allocated);
        (over.round() as i32).min(OVERFLOW_CAP)
    } else {
        0
    };

    BudgetGauge::Level {
        percent,
        overflow_percent,
    }
}
