//! Break-even and sensitivity sweeps over the forward calculator.

use crate::calculator::{calculate, is_usable};
use crate::model::SamplePoint;

/// Number of equal budget steps in a break-even sweep (21 points).
pub const BREAK_EVEN_STEPS: usize = 20;

/// Profit at 21 evenly spaced budgets from 0 to `max_budget` inclusive.
pub fn break_even_points(
    cpm: f64,
    ctr: f64,
    cr: f64,
    avg_check: f64,
    max_budget: f64,
) -> Vec<SamplePoint> {
    if !is_usable(max_budget) {
        return Vec::new();
    }

    let step = max_budget / BREAK_EVEN_STEPS as f64;
    (0..=BREAK_EVEN_STEPS)
        .map(|i| {
            let budget = step * i as f64;
            SamplePoint {
                x: budget,
                y: calculate(budget, cpm, ctr, cr, avg_check).profit,
            }
        })
        .collect()
}

/// CTR range swept by [`sensitivity_ctr`], in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRange {
    pub min: f64,
    pub max: f64,
    pub steps: usize,
}

impl Default for SensitivityRange {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 5.0,
            steps: 10,
        }
    }
}

impl SensitivityRange {
    fn is_valid(&self) -> bool {
        self.steps > 0 && self.min.is_finite() && self.max.is_finite() && self.max >= self.min
    }
}

/// ROAS at `range.steps + 1` evenly spaced CTR values.
///
/// `_base_ctr` is part of the call shape but does not move the range.
pub fn sensitivity_ctr(
    budget: f64,
    cpm: f64,
    _base_ctr: f64,
    cr: f64,
    avg_check: f64,
    range: SensitivityRange,
) -> Vec<SamplePoint> {
    if !range.is_valid() {
        return Vec::new();
    }

    let step = (range.max - range.min) / range.steps as f64;
    (0..=range.steps)
        .map(|i| {
            let ctr = range.min + step * i as f64;
            SamplePoint {
                x: ctr,
                y: calculate(budget, cpm, ctr, cr, avg_check).roas,
            }
        })
        .collect()
}
