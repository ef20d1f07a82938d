//! Reverse solver: target profit → required budget.
//!
//! The funnel is linear in budget, so `profit = budget * (k - 1)` where `k`
//! is the revenue produced per unit of spend.

use crate::calculator::is_usable;
use crate::model::ReverseResult;

/// Solve for the budget that yields `desired_profit` with the given rates.
pub fn reverse_calculate(
    desired_profit: f64,
    cpm: f64,
    ctr: f64,
    cr: f64,
    avg_check: f64,
) -> ReverseResult {
    if ![desired_profit, cpm, ctr, cr, avg_check]
        .into_iter()
        .all(is_usable)
    {
        return ReverseResult::not_achievable();
    }

    let ctr_rate = ctr / 100.0;
    let cr_rate = cr / 100.0;
    let k = ctr_rate * cr_rate * (1000.0 / cpm) * avg_check;
    // Subnormal or huge rates can overflow k even when every input is valid.
    if !k.is_finite() {
        return ReverseResult::not_achievable();
    }
    let effective_roi = (k - 1.0) * 100.0;

    if k <= 1.0 {
        return ReverseResult {
            effective_roas: k,
            effective_roi,
            reason: format!(
                "Not achievable: each unit of spend returns {k:.2} in revenue (ROAS {k:.2}x). \
                 Increase CR or Average Check, or decrease CPM."
            ),
            ..ReverseResult::not_achievable()
        };
    }

    let required_budget = desired_profit / (k - 1.0);
    if !is_usable(required_budget) {
        return ReverseResult::not_achievable();
    }
    let required_impressions = required_budget / cpm * 1000.0;
    let required_clicks = required_impressions * ctr_rate;
    let required_leads = required_clicks * cr_rate;

    ReverseResult {
        required_budget,
        required_impressions,
        required_clicks,
        required_leads,
        total_revenue: required_leads * avg_check,
        effective_roas: k,
        effective_roi,
        is_achievable: true,
        reason: format!("Achievable with an effective ROAS of {k:.2}x."),
    }
}
