//! Funnel stage builder: impressions → clicks → leads → sales.
//!
//! Drop-off is measured against the previous stage, percentage against the
//! top of the funnel.

use crate::calculator::{is_usable, ratio_or};
use crate::model::FunnelStage;

pub const STAGE_NAMES: [&str; 4] = ["Impressions", "Clicks", "Leads", "Sales"];

/// Build the four funnel rows, or nothing when `budget` or `cpm` is unusable.
pub fn funnel_stages(budget: f64, cpm: f64, ctr: f64, cr: f64, avg_check: f64) -> Vec<FunnelStage> {
    if !is_usable(budget) || !is_usable(cpm) {
        return Vec::new();
    }

    let impressions = budget / cpm * 1000.0;
    let clicks = impressions * (ctr / 100.0);
    let leads = clicks * (cr / 100.0);
    // One sale per lead.
    let sales = leads;

    let share_of_top = |count: f64| ratio_or(count, impressions, 0.0) * 100.0;
    let lost_from = |prev: f64, count: f64| ratio_or(prev - count, prev, 0.0) * 100.0;

    vec![
        FunnelStage {
            name: STAGE_NAMES[0].to_string(),
            count: impressions,
            cost: budget,
            drop_off: 0.0,
            percentage: 100.0,
        },
        FunnelStage {
            name: STAGE_NAMES[1].to_string(),
            count: clicks,
            cost: if clicks > 0.0 {
                budget / clicks * clicks
            } else {
                0.0
            },
            drop_off: lost_from(impressions, clicks),
            percentage: share_of_top(clicks),
        },
        FunnelStage {
            name: STAGE_NAMES[2].to_string(),
            count: leads,
            cost: if leads > 0.0 {
                budget / leads * leads
            } else {
                0.0
            },
            drop_off: lost_from(clicks, leads),
            percentage: share_of_top(leads),
        },
        FunnelStage {
            name: STAGE_NAMES[3].to_string(),
            count: sales,
            cost: sales * avg_check,
            drop_off: 0.0,
            percentage: share_of_top(sales),
        },
    ]
}
