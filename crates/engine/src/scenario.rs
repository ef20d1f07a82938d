//! Side-by-side comparison of named funnel scenarios.

use crate::calculator::calculate;
use crate::model::{CampaignMetrics, RoasCategory};
use forecast_core::FunnelInputs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub inputs: FunnelInputs,
}

impl Scenario {
    pub fn new(name: impl Into<String>, inputs: FunnelInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub name: String,
    pub inputs: FunnelInputs,
    pub metrics: CampaignMetrics,
    pub category: RoasCategory,
    /// Profit minus the baseline (first scenario) profit.
    pub profit_delta: f64,
    /// ROAS minus the baseline ROAS.
    pub roas_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub rows: Vec<ScenarioRow>,
    pub best_by_profit: Option<usize>,
    pub best_by_roas: Option<usize>,
}

/// Run every scenario through the forward calculator. The first scenario is
/// the baseline for deltas.
pub fn compare_scenarios(scenarios: &[Scenario]) -> ScenarioComparison {
    let computed: Vec<(&Scenario, CampaignMetrics)> = scenarios
        .iter()
        .map(|s| {
            let i = s.inputs;
            (s, calculate(i.budget, i.cpm, i.ctr, i.cr, i.avg_check))
        })
        .collect();

    let baseline = computed.first().map(|(_, m)| *m).unwrap_or_default();

    let rows: Vec<ScenarioRow> = computed
        .into_iter()
        .map(|(s, m)| ScenarioRow {
            name: s.name.clone(),
            inputs: s.inputs,
            metrics: m,
            category: m.roas_category(),
            profit_delta: m.profit - baseline.profit,
            roas_delta: m.roas - baseline.roas,
        })
        .collect();

    ScenarioComparison {
        best_by_profit: best_index(&rows, |r| r.metrics.profit),
        best_by_roas: best_index(&rows, |r| r.metrics.roas),
        rows,
    }
}

/// Index of the largest key; the earliest row wins ties.
fn best_index(rows: &[ScenarioRow], key: impl Fn(&ScenarioRow) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, row) in rows.iter().enumerate() {
        let value = key(row);
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
