//! Forecast report assembly.

use chrono::{DateTime, Utc};
use forecast_core::FunnelInputs;
use forecast_engine::{
    break_even_points, calculate, funnel_stages, insights, CampaignMetrics, FunnelStage,
    MarketingInsight, RoasCategory, SamplePoint,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything a report shows for one set of inputs, computed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub id: Uuid,
    pub title: String,
    pub currency: String,
    pub generated_at: DateTime<Utc>,
    pub inputs: FunnelInputs,
    pub metrics: CampaignMetrics,
    pub roas_category: RoasCategory,
    pub stages: Vec<FunnelStage>,
    pub insights: Vec<MarketingInsight>,
    /// `(budget, profit)` samples from 0 to the sweep maximum.
    pub break_even: Vec<SamplePoint>,
}

impl ForecastReport {
    pub fn build(
        title: impl Into<String>,
        currency: impl Into<String>,
        inputs: FunnelInputs,
        break_even_max_budget: f64,
    ) -> Self {
        let FunnelInputs {
            budget,
            cpm,
            ctr,
            cr,
            avg_check,
        } = inputs;

        let metrics = calculate(budget, cpm, ctr, cr, avg_check);
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            currency: currency.into(),
            generated_at: Utc::now(),
            inputs,
            metrics,
            roas_category: metrics.roas_category(),
            stages: funnel_stages(budget, cpm, ctr, cr, avg_check),
            insights: insights(&metrics, ctr, cr, avg_check),
            break_even: break_even_points(cpm, ctr, cr, avg_check, break_even_max_budget),
        }
    }
}
