//! Value types produced by the engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Forward metrics
// ---------------------------------------------------------------------------

/// Full forecast for one set of funnel inputs.
///
/// Every field is non-negative except `profit` and `roi`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub impressions: f64,
    pub clicks: f64,
    /// Cost per click.
    pub cpc: f64,
    pub leads: f64,
    /// Cost per lead.
    pub cpl: f64,
    pub revenue: f64,
    pub profit: f64,
    /// `revenue / budget`.
    pub roas: f64,
    /// `(revenue - budget) / budget * 100`.
    pub roi: f64,
    /// Customer acquisition cost, same value as `cpl`.
    pub cac: f64,
    /// Highest CPC at which the funnel still breaks even.
    pub max_cpc: f64,
    /// 0 when the funnel is profitable per unit of spend, otherwise the whole
    /// budget.
    pub break_even_budget: f64,
    pub cost_per_impression: f64,
    /// Revenue per click.
    pub click_through_value: f64,
    /// Revenue per lead.
    pub conversion_value: f64,
    /// Spend not recovered by revenue, never negative.
    pub wasted_spend: f64,
}

impl CampaignMetrics {
    /// The canonical all-zero bundle returned for incomplete inputs.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }

    pub fn is_viable(&self) -> bool {
        self.roas >= 1.0
    }

    pub fn roas_category(&self) -> RoasCategory {
        roas_category(self.roas)
    }
}

/// Coarse classification of a ROAS value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoasCategory {
    Excellent,
    Good,
    BreakEven,
    Losing,
}

impl RoasCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::BreakEven => "Break-even",
            Self::Losing => "Losing",
        }
    }
}

/// Thresholds are checked from the top down, so a value sitting exactly on a
/// boundary lands in the higher category.
pub fn roas_category(roas: f64) -> RoasCategory {
    if roas >= 4.0 {
        RoasCategory::Excellent
    } else if roas >= 2.0 {
        RoasCategory::Good
    } else if roas >= 1.0 {
        RoasCategory::BreakEven
    } else {
        RoasCategory::Losing
    }
}

// ---------------------------------------------------------------------------
// Reverse solver
// ---------------------------------------------------------------------------

pub(crate) const NOT_ACHIEVABLE_REASON: &str =
    "Not achievable with current parameters. Increase CR or Average Check, or decrease CPM.";

/// Budget and volumes needed to reach a target profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseResult {
    pub required_budget: f64,
    pub required_impressions: f64,
    pub required_clicks: f64,
    pub required_leads: f64,
    pub total_revenue: f64,
    pub effective_roas: f64,
    pub effective_roi: f64,
    pub is_achievable: bool,
    /// Human-readable explanation, always populated.
    pub reason: String,
}

impl ReverseResult {
    pub fn not_achievable() -> Self {
        Self {
            required_budget: 0.0,
            required_impressions: 0.0,
            required_clicks: 0.0,
            required_leads: 0.0,
            total_revenue: 0.0,
            effective_roas: 0.0,
            effective_roi: 0.0,
            is_achievable: false,
            reason: NOT_ACHIEVABLE_REASON.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Funnel stages
// ---------------------------------------------------------------------------

/// One row of the impressions → clicks → leads → sales funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub name: String,
    pub count: f64,
    pub cost: f64,
    /// Percent lost relative to the previous stage.
    pub drop_off: f64,
    /// Share of the impressions stage, percent.
    pub percentage: f64,
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// One `(input, metric)` sample of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    Critical,
    Warning,
    Info,
    Positive,
}

impl InsightSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Positive => "POSITIVE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingInsight {
    pub severity: InsightSeverity,
    pub message: String,
}

impl MarketingInsight {
    pub(crate) fn new(severity: InsightSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}
