//! Marketing calculation engine: forward funnel forecast, reverse budget
//! solving, funnel stages, break-even and sensitivity sweeps, advisory
//! insights, and scenario comparison.
//!
//! Every function is pure and total: degenerate inputs resolve to zero or
//! "not achievable" values instead of errors.

pub mod calculator;
pub mod insights;
pub mod model;
pub mod reverse;
pub mod sampler;
pub mod scenario;
pub mod stages;

pub use calculator::calculate;
pub use insights::insights;
pub use model::{
    roas_category, CampaignMetrics, FunnelStage, InsightSeverity, MarketingInsight,
    ReverseResult, RoasCategory, SamplePoint,
};
pub use reverse::reverse_calculate;
pub use sampler::{break_even_points, sensitivity_ctr, SensitivityRange};
pub use scenario::{compare_scenarios, Scenario, ScenarioComparison, ScenarioRow};
pub use stages::funnel_stages;

pub use forecast_core::FunnelInputs;
