use crate::error::{ForecastError, ForecastResult};
use serde::Deserialize;

/// Root application configuration. Loaded from an optional
/// `funnel-forecast.toml` in the working directory and from environment
/// variables with the prefix `FUNNEL_FORECAST__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding saved campaigns.
    #[serde(default = "default_store_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Break-even sweeps run to `budget * factor` unless a maximum is given.
    #[serde(default = "default_break_even_budget_factor")]
    pub break_even_budget_factor: f64,
    #[serde(default = "default_sensitivity_min")]
    pub sensitivity_min: f64,
    #[serde(default = "default_sensitivity_max")]
    pub sensitivity_max: f64,
    #[serde(default = "default_sensitivity_steps")]
    pub sensitivity_steps: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Display label only, amounts are never converted.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

// Default functions
fn default_store_path() -> String {
    "campaigns.json".to_string()
}
fn default_break_even_budget_factor() -> f64 {
    3.0
}
fn default_sensitivity_min() -> f64 {
    0.5
}
fn default_sensitivity_max() -> f64 {
    5.0
}
fn default_sensitivity_steps() -> usize {
    10
}
fn default_title() -> String {
    "Campaign Forecast".to_string()
}
fn default_currency() -> String {
    "USD".to_string()
}
fn default_lines_per_page() -> usize {
    40
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            break_even_budget_factor: default_break_even_budget_factor(),
            sensitivity_min: default_sensitivity_min(),
            sensitivity_max: default_sensitivity_max(),
            sensitivity_steps: default_sensitivity_steps(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency: default_currency(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `funnel-forecast.toml` (if present) and the
    /// environment. Environment values win over the file.
    pub fn load() -> ForecastResult<Self> {
        Self::load_from("funnel-forecast")
    }

    /// Same as [`AppConfig::load`] with an explicit file stem or path.
    pub fn load_from(file: &str) -> ForecastResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("FUNNEL_FORECAST")
                    .separator("__")
                    .try_parsing(true),
            );

        builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ForecastError::Config(e.to_string()))
    }
}
