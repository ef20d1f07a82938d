//! Saved campaign record types.

use chrono::{DateTime, Utc};
use forecast_core::FunnelInputs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named set of funnel assumptions plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: Uuid,
    pub name: String,
    /// Display label only.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub inputs: FunnelInputs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub inputs: FunnelInputs,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignUpdate {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub platform: Option<String>,
    pub notes: Option<String>,
    pub budget: Option<f64>,
    pub cpm: Option<f64>,
    pub ctr: Option<f64>,
    pub cr: Option<f64>,
    pub avg_check: Option<f64>,
}

impl CampaignUpdate {
    pub(crate) fn apply(self, record: &mut CampaignRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(currency) = self.currency {
            record.currency = currency;
        }
        if let Some(platform) = self.platform {
            record.platform = Some(platform);
        }
        if let Some(notes) = self.notes {
            record.notes = Some(notes);
        }
        if let Some(v) = self.budget {
            record.inputs.budget = v;
        }
        if let Some(v) = self.cpm {
            record.inputs.cpm = v;
        }
        if let Some(v) = self.ctr {
            record.inputs.ctr = v;
        }
        if let Some(v) = self.cr {
            record.inputs.cr = v;
        }
        if let Some(v) = self.avg_check {
            record.inputs.avg_check = v;
        }
    }
}

pub(crate) fn default_currency() -> String {
    "USD".to_string()
}

/// On-disk layout of the store file.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoreFile {
    pub version: u32,
    pub campaigns: Vec<CampaignRecord>,
}

pub(crate) const STORE_FILE_VERSION: u32 = 1;
