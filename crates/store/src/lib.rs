//! Saved campaign records: an in-memory map optionally mirrored to a JSON
//! file on every change.

pub mod models;
pub mod store;

pub use models::{CampaignRecord, CampaignUpdate, NewCampaign};
pub use store::CampaignStore;
