//! Campaign store backed by DashMap, optionally persisted to a JSON file.
//!
//! A file-backed store rewrites the whole file after every mutation
//! (temp file + rename), so a crash never leaves a half-written store.

use crate::models::*;
use chrono::Utc;
use dashmap::DashMap;
use forecast_core::{ForecastError, ForecastResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Thread-safe store for saved campaigns.
pub struct CampaignStore {
    campaigns: DashMap<Uuid, CampaignRecord>,
    path: Option<PathBuf>,
}

impl CampaignStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            campaigns: DashMap::new(),
            path: None,
        }
    }

    /// Open (or start) a file-backed store. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> ForecastResult<Self> {
        let path = path.as_ref().to_path_buf();
        let campaigns = DashMap::new();

        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&raw).map_err(|e| {
                ForecastError::Storage(format!("corrupt store file {}: {e}", path.display()))
            })?;
            if file.version != STORE_FILE_VERSION {
                return Err(ForecastError::Storage(format!(
                    "unsupported store file version {} in {}",
                    file.version,
                    path.display()
                )));
            }
            for record in file.campaigns {
                campaigns.insert(record.id, record);
            }
        }

        info!(path = %path.display(), campaigns = campaigns.len(), "Campaign store opened");
        Ok(Self {
            campaigns,
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    // ─── Queries ───────────────────────────────────────────────────────────

    /// All records, most recently updated first.
    pub fn list(&self) -> Vec<CampaignRecord> {
        let mut campaigns: Vec<CampaignRecord> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        campaigns
    }

    pub fn get(&self, id: Uuid) -> Option<CampaignRecord> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    /// Resolve a record from the leading characters of its id.
    pub fn find_by_prefix(&self, prefix: &str) -> ForecastResult<CampaignRecord> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return Err(ForecastError::Validation("empty campaign id".into()));
        }

        let mut matches: Vec<CampaignRecord> = self
            .campaigns
            .iter()
            .filter(|r| r.key().to_string().starts_with(&prefix))
            .map(|r| r.value().clone())
            .collect();

        match matches.len() {
            0 => Err(ForecastError::NotFound(format!("campaign {prefix}"))),
            1 => Ok(matches.remove(0)),
            n => Err(ForecastError::Validation(format!(
                "campaign id prefix {prefix} is ambiguous ({n} matches)"
            ))),
        }
    }

    // ─── Mutations ─────────────────────────────────────────────────────────

    pub fn create(&self, req: NewCampaign) -> ForecastResult<CampaignRecord> {
        let name = validate_name(&req.name)?;
        let now = Utc::now();
        let record = CampaignRecord {
            id: Uuid::new_v4(),
            name,
            currency: req.currency.unwrap_or_else(default_currency),
            platform: req.platform,
            notes: req.notes,
            inputs: req.inputs,
            created_at: now,
            updated_at: now,
        };

        self.campaigns.insert(record.id, record.clone());
        if let Err(e) = self.persist() {
            self.campaigns.remove(&record.id);
            warn!(id = %record.id, error = %e, "Create rolled back");
            return Err(e);
        }
        metrics::counter!("store.campaigns.created").increment(1);
        info!(id = %record.id, name = %record.name, "Campaign saved");
        Ok(record)
    }

    pub fn update(&self, id: Uuid, req: CampaignUpdate) -> ForecastResult<CampaignRecord> {
        if let Some(name) = &req.name {
            validate_name(name)?;
        }

        // Guard must be released before persisting, which iterates the map.
        let (previous, updated) = {
            let mut entry = self
                .campaigns
                .get_mut(&id)
                .ok_or_else(|| ForecastError::NotFound(format!("campaign {id}")))?;
            let record = entry.value_mut();
            let previous = record.clone();
            req.apply(record);
            record.name = record.name.trim().to_string();
            record.updated_at = Utc::now();
            (previous, record.clone())
        };

        if let Err(e) = self.persist() {
            self.campaigns.insert(id, previous);
            warn!(id = %id, error = %e, "Update rolled back");
            return Err(e);
        }
        metrics::counter!("store.campaigns.updated").increment(1);
        debug!(id = %id, "Campaign updated");
        Ok(updated)
    }

    /// Returns `true` if a record was removed.
    pub fn delete(&self, id: Uuid) -> ForecastResult<bool> {
        let Some((_, removed)) = self.campaigns.remove(&id) else {
            return Ok(false);
        };
        if let Err(e) = self.persist() {
            self.campaigns.insert(id, removed);
            warn!(id = %id, error = %e, "Delete rolled back");
            return Err(e);
        }
        metrics::counter!("store.campaigns.deleted").increment(1);
        info!(id = %id, "Campaign deleted");
        Ok(true)
    }

    // -- internal helpers ---------------------------------------------------

    fn persist(&self) -> ForecastResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut campaigns = self.list();
        campaigns.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let file = StoreFile {
            version: STORE_FILE_VERSION,
            campaigns,
        };
        let json = serde_json::to_string_pretty(&file)?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        debug!(path = %path.display(), records = file.campaigns.len(), "Campaign store flushed");
        Ok(())
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn validate_name(name: &str) -> ForecastResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ForecastError::Validation(
            "campaign name must not be blank".into(),
        ));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
