//! JSON file referral store
//!
//! Keeps the full record set in an in-memory cache and rewrites the backing
//! JSON file on every mutation. Reads never touch the filesystem.

use std::fs;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use super::{Referral, ReferralStatus, ReferralStore};
use crate::errors::{ReferralError, Result};

#[derive(Debug)]
pub struct FileStore {
    file_path: String,
    cache: RwLock<Vec<Referral>>,
}

impl FileStore {
    pub fn new(file_path: &str) -> Result<Self> {
        let referrals = Self::load_from_file(file_path)?;
        info!(
            "FileStore initialized with {} referrals from {}",
            referrals.len(),
            file_path
        );
        Ok(Self {
            file_path: file_path.to_string(),
            cache: RwLock::new(referrals),
        })
    }

    fn load_from_file(path: &str) -> Result<Vec<Referral>> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                ReferralError::serialization(format!("Failed to parse referrals file: {}", e))
            }),
            Err(_) => {
                // File missing; start with an empty record set
                fs::write(path, "[]").map_err(|e| {
                    ReferralError::file_operation(format!(
                        "Failed to create referrals file {}: {}",
                        path, e
                    ))
                })?;
                info!("Created empty referrals file: {}", path);
                Ok(Vec::new())
            }
        }
    }

    fn save_to_file(&self, referrals: &[Referral]) -> Result<()> {
        let json = serde_json::to_string_pretty(referrals)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }
}

#[async_trait]
impl ReferralStore for FileStore {
    async fn insert(&self, referral: Referral) -> Result<()> {
        let mut cache = self.cache.write().await;
        if cache.iter().any(|r| r.referral_id == referral.referral_id) {
            return Err(ReferralError::storage_operation(format!(
                "Referral already exists: {}",
                referral.referral_id
            )));
        }
        cache.push(referral);
        self.save_to_file(&cache)
    }

    async fn get_by_id(&self, referral_id: Uuid) -> Option<Referral> {
        let cache = self.cache.read().await;
        cache.iter().find(|r| r.referral_id == referral_id).cloned()
    }

    async fn list_by_referring_user(&self, user_id: Uuid) -> Vec<Referral> {
        let cache = self.cache.read().await;
        cache
            .iter()
            .filter(|r| r.referring_user_id == user_id)
            .cloned()
            .collect()
    }

    async fn list_by_claimant(
        &self,
        claimant_id: Uuid,
        excluding: ReferralStatus,
    ) -> Vec<Referral> {
        let cache = self.cache.read().await;
        cache
            .iter()
            .filter(|r| r.claimed_by_user_id == Some(claimant_id) && r.status != excluding)
            .cloned()
            .collect()
    }

    async fn update(&self, referral: Referral) -> Result<()> {
        let mut cache = self.cache.write().await;
        match cache
            .iter_mut()
            .find(|r| r.referral_id == referral.referral_id)
        {
            Some(slot) => {
                *slot = referral;
                self.save_to_file(&cache)
            }
            None => Err(ReferralError::not_found(format!(
                "Referral not found: {}",
                referral.referral_id
            ))),
        }
    }

    async fn get_backend_name(&self) -> String {
        "file".to_string()
    }
}
