//! In-memory referral store
//!
//! Default backend. Records live in a `Vec` so listing preserves insertion
//! order; lookups are linear scans, which is fine at this scale.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Referral, ReferralStatus, ReferralStore};
use crate::errors::{ReferralError, Result};

pub struct MemoryStore {
    referrals: RwLock<Vec<Referral>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            referrals: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferralStore for MemoryStore {
    async fn insert(&self, referral: Referral) -> Result<()> {
        let mut referrals = self.referrals.write().await;
        if referrals
            .iter()
            .any(|r| r.referral_id == referral.referral_id)
        {
            return Err(ReferralError::storage_operation(format!(
                "Referral already exists: {}",
                referral.referral_id
            )));
        }
        referrals.push(referral);
        Ok(())
    }

    async fn get_by_id(&self, referral_id: Uuid) -> Option<Referral> {
        let referrals = self.referrals.read().await;
        referrals
            .iter()
            .find(|r| r.referral_id == referral_id)
            .cloned()
    }

    async fn list_by_referring_user(&self, user_id: Uuid) -> Vec<Referral> {
        let referrals = self.referrals.read().await;
        referrals
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
        let referrals = self.referrals.read().await;
        referrals
            .iter()
            .filter(|r| r.claimed_by_user_id == Some(claimant_id) && r.status != excluding)
            .cloned()
            .collect()
    }

    async fn update(&self, referral: Referral) -> Result<()> {
        let mut referrals = self.referrals.write().await;
        match referrals
            .iter_mut()
            .find(|r| r.referral_id == referral.referral_id)
        {
            Some(slot) => {
                *slot = referral;
                Ok(())
            }
            None => Err(ReferralError::not_found(format!(
                "Referral not found: {}",
                referral.referral_id
            ))),
        }
    }

    async fn get_backend_name(&self) -> String {
        "memory".to_string()
    }
}
