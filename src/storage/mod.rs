//! Referral storage
//!
//! Storage backends and the `ReferralStore` access contract. Backends are
//! substitutable behind the trait; tests use the in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::{Uuid, uuid};

use crate::errors::Result;

pub mod file;
pub mod memory;
pub mod models;

pub use models::{Referral, ReferralStatus};

#[async_trait]
pub trait ReferralStore: Send + Sync {
    /// Insert a new referral record. The referral id must be unused.
    async fn insert(&self, referral: Referral) -> Result<()>;

    /// Point lookup by referral id.
    async fn get_by_id(&self, referral_id: Uuid) -> Option<Referral>;

    /// All referrals created by the given user, in insertion order.
    async fn list_by_referring_user(&self, user_id: Uuid) -> Vec<Referral>;

    /// All referrals claimed by the given user, except those whose status
    /// matches `excluding`.
    async fn list_by_claimant(
        &self,
        claimant_id: Uuid,
        excluding: ReferralStatus,
    ) -> Vec<Referral>;

    /// Replace the stored record carrying the same referral id.
    async fn update(&self, referral: Referral) -> Result<()>;

    async fn get_backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<dyn ReferralStore>> {
        let config = crate::config::get_config();

        let boxed: Box<dyn ReferralStore> = match config.storage.backend.as_str() {
            "file" => Box::new(file::FileStore::new(&config.storage.referrals_file)?),
            _ => Box::new(memory::MemoryStore::new()),
        };

        Ok(Arc::from(boxed))
    }
}

/// Demo referral fixtures matching the seeded demo users.
///
/// Three referrals by Alice (one open, one claimed by Kathleen, one
/// abandoned) and two by Kathleen (one claimed by Debbie, one open).
pub fn demo_referrals() -> Vec<Referral> {
    let alice = uuid!("29fd60d2-cf8b-4f93-ab8b-d9e5d768fc1a");
    let kathleen = uuid!("b1c2d3e4-f5a6-7b8c-9d0e-f1a2b3c4d5e6");
    let debbie = uuid!("c1d2e3f4-a5b6-7c8d-9e0f-1a2b3c4d5e6f");
    let now = Utc::now();

    let fixture = |id: Uuid,
                   owner: Uuid,
                   link: &str,
                   status: ReferralStatus,
                   claimant: Option<(Uuid, &str)>| {
        Referral {
            referral_id: id,
            referring_user_id: owner,
            claimed_by_user_id: claimant.map(|(id, _)| id),
            claimed_by_name: claimant.map(|(_, name)| name.to_string()),
            share_link: link.to_string(),
            status,
            created_at: now,
            updated_at: now,
        }
    };

    vec![
        fixture(
            uuid!("714c572a-4ff7-4801-8684-2672ade84c1b"),
            alice,
            "https://refl.ink/lo32ing90ab?referralCode=AL1C3B",
            ReferralStatus::InProgress,
            None,
        ),
        fixture(
            uuid!("13d2920e-f5c4-4ee6-a97a-1ff50d55eda8"),
            alice,
            "https://refl.ink/pqj82jabb9q?referralCode=AL1C3B",
            ReferralStatus::Completed,
            Some((kathleen, "Kathleen H.")),
        ),
        fixture(
            uuid!("5c3f2acc-cabb-422d-89fa-d7d616ed382c"),
            alice,
            "https://refl.ink/lo32dq4abbe?referralCode=AL1C3B",
            ReferralStatus::Abandoned,
            None,
        ),
        fixture(
            uuid!("32e765a3-7cb7-4872-a1fe-1cebbe313300"),
            kathleen,
            "https://refl.ink/ddb4int09u9?referralCode=KT5Y8B",
            ReferralStatus::Completed,
            Some((debbie, "Debbie H.")),
        ),
        fixture(
            uuid!("37889b4f-6b59-46ef-87ac-4b5b9862414d"),
            kathleen,
            "https://refl.ink/jqbdbnt76i9?referralCode=KT5Y8B",
            ReferralStatus::InProgress,
            None,
        ),
    ]
}

/// Insert the demo referrals, skipping ids already present.
///
/// Returns the number of rows inserted.
pub async fn seed_demo_referrals(store: &dyn ReferralStore) -> Result<usize> {
    let mut inserted = 0;
    for referral in demo_referrals() {
        if store.get_by_id(referral.referral_id).await.is_none() {
            store.insert(referral).await?;
            inserted += 1;
        }
    }
    Ok(inserted)
}
