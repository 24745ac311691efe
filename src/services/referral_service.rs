//! Referral lifecycle service
//!
//! Orchestrates creation, claiming, and status updates of referrals against
//! the referral store and the user directory. Every lifecycle invariant is
//! enforced here: ownership at creation, claim exclusivity, and status
//! monotonicity (Completed and Abandoned are terminal).

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{ReferralError, Result};
use crate::storage::{Referral, ReferralStatus, ReferralStore};
use crate::users::UserDirectory;
use crate::utils::deep_link;

pub struct ReferralService {
    store: Arc<dyn ReferralStore>,
    users: Arc<dyn UserDirectory>,
    /// Serializes every read-validate-write sequence. Claims in particular
    /// must not interleave: the claimant-uniqueness scan has to observe all
    /// previously committed claims, store-wide.
    write_lock: Mutex<()>,
}

impl ReferralService {
    pub fn new(store: Arc<dyn ReferralStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            store,
            users,
            write_lock: Mutex::new(()),
        }
    }

    /// Create a new referral owned by `referring_user_id`.
    ///
    /// The referring user must exist; its referral code feeds the generated
    /// share link. The new referral starts `InProgress` and unclaimed.
    pub async fn create_referral(&self, referring_user_id: Uuid) -> Result<Referral> {
        if referring_user_id.is_nil() {
            return Err(ReferralError::validation("User ID cannot be empty."));
        }

        let user = self
            .users
            .get_user(referring_user_id)
            .await
            .ok_or_else(|| ReferralError::not_found("Specified user not found."))?;

        let share_link = deep_link::build_share_link(user.user_id, &user.referral_code)?;

        let referral = Referral::new(user.user_id, share_link);
        self.store.insert(referral.clone()).await?;

        info!(
            "Created referral {} for user {}",
            referral.referral_id, user.user_id
        );
        Ok(referral)
    }

    /// All referrals created by the given user, in store order.
    ///
    /// An empty result is a valid outcome here; whether it surfaces as an
    /// error is the transport layer's call.
    pub async fn list_referrals(&self, user_id: Uuid) -> Result<Vec<Referral>> {
        if user_id.is_nil() {
            return Err(ReferralError::validation("User ID cannot be empty."));
        }

        Ok(self.store.list_by_referring_user(user_id).await)
    }

    /// Move a referral to `new_status`.
    ///
    /// Terminal referrals reject every transition, including re-applying
    /// their current status. Completion additionally requires a claimant.
    pub async fn update_status(
        &self,
        referral_id: Uuid,
        new_status: ReferralStatus,
    ) -> Result<Referral> {
        if referral_id.is_nil() {
            return Err(ReferralError::validation("Referral ID cannot be empty."));
        }

        let _guard = self.write_lock.lock().await;

        let mut referral = self
            .store
            .get_by_id(referral_id)
            .await
            .ok_or_else(|| ReferralError::not_found("Referral not found."))?;

        if referral.status.is_terminal() {
            return Err(ReferralError::invalid_transition(
                "Cannot update referral status of Completed or Abandoned referrals.",
            ));
        }

        if new_status == ReferralStatus::Completed && !referral.is_claimed() {
            return Err(ReferralError::precondition_failed(
                "Referral must be claimed before it can be marked as completed.",
            ));
        }

        referral.status = new_status;
        referral.touch();
        self.store.update(referral.clone()).await?;

        info!(
            "Referral {} status updated to {}",
            referral.referral_id, referral.status
        );
        Ok(referral)
    }

    /// Claim a referral on behalf of `claimant_user_id`.
    ///
    /// A successful claim completes the referral directly; there is no
    /// separate "claimed" status. Each referral is claimed at most once, and
    /// a user may hold at most one non-Abandoned claim system-wide.
    pub async fn claim_referral(
        &self,
        referral_id: Uuid,
        claimant_user_id: Uuid,
    ) -> Result<Referral> {
        if referral_id.is_nil() || claimant_user_id.is_nil() {
            return Err(ReferralError::validation(
                "Referral ID and User ID cannot be empty.",
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut referral = self
            .store
            .get_by_id(referral_id)
            .await
            .ok_or_else(|| ReferralError::not_found("Referral not found."))?;

        if referral.is_claimed() {
            return Err(ReferralError::already_claimed(
                "Referral has already been claimed.",
            ));
        }

        // Independent guard: an unclaimed referral outside InProgress is
        // still not claimable.
        if referral.status != ReferralStatus::InProgress {
            return Err(ReferralError::not_claimable(
                "Referral is not in a claimable state.",
            ));
        }

        let claimant = self
            .users
            .get_user(claimant_user_id)
            .await
            .ok_or_else(|| ReferralError::not_found("Claimant user not found."))?;

        if claimant.user_id == referral.referring_user_id {
            return Err(ReferralError::self_claim(
                "A user cannot claim their own referral.",
            ));
        }

        let existing_claims = self
            .store
            .list_by_claimant(claimant.user_id, ReferralStatus::Abandoned)
            .await;
        if !existing_claims.is_empty() {
            warn!(
                "User {} attempted to claim referral {} while holding another claim",
                claimant.user_id, referral.referral_id
            );
            return Err(ReferralError::duplicate_claim(
                "Claimant has already claimed a referral.",
            ));
        }

        referral.status = ReferralStatus::Completed;
        referral.claimed_by_user_id = Some(claimant.user_id);
        referral.claimed_by_name = Some(claimant.short_display_name());
        referral.touch();
        self.store.update(referral.clone()).await?;

        info!(
            "Referral {} claimed by user {}",
            referral.referral_id, claimant.user_id
        );
        Ok(referral)
    }
}
