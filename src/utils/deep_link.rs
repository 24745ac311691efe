//! Share link generation
//!
//! Pure string building for shareable referral deep links. The link embeds
//! the user's referral code as a query parameter and a random path id, e.g.
//! `https://refl.ink/lo32ing90ab?referralCode=AL1C3B`.

use uuid::Uuid;

use super::generate_link_id;
use crate::errors::{ReferralError, Result};

/// Referral codes must be 6 to 12 characters long.
pub const MIN_REFERRAL_CODE_LEN: usize = 6;
pub const MAX_REFERRAL_CODE_LEN: usize = 12;

const LINK_ID_LENGTH: usize = 11;

/// Build a shareable deep link for the given user and referral code.
///
/// The base URL comes from configuration; everything else is derived from
/// the inputs plus a random link id. No state is stored.
pub fn build_share_link(user_id: Uuid, referral_code: &str) -> Result<String> {
    if user_id.is_nil() {
        return Err(ReferralError::validation("User ID cannot be empty."));
    }
    if referral_code.is_empty() {
        return Err(ReferralError::validation("Referral code cannot be empty."));
    }
    if referral_code.len() < MIN_REFERRAL_CODE_LEN || referral_code.len() > MAX_REFERRAL_CODE_LEN {
        return Err(ReferralError::validation(format!(
            "Referral code must be between {} and {} characters long.",
            MIN_REFERRAL_CODE_LEN, MAX_REFERRAL_CODE_LEN
        )));
    }

    let base = crate::config::get_config().share.link_base.clone();
    Ok(format!(
        "{}/{}?referralCode={}",
        base.trim_end_matches('/'),
        generate_link_id(LINK_ID_LENGTH),
        referral_code
    ))
}
