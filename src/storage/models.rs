use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uuid::Uuid;

/// Lifecycle status of a referral.
///
/// `InProgress` is the initial state. `Completed` and `Abandoned` are
/// terminal; once reached, no further transitions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum ReferralStatus {
    InProgress,
    Completed,
    Abandoned,
}

impl ReferralStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Abandoned)
    }

    /// Stable numeric value exposed by the status listing endpoint.
    pub fn value(&self) -> i32 {
        match self {
            Self::InProgress => 0,
            Self::Completed => 1,
            Self::Abandoned => 2,
        }
    }
}

impl std::fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "InProgress"),
            Self::Completed => write!(f, "Completed"),
            Self::Abandoned => write!(f, "Abandoned"),
        }
    }
}

impl std::str::FromStr for ReferralStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            _ => Err(format!(
                "Unknown referral status: '{}'. Valid: InProgress, Completed, Abandoned",
                s
            )),
        }
    }
}

/// A single referral record.
///
/// `referring_user_id` and `share_link` are fixed at creation;
/// `claimed_by_user_id` is set at most once, by a successful claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referral {
    pub referral_id: Uuid,
    pub referring_user_id: Uuid,
    #[serde(default)]
    pub claimed_by_user_id: Option<Uuid>,
    /// Claimant's short display name, captured when the referral is claimed
    #[serde(default)]
    pub claimed_by_name: Option<String>,
    pub share_link: String,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Referral {
    /// New unclaimed referral in the initial status.
    pub fn new(referring_user_id: Uuid, share_link: String) -> Self {
        let now = Utc::now();
        Self {
            referral_id: Uuid::new_v4(),
            referring_user_id,
            claimed_by_user_id: None,
            claimed_by_name: None,
            share_link,
            status: ReferralStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed_by_user_id.is_some()
    }

    /// Refresh the update timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
