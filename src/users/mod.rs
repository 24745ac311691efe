//! User directory
//!
//! Read-only lookup of user records by id. The engine never mutates users;
//! the directory is an external collaborator behind the `UserDirectory`
//! trait, seeded here with a static fixture set.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, uuid};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Unique code the user shares with others, embedded in share links
    pub referral_code: String,
}

impl User {
    /// Short display form of the full name, e.g. "Josie P."
    pub fn short_display_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}.", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user id to its record.
    async fn get_user(&self, user_id: Uuid) -> Option<User>;
}

/// In-memory directory backed by a fixed user set.
pub struct StaticUserDirectory {
    users: HashMap<Uuid, User>,
}

impl StaticUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.user_id, u)).collect(),
        }
    }

    /// Directory preloaded with the built-in demo users.
    pub fn with_seed_users() -> Self {
        Self::new(seed_users())
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn get_user(&self, user_id: Uuid) -> Option<User> {
        self.users.get(&user_id).cloned()
    }
}

/// The built-in demo users.
pub fn seed_users() -> Vec<User> {
    let fixture = |id: Uuid, first: &str, last: &str, email: &str, code: &str| User {
        user_id: id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        referral_code: code.to_string(),
    };

    vec![
        fixture(
            uuid!("29fd60d2-cf8b-4f93-ab8b-d9e5d768fc1a"),
            "Alice",
            "Bag",
            "alice.bag@annagram.io",
            "AL1C3B",
        ),
        fixture(
            uuid!("b1c2d3e4-f5a6-7b8c-9d0e-f1a2b3c4d5e6"),
            "Kathleen",
            "Hannah",
            "kathleen.hannah@annagram.io",
            "KT5Y8B",
        ),
        fixture(
            uuid!("c1d2e3f4-a5b6-7c8d-9e0f-1a2b3c4d5e6f"),
            "Debbie",
            "Harry",
            "debbie.harry@annagram.io",
            "DE3H4R",
        ),
        fixture(
            uuid!("a80afede-b590-4c5a-a449-10d6c65d091c"),
            "Joan",
            "Jett",
            "joan.jett@annagram.io",
            "JO4J3T",
        ),
        fixture(
            uuid!("fd9e60df-7b1c-41fa-8e96-ee561a7ee870"),
            "Poly",
            "Styrene",
            "poly.styrene@annagram.io",
            "PO9S7R",
        ),
    ]
}
