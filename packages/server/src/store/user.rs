use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use thiserror::Error;
use uuid::Uuid;

/// A user identity record. Credential material lives with the external auth
/// collaborator; only identity and scoring state are kept here. Score and
/// solved-count are mutated exclusively by the ledger.
#[derive(Clone, Debug)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub score: u64,
    pub problems_solved: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
}

#[derive(Default)]
pub struct UserStore {
    items: DashMap<Uuid, User>,
    by_username: DashMap<String, Uuid>,
}

impl UserStore {
    /// Register a user with a fresh id and zeroed score.
    pub fn create(&self, username: &str) -> Result<User, UserStoreError> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            score: 0,
            problems_solved: 0,
            created_at: Utc::now(),
        };
        self.insert(user)
    }

    /// Insert a fully-formed record (seeding and tests). Enforces username
    /// uniqueness via the index entry, claimed before the record lands.
    pub fn insert(&self, user: User) -> Result<User, UserStoreError> {
        match self.by_username.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(UserStoreError::UsernameTaken(user.username)),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.items.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.items.get(&id).map(|u| u.clone())
    }

    pub fn get_by_username(&self, username: &str) -> Option<User> {
        let id = *self.by_username.get(username)?;
        self.get(id)
    }

    /// Exclusive handle to one user record. Holding it serializes concurrent
    /// updates to the same user; different users proceed in parallel.
    pub(crate) fn get_mut(&self, id: Uuid) -> Option<RefMut<'_, Uuid, User>> {
        self.items.get_mut(&id)
    }

    /// Snapshot of all users.
    pub fn all(&self) -> Vec<User> {
        self.items.iter().map(|u| u.clone()).collect()
    }
}
