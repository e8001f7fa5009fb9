use crate::{CoreError, Deck, DeckSummary};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-local store, mainly for tests and embedders that do their own
/// persistence.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, String>>,
    decks: RwLock<HashMap<String, Vec<Deck>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl crate::store::CredentialStore for MemoryStore {
    async fn exists(&self, user: &str) -> Result<bool, CoreError> {
        Ok(self.users.read().contains_key(user))
    }

    async fn verify(&self, user: &str, password: &str) -> Result<bool, CoreError> {
        Ok(self
            .users
            .read()
            .get(user)
            .map(|stored| stored == password)
            .unwrap_or(false))
    }

    async fn create(&self, user: &str, password: &str) -> Result<(), CoreError> {
        let mut m = self.users.write();
        if m.contains_key(user) {
            return Err(CoreError::Conflict("user id already exists"));
        }
        m.insert(user.to_string(), password.to_string());
        Ok(())
    }
}

#[async_trait]
impl crate::store::DeckStore for MemoryStore {
    async fn list_decks(&self, owner: &str) -> Result<Vec<DeckSummary>, CoreError> {
        let decks = self.decks.read();
        let mut v: Vec<DeckSummary> = decks
            .get(owner)
            .map(|ds| ds.iter().map(DeckSummary::of).collect())
            .unwrap_or_default();
        v.sort_by_key(|d| d.created_at);
        Ok(v)
    }

    async fn load_deck(&self, owner: &str, name: &str) -> Result<Deck, CoreError> {
        self.decks
            .read()
            .get(owner)
            .and_then(|ds| ds.iter().find(|d| d.name == name))
            .cloned()
            .ok_or(CoreError::NotFound("deck"))
    }

    async fn save_deck(&self, owner: &str, deck: &Deck) -> Result<(), CoreError> {
        let mut m = self.decks.write();
        let ds = m.entry(owner.to_string()).or_default();
        ds.retain(|d| d.name != deck.name);
        ds.push(deck.clone());
        Ok(())
    }

    async fn delete_deck(&self, owner: &str, name: &str) -> Result<(), CoreError> {
        let mut m = self.decks.write();
        let Some(ds) = m.get_mut(owner) else {
            return Err(CoreError::NotFound("deck"));
        };
        let before = ds.len();
        ds.retain(|d| d.name != name);
        if ds.len() == before {
            return Err(CoreError::NotFound("deck"));
        }
        Ok(())
    }
}
