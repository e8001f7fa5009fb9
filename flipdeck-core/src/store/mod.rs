use crate::{CoreError, Deck, DeckSummary};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryStore;

/// Keyed account store with plaintext-equality checks. Whether secrets are
/// hashed at rest is the implementation's business, not the callers'.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn exists(&self, user: &str) -> Result<bool, CoreError>;
    async fn verify(&self, user: &str, password: &str) -> Result<bool, CoreError>;
    /// Errors with `CoreError::Conflict` when the user id is taken.
    async fn create(&self, user: &str, password: &str) -> Result<(), CoreError>;
}

/// Persisted decks, keyed by owner + deck name.
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Summaries of one owner's decks, oldest first.
    async fn list_decks(&self, owner: &str) -> Result<Vec<DeckSummary>, CoreError>;
    async fn load_deck(&self, owner: &str, name: &str) -> Result<Deck, CoreError>;
    /// Upsert: saving a name the owner already has replaces that deck.
    async fn save_deck(&self, owner: &str, deck: &Deck) -> Result<(), CoreError>;
    async fn delete_deck(&self, owner: &str, name: &str) -> Result<(), CoreError>;
}
