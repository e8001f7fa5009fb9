use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One two-sided study card. Both faces are non-empty trimmed text once a
/// card has come out of the parser or a store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A named, ordered set of cards belonging to one owner. Card order is
/// insertion order and never changes after the deck is built.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Listing row for a stored deck; carries the card count so listings do not
/// clone card bodies.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckSummary {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub card_count: usize,
}

impl DeckSummary {
    pub fn of(deck: &Deck) -> Self {
        Self {
            name: deck.name.clone(),
            created_at: deck.created_at,
            card_count: deck.cards.len(),
        }
    }
}
