//! A single forward-only pass through a deck of cards.

use crate::{Card, CoreError};

/// What the caller should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View<'a> {
    Card {
        /// 1-based position of the current card.
        position: usize,
        total: usize,
        front: &'a str,
        back: &'a str,
        /// `false` means the front is showing.
        face_up: bool,
    },
    Finished,
}

/// Outcome of [`ReviewSession::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward (possibly onto the finished position).
    Next,
    /// Already finished; the caller should leave the review screen.
    Exit,
}

/// Tracks position and card-face orientation for one review pass.
///
/// The session owns its cards; handing a `Vec<Card>` in here is the
/// transfer of ownership that keeps the deck immutable for the session's
/// lifetime. `index` ranges over `0..=cards.len()`, where `cards.len()` is
/// the terminal "all cards done" position.
pub struct ReviewSession {
    cards: Vec<Card>,
    index: usize,
    face_up: bool,
}

impl ReviewSession {
    /// Start a session at the first card, front showing.
    ///
    /// Errors with [`CoreError::EmptyDeck`] when there is nothing to
    /// review; callers check before entering the review screen.
    pub fn new(cards: Vec<Card>) -> Result<Self, CoreError> {
        if cards.is_empty() {
            return Err(CoreError::EmptyDeck);
        }
        Ok(Self {
            cards,
            index: 0,
            face_up: false,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.index == self.cards.len()
    }

    /// Pure query; never mutates.
    pub fn current_view(&self) -> View<'_> {
        match self.cards.get(self.index) {
            Some(card) => View::Card {
                position: self.index + 1,
                total: self.cards.len(),
                front: &card.front,
                back: &card.back,
                face_up: self.face_up,
            },
            None => View::Finished,
        }
    }

    /// Toggle which face is showing. No-op once finished.
    pub fn flip(&mut self) {
        if !self.is_finished() {
            self.face_up = !self.face_up;
        }
    }

    /// Move to the next card, front showing again.
    ///
    /// At the finished position nothing changes and [`Advance::Exit`] is
    /// returned; that is the caller's cue to go back to the deck list.
    pub fn advance(&mut self) -> Advance {
        if self.is_finished() {
            return Advance::Exit;
        }
        self.index += 1;
        self.face_up = false;
        Advance::Next
    }
}
