//! In-memory card collection.

use rand::seq::IndexedRandom;
use sheet_cards_core::CardRecord;

/// Cards from the most recent successful fetch, in sheet order.
#[derive(Debug, Default)]
pub struct CardCollection {
    cards: Vec<CardRecord>,
}

impl CardCollection {
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First card with the given ID.
    pub fn find(&self, id: &str) -> Option<&CardRecord> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Uniformly random card, or `None` when empty.
    pub fn random(&self) -> Option<&CardRecord> {
        self.cards.choose(&mut rand::rng())
    }
}
