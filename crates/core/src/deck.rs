//! Deck module - the fixed 14-card recycling deck
//!
//! The deck is dealt once per round: the multiset is shuffled uniformly and
//! ids are assigned in shuffled order, so `cards[i].id == i` for the whole round.

use crate::rng::SimpleRng;
use crate::types::{CardId, CardKind, CONTAMINANT_COPIES, DECK_SIZE, RECYCLABLE_COPIES};

/// A single card on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            revealed: false,
            matched: false,
        }
    }

    /// Whether the card face is visible (revealed or matched).
    pub fn face_up(&self) -> bool {
        self.revealed || self.matched
    }
}

/// Ordered set of cards for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

/// The unshuffled composition: 4 of each recyclable kind, 2 contaminants.
fn composition() -> [CardKind; DECK_SIZE] {
    let mut kinds = [CardKind::Contaminant; DECK_SIZE];
    let mut i = 0;
    for kind in CardKind::RECYCLABLE {
        for _ in 0..RECYCLABLE_COPIES {
            kinds[i] = kind;
            i += 1;
        }
    }
    debug_assert_eq!(i + CONTAMINANT_COPIES, DECK_SIZE);
    kinds
}

impl Deck {
    /// Deal a freshly shuffled deck.
    pub fn deal(rng: &mut SimpleRng) -> Self {
        let mut kinds = composition();
        rng.shuffle(&mut kinds);
        Self::from_kinds(kinds)
    }

    /// Build a deck in the given order (ids follow the order).
    pub fn from_kinds(kinds: [CardKind; DECK_SIZE]) -> Self {
        let mut id: CardId = 0;
        let cards = kinds.map(|kind| {
            let card = Card::new(id, kind);
            id += 1;
            card
        });
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards of `kind` in the deck.
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|c| c.kind == kind).count()
    }

    /// Number of matched cards.
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// First card id of the given kind that is still face-down, if any.
    pub fn find_hidden(&self, kind: CardKind) -> Option<CardId> {
        self.cards
            .iter()
            .find(|c| c.kind == kind && !c.face_up())
            .map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_holds_for_many_seeds() {
        for seed in 0..500u32 {
            let deck = Deck::deal(&mut SimpleRng::new(seed));
            assert_eq!(deck.len(), DECK_SIZE);
            for kind in CardKind::RECYCLABLE {
                assert_eq!(deck.count(kind), RECYCLABLE_COPIES, "seed {}", seed);
            }
            assert_eq!(deck.count(CardKind::Contaminant), CONTAMINANT_COPIES);
        }
    }

    #[test]
    fn test_ids_follow_shuffled_order() {
        let deck = Deck::deal(&mut SimpleRng::new(42));
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id as usize, i);
            assert!(!card.revealed);
            assert!(!card.matched);
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        let a = Deck::deal(&mut SimpleRng::new(7));
        let b = Deck::deal(&mut SimpleRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_out_of_range() {
        let deck = Deck::deal(&mut SimpleRng::new(1));
        assert!(deck.get(DECK_SIZE as CardId).is_none());
        assert!(deck.get(0).is_some());
    }

    #[test]
    fn test_find_hidden_skips_face_up_cards() {
        let mut deck = Deck::from_kinds(composition());
        let first = deck.find_hidden(CardKind::Plastic).unwrap();
        deck.get_mut(first).unwrap().revealed = true;
        let second = deck.find_hidden(CardKind::Plastic).unwrap();
        assert_ne!(first, second);
    }
}
