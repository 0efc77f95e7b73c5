use crate::deck::Card;
use crate::types::{CardId, CardKind, DECK_SIZE, ROUND_SECS};

/// Plain copy of a round, detached from the live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [Card; DECK_SIZE],
    pub selection: [Option<CardId>; 2],
    pub score: i32,
    pub time_left_secs: u32,
    pub rush: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        let mut id: CardId = 0;
        self.cards = [(); DECK_SIZE].map(|_| {
            let card = Card::new(id, CardKind::Plastic);
            id += 1;
            card
        });
        self.selection = [None; 2];
        self.score = 0;
        self.time_left_secs = ROUND_SECS;
        self.rush = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// Whether `id` is part of the pair currently on show.
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selection.contains(&Some(id))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cards: [Card::new(0, CardKind::Plastic); DECK_SIZE],
            selection: [None; 2],
            score: 0,
            time_left_secs: ROUND_SECS,
            rush: false,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
