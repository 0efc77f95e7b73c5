//! Game state module - manages one round of the memory game
//!
//! This module ties together the deck, RNG and scoring rules. It owns the
//! selection buffer, score, countdown and rush flag, and exposes exactly three
//! mutations: [`GameState::tap`], [`GameState::tick_second`] and
//! [`GameState::reset`], plus the generation-checked
//! [`GameState::clear_selection`] used by deferred clears.

use arrayvec::ArrayVec;

use crate::deck::{Card, Deck};
use crate::rng::SimpleRng;
use crate::scoring::resolve_pair;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete state of the current round
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    /// Face-up cards awaiting (or just past) pair resolution.
    selection: ArrayVec<CardId, 2>,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic round id (increments on reset). Deferred clears carry it.
    episode_id: u32,
    score: i32,
    time_left_secs: u32,
    rush: bool,
}

impl GameState {
    /// Create a new round with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let deck = Deck::deal(&mut rng);

        Self {
            deck,
            selection: ArrayVec::new(),
            rng,
            seed,
            episode_id: 0,
            score: 0,
            time_left_secs: ROUND_SECS,
            rush: false,
        }
    }

    /// Create a round over a prearranged deck (fixtures and replays).
    pub fn with_deck(seed: u32, deck: Deck) -> Self {
        Self {
            deck,
            ..Self::new(seed)
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn rush(&self) -> bool {
        self.rush
    }

    pub fn expired(&self) -> bool {
        self.time_left_secs == 0
    }

    /// Whether a resolved pair is still waiting for its deferred clear.
    pub fn pair_pending(&self) -> bool {
        self.selection.is_full()
    }

    /// Start a new round: fresh deck, empty selection, full clock.
    pub fn reset(&mut self) {
        self.deck = Deck::deal(&mut self.rng);
        self.selection.clear();
        self.score = 0;
        self.time_left_secs = ROUND_SECS;
        self.rush = false;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Flip a card face-up and resolve the pair once two are selected.
    ///
    /// Face-up cards, unknown ids and taps while a resolved pair is still
    /// pending its clear are ignored.
    pub fn tap(&mut self, id: CardId) -> TapResult {
        if self.pair_pending() {
            return TapResult::Ignored;
        }
        let Some(card) = self.deck.get_mut(id) else {
            return TapResult::Ignored;
        };
        if card.revealed || card.matched {
            return TapResult::Ignored;
        }

        card.revealed = true;
        self.selection.push(id);
        debug_assert!(self.selection.len() <= 2);

        if self.selection.len() < 2 {
            return TapResult::Revealed;
        }

        let outcome = self.resolve_selection();
        TapResult::Resolved(outcome)
    }

    fn resolve_selection(&mut self) -> PairOutcome {
        let (first, second) = (self.selection[0], self.selection[1]);
        let kind_of = |deck: &Deck, id: CardId| {
            deck.get(id)
                .map(|c| c.kind)
                .unwrap_or(CardKind::Contaminant)
        };
        let outcome = resolve_pair(kind_of(&self.deck, first), kind_of(&self.deck, second));

        if outcome == PairOutcome::Matched {
            for id in [first, second] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.matched = true;
                }
            }
        }

        self.score += outcome.points();
        outcome
    }

    /// Empty the selection buffer if `generation` is still the current round.
    ///
    /// Returns false (and leaves state untouched) for a stale generation.
    /// Revealed cards stay face-up either way.
    pub fn clear_selection(&mut self, generation: u32) -> bool {
        if generation != self.episode_id {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true once the clock has run out.
    pub fn tick_second(&mut self) -> bool {
        self.time_left_secs = self.time_left_secs.saturating_sub(1);
        if self.time_left_secs < RUSH_THRESHOLD_SECS {
            self.rush = true;
        }
        self.expired()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards = *self.deck.cards();
        out.selection = [self.selection.first().copied(), self.selection.get(1).copied()];
        out.score = self.score;
        out.time_left_secs = self.time_left_secs;
        out.rush = self.rush;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
