//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the recycling memory game: dealing,
//! pair resolution, scoring and the countdown. It has **zero dependencies**
//! on UI, timers or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same sequence of decks
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Drives the terminal front end or a headless harness alike
//!
//! # Module Structure
//!
//! - [`deck`]: the fixed 14-card deck and its dealing
//! - [`game_state`]: one round (selection buffer, score, countdown, rush flag)
//! - [`leaderboard`]: finished rounds in chronological order
//! - [`rng`]: seeded LCG with an unbiased Fisher-Yates shuffle
//! - [`scoring`]: pair resolution rules
//! - [`snapshot`]: copyable view of a round for renderers
//!
//! # Game Rules
//!
//! - Tap two face-down cards. Same recyclable kind: +10 and the pair stays matched.
//! - Any pair with a contaminant: -5. Two different recyclables: no change.
//! - Unmatched cards stay face-up for the rest of the round.
//! - The round always lasts the full 60 seconds; rush mode below 20 seconds.
//!
//! # Example
//!
//! ```
//! use recycling_challenge_core::GameState;
//! use recycling_challenge_types::{CardKind, PairOutcome, TapResult};
//!
//! let mut game = GameState::new(12345);
//!
//! let a = game.deck().find_hidden(CardKind::Paper).unwrap();
//! game.tap(a);
//! let b = game.deck().find_hidden(CardKind::Paper).unwrap();
//! assert_eq!(game.tap(b), TapResult::Resolved(PairOutcome::Matched));
//! assert_eq!(game.score(), 10);
//!
//! // The buffer is emptied by a deferred clear for the same round.
//! assert!(game.clear_selection(game.episode_id()));
//! ```
//!
//! # Timing
//!
//! Core has no clock of its own. The screen controller calls
//! [`GameState::tick_second`](game_state::GameState::tick_second) once per second
//! and [`GameState::clear_selection`](game_state::GameState::clear_selection) 500ms
//! after each resolved pair.

pub mod deck;
pub mod game_state;
pub mod leaderboard;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use recycling_challenge_types as types;

// Re-export commonly used types for convenience
pub use deck::{Card, Deck};
pub use game_state::GameState;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use rng::SimpleRng;
pub use scoring::resolve_pair;
pub use snapshot::GameSnapshot;
