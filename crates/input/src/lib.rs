//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`]s. The mapping
//! depends on the active [`crate::types::Phase`], since the same key (Enter)
//! starts a round on the home screen and flips a card while playing.

pub mod map;

pub use recycling_challenge_types as types;

pub use map::{handle_key_event, should_quit};
