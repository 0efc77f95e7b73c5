//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, screen control, terminal rendering).
//!
//! # Deck
//!
//! Every round is played with the same 14-card deck:
//!
//! - **Plastic**, **Paper**, **Glass**: 4 cards each (two matchable pairs per kind)
//! - **Contaminant**: 2 cards (never matchable, always penalized)
//!
//! Cards are laid out in a grid of [`GRID_COLUMNS`] columns.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECS` | 60 | Length of a round |
//! | `RUSH_THRESHOLD_SECS` | 20 | Rush mode starts once fewer seconds remain |
//! | `TIMER_TICK_MS` | 1000 | Countdown tick interval |
//! | `SELECTION_CLEAR_MS` | 500 | Delay before a resolved pair leaves the selection |
//! | `FRAME_MS` | 16 | Default render/poll frame (~60 FPS) |
//!
//! # Scoring
//!
//! - Matching two cards of the same recyclable kind: `+MATCH_POINTS`
//! - Any pair involving a contaminant: `-CONTAMINANT_PENALTY`
//! - Two different recyclable kinds: no change
//!
//! # Examples
//!
//! ```
//! use recycling_challenge_types::{CardKind, Phase, DECK_SIZE, GRID_COLUMNS};
//!
//! let kind = CardKind::from_str("Glass").unwrap();
//! assert_eq!(kind, CardKind::Glass);
//! assert!(kind.is_recyclable());
//! assert!(!CardKind::Contaminant.is_recyclable());
//!
//! assert_eq!(Phase::default(), Phase::Home);
//! assert_eq!(DECK_SIZE, 14);
//! assert_eq!(GRID_COLUMNS, 4);
//! ```

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 14;

/// Copies of each recyclable kind in a deck.
pub const RECYCLABLE_COPIES: usize = 4;

/// Copies of the contaminant kind in a deck.
pub const CONTAMINANT_COPIES: usize = 2;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Round length in seconds.
pub const ROUND_SECS: u32 = 60;

/// Rush mode turns on once the countdown drops below this many seconds.
pub const RUSH_THRESHOLD_SECS: u32 = 20;

/// Countdown tick interval in milliseconds.
pub const TIMER_TICK_MS: u64 = 1000;

/// Delay before a resolved pair is cleared from the selection buffer.
pub const SELECTION_CLEAR_MS: u64 = 500;

/// Default frame interval for rendering and input polling (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Points awarded for a matched recyclable pair.
pub const MATCH_POINTS: i32 = 10;

/// Points deducted for any pair containing a contaminant.
pub const CONTAMINANT_PENALTY: i32 = 5;

/// Stable per-deck card identifier (0..DECK_SIZE).
pub type CardId = u8;

/// The four card categories.
///
/// - **Plastic**, **Paper**, **Glass**: recyclable, matchable in pairs
/// - **Contaminant**: never matchable; any pair containing one is penalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Plastic,
    Paper,
    Glass,
    Contaminant,
}

impl CardKind {
    /// All kinds, recyclables first.
    pub const ALL: [CardKind; 4] = [
        CardKind::Plastic,
        CardKind::Paper,
        CardKind::Glass,
        CardKind::Contaminant,
    ];

    /// The matchable kinds.
    pub const RECYCLABLE: [CardKind; 3] = [CardKind::Plastic, CardKind::Paper, CardKind::Glass];

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use recycling_challenge_types::CardKind;
    ///
    /// assert_eq!(CardKind::from_str("plastic"), Some(CardKind::Plastic));
    /// assert_eq!(CardKind::from_str("PAPER"), Some(CardKind::Paper));
    /// assert_eq!(CardKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plastic" => Some(CardKind::Plastic),
            "paper" => Some(CardKind::Paper),
            "glass" => Some(CardKind::Glass),
            "contaminant" => Some(CardKind::Contaminant),
            _ => None,
        }
    }

    /// Lowercase display name, shown on a face-up card.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Plastic => "plastic",
            CardKind::Paper => "paper",
            CardKind::Glass => "glass",
            CardKind::Contaminant => "contaminant",
        }
    }

    pub fn is_recyclable(&self) -> bool {
        !matches!(self, CardKind::Contaminant)
    }
}

/// Which screen is active.
///
/// The cycle goes: Home → Playing → Result → (Playing | Leaderboard),
/// Leaderboard → Home, and Home → Leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Home,
    Playing,
    Result,
    Leaderboard,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Home => "home",
            Phase::Playing => "playing",
            Phase::Result => "result",
            Phase::Leaderboard => "leaderboard",
        }
    }
}

/// Direction for moving the card cursor on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

impl CursorMove {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(CursorMove::Left),
            "right" => Some(CursorMove::Right),
            "up" => Some(CursorMove::Up),
            "down" => Some(CursorMove::Down),
            _ => None,
        }
    }
}

/// Player-visible actions.
///
/// These are produced by the input layer and dispatched by the screen
/// controller. An action that is not valid in the current phase is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// "Start Recycling" on the home screen, "Recycle More" on the result screen
    StartGame,
    /// "View Leaderboard" from home or result
    ViewLeaderboard,
    /// "Back to Home" from the leaderboard
    BackHome,
    /// Tap a specific card
    Tap(CardId),
    /// Move the keyboard cursor over the grid
    MoveCursor(CursorMove),
    /// Tap the card under the cursor
    FlipCursor,
}

/// Result of evaluating a completed pair.
///
/// - **Matched**: same recyclable kind, both cards stay matched
/// - **Contaminated**: at least one contaminant
/// - **Mismatched**: two different recyclable kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Matched,
    Contaminated,
    Mismatched,
}

impl PairOutcome {
    /// Score delta applied when this outcome is resolved.
    pub fn points(&self) -> i32 {
        match self {
            PairOutcome::Matched => MATCH_POINTS,
            PairOutcome::Contaminated => -CONTAMINANT_PENALTY,
            PairOutcome::Mismatched => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PairOutcome::Matched => "matched",
            PairOutcome::Contaminated => "contaminated",
            PairOutcome::Mismatched => "mismatched",
        }
    }
}

/// What a single card tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResult {
    /// Guard rejected the tap; nothing changed.
    Ignored,
    /// First card of a pair is face-up.
    Revealed,
    /// Second card completed a pair which was resolved immediately.
    Resolved(PairOutcome),
}
