//! Screen controller for the recycling game.
//!
//! Wraps the pure [`core`] round logic with everything that involves time or
//! navigation:
//!
//! - [`session`]: the phase machine (home, playing, result, leaderboard) and
//!   the leaderboard bookkeeping
//! - [`schedule`]: deferred tasks (one-second countdown ticks, 500ms pair clears)
//!   run against an explicit millisecond clock
//! - [`clock`]: wall-clock timestamps recorded with each finished round
//! - [`config`]: environment-driven runtime settings
//!
//! # Example
//!
//! ```
//! use recycling_challenge_engine::{FixedClock, Session};
//! use recycling_challenge_types::{Phase, UiAction};
//!
//! let mut session = Session::new(7, FixedClock("12:0:0".into()));
//! session.apply(UiAction::StartGame);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! // Sixty seconds later the round is over and recorded.
//! session.advance(60_000);
//! assert_eq!(session.phase(), Phase::Result);
//! assert_eq!(session.leaderboard().len(), 1);
//! ```

pub mod clock;
pub mod config;
pub mod schedule;
pub mod session;

pub use recycling_challenge_core as core;
pub use recycling_challenge_types as types;

pub use clock::{Clock, FixedClock, LocalClock};
pub use config::SessionConfig;
pub use schedule::{Deferred, DeferredTask, Scheduler};
pub use session::{step_cursor, ScreenSnapshot, Session};
