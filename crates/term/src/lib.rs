//! Terminal "game renderer" module.
//!
//! A small rendering layer for the recycling game. Screens are drawn into a
//! plain framebuffer by the pure [`ScreenView`], then flushed to the terminal
//! by [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - Make every screen testable without a TTY
//! - Share one layout between drawing and mouse hit-testing

pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use recycling_challenge_core as core;
pub use recycling_challenge_engine as engine;
pub use recycling_challenge_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{collect_changed_spans, encode_full_into, encode_spans_into, Span, TerminalRenderer};
pub use screen_view::{GridLayout, ScreenView, Viewport};
