//! Recycling Challenge (workspace facade crate).
//!
//! Re-exports the workspace crates as `recycling_challenge::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use recycling_challenge_core as core;
pub use recycling_challenge_engine as engine;
pub use recycling_challenge_input as input;
pub use recycling_challenge_term as term;
pub use recycling_challenge_types as types;
