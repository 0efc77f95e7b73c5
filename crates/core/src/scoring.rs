//! Scoring module - pair resolution rules
//!
//! - Two cards of the same recyclable kind match.
//! - Any pair touching a contaminant is penalized, contaminant pairs included.
//! - Two different recyclable kinds are a plain miss.

use crate::types::{CardKind, PairOutcome};

/// Evaluate a completed pair.
pub fn resolve_pair(first: CardKind, second: CardKind) -> PairOutcome {
    if first == second && first.is_recyclable() {
        PairOutcome::Matched
    } else if !first.is_recyclable() || !second.is_recyclable() {
        PairOutcome::Contaminated
    } else {
        PairOutcome::Mismatched
    }
}
