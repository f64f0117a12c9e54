//! Core engine for the Crucible daily alchemy number puzzle.
//!
//! A seeded generator derives one puzzle per day (five numeric elements,
//! four glyph-labelled reagents with hidden operator identities), a
//! placement state machine enforces the alternating element/reagent
//! grammar, and the evaluator folds a completed sequence into one
//! arbitrary-precision number. No rendering, persistence, or networking
//! lives here; a presentation layer consumes the snapshots.

pub mod engine;
pub mod game;
pub mod rng;

pub use engine::evaluator::{Evaluation, Step};
pub use engine::session::{GameSession, Phase};
pub use game::{DailyPuzzle, EngineError, OperatorCategory, OperatorId, Reagent};
