//! Core module - pure game logic with no external dependencies
//!
//! Everything in here is deterministic and side-effect free: the transition
//! engine, the geometry primitives it composes, the piece factory, the LCG,
//! and the pacing/scoring policy. No I/O, no clocks, no drawing.

pub mod game;
pub mod grid;
pub mod pieces;
pub mod policy;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use game::Game;
pub use snapshot::GameSnapshot;
