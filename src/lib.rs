//! Gridfall - a deterministic falling-block puzzle engine.
//!
//! The game lives entirely in [`core`]: an immutable state value folded over
//! a stream of [`types::Action`]s. The [`input`] and [`term`] modules are the
//! external collaborators (key mapping and terminal drawing); the binary
//! wires them to a fixed-interval tick loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
