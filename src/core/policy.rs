//! Difficulty/scoring policy - pure functions from progress to pacing
//!
//! Kept separate from the transition engine so the formulas can be checked
//! in isolation; scenario parity depends on reproducing them exactly.

use crate::types::{INITIAL_DROP_INTERVAL_MS, LINE_SCORE, SCORE_PER_LEVEL, TICK_INTERVAL_MS};

/// Score awarded for clearing `lines` rows in one landing.
pub fn score_delta(lines: u32) -> u32 {
    LINE_SCORE * lines
}

/// Level reached at a cumulative score. Levels are 1-based and advance
/// every `SCORE_PER_LEVEL` points.
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Ticks between automatic one-row descents at a level.
///
/// The drop interval shrinks on an exponential curve, five times faster
/// every ten levels: `initial * 5^(-0.1 * (level - 1))`, converted to whole
/// ticks.
pub fn drop_ticks(level: u32) -> u32 {
    let interval = INITIAL_DROP_INTERVAL_MS * 5f64.powf(-0.1 * (level as f64 - 1.0));
    (interval / f64::from(TICK_INTERVAL_MS)).round() as u32
}
