//! Read-only view of the game state for rendering collaborators.
//!
//! The renderer never touches the engine directly; it draws from this field
//! set, so the engine's contract with the display layer stays one-way.

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Cells of the falling piece (empty when nothing is active).
    pub current: Vec<Cell>,
    /// Permanently placed cells.
    pub settled: Vec<Cell>,
    /// Settled grid as of the prior frame, for diffed redraw.
    pub previous_settled: Vec<Cell>,
    /// Cells of the next piece, in preview-space coordinates.
    pub preview: Vec<Cell>,
    /// True when the settled grid or preview changed this step; a renderer
    /// may fall back to an incremental redraw otherwise.
    pub update_grid: bool,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub high_score: u32,
    pub game_end: bool,
}
