//! Pure layout for the terminal view: snapshot -> colour grids and text.
//!
//! Keeping this free of I/O lets the layout be unit tested; the renderer
//! only flushes what these functions produce.

use crate::core::GameSnapshot;
use crate::types::{Colour, GRID_HEIGHT, GRID_WIDTH, PREVIEW_SIZE};

pub type MainGrid = [[Option<Colour>; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
pub type PreviewGrid = [[Option<Colour>; PREVIEW_SIZE as usize]; PREVIEW_SIZE as usize];

/// Materialize the visible playfield: settled cells plus the falling piece,
/// with anything above row zero clipped off.
pub fn main_grid(snapshot: &GameSnapshot) -> MainGrid {
    let mut grid: MainGrid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    for cell in snapshot.settled.iter().chain(snapshot.current.iter()) {
        if cell.y >= 0 && cell.y < GRID_HEIGHT && cell.x >= 0 && cell.x < GRID_WIDTH {
            grid[cell.y as usize][cell.x as usize] = Some(cell.colour);
        }
    }
    grid
}

/// Materialize the preview box in its own coordinate space.
pub fn preview_grid(snapshot: &GameSnapshot) -> PreviewGrid {
    let mut grid: PreviewGrid = [[None; PREVIEW_SIZE as usize]; PREVIEW_SIZE as usize];
    for cell in &snapshot.preview {
        if cell.y >= 0 && cell.y < PREVIEW_SIZE && cell.x >= 0 && cell.x < PREVIEW_SIZE {
            grid[cell.y as usize][cell.x as usize] = Some(cell.colour);
        }
    }
    grid
}

/// One-line scoreboard.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    format!(
        "Score {:>6}  Level {:>2}  Lines {:>4}  High {:>6}",
        snapshot.score, snapshot.level, snapshot.lines_cleared, snapshot.high_score
    )
}
