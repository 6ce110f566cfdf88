//! Game state module - the action-to-state transition engine
//!
//! The `Game` value is the single authoritative state: every transition goes
//! through [`Game::apply`], which returns a brand-new value and never mutates
//! the prior one. The implicit state machine (falling -> landing ->
//! line-clear -> spawn -> ... -> game-over -> reset) is encoded by composing
//! the geometry module's primitives, not by separate state types.

use crate::core::snapshot::GameSnapshot;
use crate::core::{grid, pieces, policy, rng};
use crate::types::{
    Action, Cell, Colour, Piece, GRID_HEIGHT, PREVIEW_X, PREVIEW_Y, SPAWN_X, SPAWN_Y,
};

/// Complete game state. Replaced wholesale on every applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Count of gravity steps taken; also seeds spawn tags.
    game_tick: u32,
    /// Ticks since the last automatic drop.
    current_tick: u32,
    /// Ticks required per automatic drop at the current level.
    drop_tick: u32,
    /// The falling piece; empty when nothing is active.
    current: Piece,
    /// Permanently placed cells.
    settled: Vec<Cell>,
    /// Settled grid as of the prior frame (render diffing only).
    previous_settled: Vec<Cell>,
    /// Next piece, positioned in preview space.
    preview: Piece,
    /// Vestigial: carried for state-shape compatibility, reset on spawn,
    /// never read.
    hold_on_cooldown: bool,
    /// Render hint: the settled grid or preview changed this step.
    update_grid: bool,
    /// Current generator seed.
    rng: u32,
    level: u32,
    score: u32,
    lines_cleared: u32,
    high_score: u32,
    /// Terminal flag; once set, only `Reset` does anything.
    game_end: bool,
}

impl Game {
    /// Bootstrap state: empty grids, no active piece, preview rolled from
    /// the seed. The first gravity step spawns the first piece.
    pub fn new(seed: u32) -> Self {
        Self {
            game_tick: 0,
            current_tick: 0,
            drop_tick: policy::drop_ticks(1),
            current: Piece::new(),
            settled: Vec::new(),
            previous_settled: Vec::new(),
            preview: pieces::tetromino(seed, PREVIEW_X, PREVIEW_Y, "preview"),
            hold_on_cooldown: false,
            update_grid: true,
            rng: rng::hash(seed),
            level: 1,
            score: 0,
            lines_cleared: 0,
            high_score: 0,
            game_end: false,
        }
    }

    /// The engine's sole operation: fold one action onto this state and
    /// return the next state. Total over the full state space; illegal
    /// moves come back as an unchanged state, never an error.
    pub fn apply(&self, action: Action) -> Game {
        if self.game_end && action != Action::Reset {
            return self.clone();
        }

        let mut next = self.clone();
        match action {
            Action::Tick => {
                next.current_tick += 1;
                if next.current_tick >= next.drop_tick {
                    next.current_tick = 0;
                    next.drop_tick = policy::drop_ticks(next.level);
                    next.gravity_step();
                } else {
                    next.update_grid = false;
                }
            }
            Action::MoveLeft => next.shift(-1, 0),
            Action::MoveRight => next.shift(1, 0),
            Action::MoveDown => next.shift(0, 1),
            Action::Rotate => {
                next.current = grid::try_rotate(&next.current, &next.settled);
                next.update_grid = false;
            }
            Action::HardDrop => next.hard_drop(),
            Action::Reset => next.reset(),
        }
        next
    }

    /// One automatic descent. A blocked descent means the piece has landed:
    /// the pre-translation piece is merged into the settled grid and the
    /// post-landing pipeline runs. With no active piece the pipeline runs
    /// directly so the next piece spawns.
    fn gravity_step(&mut self) {
        self.game_tick += 1;

        let had_piece = !self.current.is_empty();
        let dropped = grid::translate_piece(&self.current, 0, 1, false);
        let landed = had_piece && grid::is_colliding(&dropped, &self.settled);

        if landed {
            self.previous_settled = self.settled.clone();
            let merged = grid::translate(&self.current, 0, 0, true);
            self.settled.extend(merged);
            self.current.clear();
        } else {
            self.current = dropped;
        }

        if landed || !had_piece {
            self.resolve_landing();
        } else {
            self.update_grid = false;
        }
    }

    /// Validity-gated translation of the active piece.
    fn shift(&mut self, dx: i8, dy: i8) {
        let moved = grid::translate_piece(&self.current, dx, dy, false);
        if grid::is_valid_placement(&moved, &self.settled, self.game_end) {
            self.current = moved;
        }
        self.update_grid = false;
    }

    /// Drop the active piece straight down as far as it can go, then land
    /// it immediately.
    fn hard_drop(&mut self) {
        if self.current.is_empty() {
            self.update_grid = true;
            return;
        }

        let distance = self.free_fall_distance();
        let dropped = grid::translate_piece(&self.current, 0, distance, true);

        self.previous_settled = self.settled.clone();
        self.settled.extend(dropped);
        self.current.clear();
        self.resolve_landing();
    }

    /// Minimum free-fall distance across the piece's occupied columns:
    /// each column falls until its lowest piece cell meets the floor or the
    /// highest settled cell below it.
    fn free_fall_distance(&self) -> i8 {
        let mut distance = i8::MAX;
        for cell in &self.current {
            let column = cell.x;
            let lowest = self
                .current
                .iter()
                .filter(|c| c.x == column)
                .map(|c| c.y)
                .max()
                .unwrap_or(cell.y);

            let column_distance = self
                .settled
                .iter()
                .filter(|c| c.x == column && c.y > lowest)
                .map(|c| c.y)
                .min()
                .map(|blocker| blocker - lowest - 1)
                .unwrap_or(GRID_HEIGHT - 1 - lowest);

            distance = distance.min(column_distance);
        }
        distance.max(0)
    }

    /// Post-landing pipeline: collapse full rows, update score/level/lines
    /// and the high score, recognize game over, then spawn the next piece
    /// from the preview (unless the game just ended, so the rolled preview
    /// survives into `Reset`).
    fn resolve_landing(&mut self) {
        let full = grid::full_row_indices(&grid::rows(&self.settled));
        for &row in &full {
            self.settled = grid::clear_row(&self.settled, row);
        }

        let cleared = full.len() as u32;
        if cleared > 0 {
            self.score += policy::score_delta(cleared);
            self.lines_cleared += cleared;
            self.level = policy::level_for_score(self.score);
        }
        self.high_score = self.high_score.max(self.score);

        self.game_end = self.settled.iter().any(|c| c.y < 0);
        self.update_grid = true;
        self.hold_on_cooldown = false;

        if !self.game_end {
            self.spawn();
        }
    }

    /// Re-resolve the preview's colour at the main spawn anchor and roll a
    /// fresh preview, advancing the generator seed.
    fn spawn(&mut self) {
        let Some(colour) = self.preview.first().map(|c| c.colour) else {
            return;
        };
        let tag = format!("piece{}", self.game_tick);
        self.current = pieces::from_colour(colour, SPAWN_X, SPAWN_Y, &tag);
        self.preview = pieces::tetromino(self.rng, PREVIEW_X, PREVIEW_Y, "preview");
        self.rng = rng::hash(self.rng);
    }

    /// Back to a fresh board. Only meaningful after game over; the high
    /// score, the generator seed, and the already-rolled preview carry
    /// over so the next spawn continues the deterministic sequence.
    fn reset(&mut self) {
        if !self.game_end {
            return;
        }
        self.game_tick = 0;
        self.current_tick = 0;
        self.drop_tick = policy::drop_ticks(1);
        self.current.clear();
        self.settled.clear();
        self.previous_settled.clear();
        self.hold_on_cooldown = false;
        self.update_grid = true;
        self.level = 1;
        self.score = 0;
        self.lines_cleared = 0;
        self.game_end = false;
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn settled(&self) -> &[Cell] {
        &self.settled
    }

    pub fn previous_settled(&self) -> &[Cell] {
        &self.previous_settled
    }

    pub fn preview(&self) -> &Piece {
        &self.preview
    }

    pub fn preview_colour(&self) -> Option<Colour> {
        self.preview.first().map(|c| c.colour)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_end(&self) -> bool {
        self.game_end
    }

    pub fn update_grid(&self) -> bool {
        self.update_grid
    }

    pub fn rng_seed(&self) -> u32 {
        self.rng
    }

    pub fn current_tick(&self) -> u32 {
        self.current_tick
    }

    pub fn drop_tick(&self) -> u32 {
        self.drop_tick
    }

    pub fn game_tick(&self) -> u32 {
        self.game_tick
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current: self.current.to_vec(),
            settled: self.settled.clone(),
            previous_settled: self.previous_settled.clone(),
            preview: self.preview.to_vec(),
            update_grid: self.update_grid,
            score: self.score,
            level: self.level,
            lines_cleared: self.lines_cleared,
            high_score: self.high_score,
            game_end: self.game_end,
        }
    }
}
