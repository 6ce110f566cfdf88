//! Core types shared across the application
//! This module contains pure data types with no external dependencies
//! beyond the fixed-capacity piece storage.

use arrayvec::ArrayVec;

/// Grid dimensions
pub const GRID_WIDTH: i8 = 10;
pub const GRID_HEIGHT: i8 = 20;

/// Main-grid spawn anchor. The negative row lets a piece enter from above
/// the visible grid.
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = -2;

/// Preview-grid anchor (preview space is its own small coordinate system;
/// only the colour survives into the main grid at spawn time).
pub const PREVIEW_X: i8 = 1;
pub const PREVIEW_Y: i8 = 1;
pub const PREVIEW_SIZE: i8 = 4;

/// Game timing constants (in milliseconds)
pub const TICK_INTERVAL_MS: u32 = 100;
pub const INITIAL_DROP_INTERVAL_MS: f64 = 1000.0;

/// Scoring constants
pub const LINE_SCORE: u32 = 100;
pub const SCORE_PER_LEVEL: u32 = 1000;

/// The seven piece colours. Each colour maps one-to-one onto a shape
/// template, so the colour alone identifies a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Yellow,
    Blue,
    Orange,
    Red,
    Green,
    Purple,
    Cyan,
}

impl Colour {
    /// Map a scaled selector in `[0, 6]` to its colour.
    pub fn from_index(index: u32) -> Self {
        match index % 7 {
            0 => Colour::Yellow,
            1 => Colour::Blue,
            2 => Colour::Orange,
            3 => Colour::Red,
            4 => Colour::Green,
            5 => Colour::Purple,
            _ => Colour::Cyan,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            Colour::Yellow => 0,
            Colour::Blue => 1,
            Colour::Orange => 2,
            Colour::Red => 3,
            Colour::Green => 4,
            Colour::Purple => 5,
            Colour::Cyan => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Colour::Yellow => "yellow",
            Colour::Blue => "blue",
            Colour::Orange => "orange",
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Purple => "purple",
            Colour::Cyan => "cyan",
        }
    }
}

/// Stable per-cell identifier. While a piece falls the id is derived from
/// its spawn tag; once the piece settles the id is recomputed from the
/// cell's coordinates so it stays content-addressed across row collapses.
pub type CellId = String;

/// A single occupied grid square.
///
/// `y` may be negative for a piece still entering the visible grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
    pub colour: Colour,
    pub id: CellId,
}

/// The falling unit: exactly four cells of one colour. Cell 0 is the
/// rotation pivot. An empty piece means nothing is currently falling.
pub type Piece = ArrayVec<Cell, 4>;

/// The closed set of engine inputs. `Tick` arrives from the scheduler,
/// everything else from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Tick,
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Reset,
}
