//! Pieces module - the seven tetromino templates and the piece factory
//!
//! Each template is four `(x, y)` offsets from an anchor point, with offset 0
//! acting as the rotation pivot. The colour <-> shape assignment is a fixed
//! bijection: the colour alone identifies a piece kind, which is how the
//! preview piece carries its shape forward to the next spawn.

use crate::core::rng;
use crate::types::{Cell, Colour, Piece};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets, offset 0 is the rotation pivot
pub type ShapeTemplate = [CellOffset; 4];

/// Get the shape template for a colour.
pub fn template(colour: Colour) -> ShapeTemplate {
    match colour {
        // 2x2 square; exempt from rotation.
        Colour::Yellow => [(0, 0), (1, 0), (0, 1), (1, 1)],
        // J: nub above the left end of the bottom row.
        Colour::Blue => [(0, 0), (-1, -1), (-1, 0), (1, 0)],
        // L: nub above the right end of the bottom row.
        Colour::Orange => [(0, 0), (-1, 0), (1, 0), (1, -1)],
        // S: top pair offset right of the bottom pair.
        Colour::Red => [(0, 0), (-1, 0), (0, -1), (1, -1)],
        // Z: top pair offset left of the bottom pair.
        Colour::Green => [(0, 0), (1, 0), (0, -1), (-1, -1)],
        // T: stem above the centre of the bottom row.
        Colour::Purple => [(0, 0), (-1, 0), (1, 0), (0, -1)],
        // I: horizontal bar, pivot second from the left.
        Colour::Cyan => [(0, 0), (-1, 0), (1, 0), (2, 0)],
    }
}

/// Build a piece from a raw shape selector.
///
/// The selector is reduced through [`rng::scale`] to pick one of the seven
/// templates. `tag` only feeds the cell identities (`"{tag}1"`..`"{tag}4"`)
/// so a renderer can track cells across frames; it has no gameplay effect.
pub fn tetromino(selector: u32, anchor_x: i8, anchor_y: i8, tag: &str) -> Piece {
    from_colour(
        Colour::from_index(rng::scale(selector)),
        anchor_x,
        anchor_y,
        tag,
    )
}

/// Build a piece of a known colour at an anchor.
///
/// Used at spawn time to re-resolve the preview piece's colour into a fresh
/// piece on the main grid.
pub fn from_colour(colour: Colour, anchor_x: i8, anchor_y: i8, tag: &str) -> Piece {
    template(colour)
        .iter()
        .enumerate()
        .map(|(i, &(dx, dy))| Cell {
            x: anchor_x + dx,
            y: anchor_y + dy,
            colour,
            id: format!("{}{}", tag, i + 1),
        })
        .collect()
}
