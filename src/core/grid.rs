//! Grid geometry & collision module
//!
//! Pure predicates and transforms over cell sets. Nothing in here touches
//! game state; the transition engine composes these primitives.

use crate::types::{Cell, CellId, Colour, Piece, GRID_HEIGHT, GRID_WIDTH};

/// Content-addressed identity for a settled cell.
///
/// Settled identities are a function of position only, so a cell keeps a
/// stable id when rows collapse underneath it and it is re-derived at its
/// new coordinates.
pub fn settled_id(x: i8, y: i8) -> CellId {
    format!("cell-{}-{}", x, y)
}

fn shift_cell(cell: &Cell, dx: i8, dy: i8, regenerate_identity: bool) -> Cell {
    let x = cell.x + dx;
    let y = cell.y + dy;
    Cell {
        x,
        y,
        colour: cell.colour,
        id: if regenerate_identity {
            settled_id(x, y)
        } else {
            cell.id.clone()
        },
    }
}

/// Translate a cell set by `(dx, dy)`.
///
/// With `regenerate_identity` the ids are recomputed from the new
/// coordinates, which is how a piece's cells become content-addressed when
/// they join the settled grid.
pub fn translate(cells: &[Cell], dx: i8, dy: i8, regenerate_identity: bool) -> Vec<Cell> {
    cells
        .iter()
        .map(|c| shift_cell(c, dx, dy, regenerate_identity))
        .collect()
}

/// Piece-shaped variant of [`translate`].
pub fn translate_piece(piece: &Piece, dx: i8, dy: i8, regenerate_identity: bool) -> Piece {
    piece
        .iter()
        .map(|c| shift_cell(c, dx, dy, regenerate_identity))
        .collect()
}

/// True if any cell leaves the playfield horizontally or past the floor.
/// Negative `y` is allowed (a piece entering from above).
pub fn is_out_of_bounds(piece: &[Cell]) -> bool {
    piece
        .iter()
        .any(|c| c.x < 0 || c.x >= GRID_WIDTH || c.y >= GRID_HEIGHT)
}

/// True if any piece cell coincides with a settled cell or lies past the
/// floor.
pub fn is_colliding(piece: &[Cell], settled: &[Cell]) -> bool {
    piece.iter().any(|p| {
        p.y >= GRID_HEIGHT || settled.iter().any(|s| s.x == p.x && s.y == p.y)
    })
}

/// Combined placement test used by the movement actions.
pub fn is_valid_placement(piece: &[Cell], settled: &[Cell], game_end: bool) -> bool {
    !is_colliding(piece, settled) && !is_out_of_bounds(piece) && !game_end
}

/// Materialize the settled set into `GRID_HEIGHT` rows. Cells above the
/// visible grid (`y < 0`) belong to no row.
pub fn rows(settled: &[Cell]) -> Vec<Vec<Cell>> {
    (0..GRID_HEIGHT)
        .map(|y| settled.iter().filter(|c| c.y == y).cloned().collect())
        .collect()
}

/// Row indices that are completely filled, in ascending order.
pub fn full_row_indices(rows: &[Vec<Cell>]) -> Vec<i8> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.len() == GRID_WIDTH as usize)
        .map(|(y, _)| y as i8)
        .collect()
}

/// Remove the given row and shift every cell above it down by one, with
/// identities recomputed from the new coordinates.
///
/// Applying this once per entry of [`full_row_indices`] in ascending order
/// collapses multiple simultaneous full rows correctly: each clear operates
/// on the already-partially-collapsed grid.
pub fn clear_row(settled: &[Cell], row: i8) -> Vec<Cell> {
    settled
        .iter()
        .filter(|c| c.y != row)
        .map(|c| {
            if c.y < row {
                shift_cell(c, 0, 1, true)
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Rotate a piece 90 degrees about its pivot (cell 0) using
/// `(rx, ry) -> (-ry, rx)`.
///
/// The square is rotation-symmetric and returned unchanged, as is an empty
/// piece. Identities are untouched; rotation never re-keys cells.
pub fn rotate(piece: &Piece) -> Piece {
    let Some(pivot) = piece.first() else {
        return piece.clone();
    };
    if pivot.colour == Colour::Yellow {
        return piece.clone();
    }
    let (px, py) = (pivot.x, pivot.y);
    piece
        .iter()
        .map(|c| {
            let rx = c.x - px;
            let ry = c.y - py;
            Cell {
                x: px - ry,
                y: py + rx,
                colour: c.colour,
                id: c.id.clone(),
            }
        })
        .collect()
}

/// Horizontal wall-kick correction: a single shift back inside the vertical
/// walls, nothing more. No kicks against settled cells or the floor.
fn kick(piece: Piece) -> Piece {
    let Some(min_x) = piece.iter().map(|c| c.x).min() else {
        return piece;
    };
    let max_x = piece.iter().map(|c| c.x).max().unwrap_or(0);
    if min_x < 0 {
        translate_piece(&piece, -min_x, 0, false)
    } else if max_x >= GRID_WIDTH {
        translate_piece(&piece, GRID_WIDTH - 1 - max_x, 0, false)
    } else {
        piece
    }
}

/// Rotate with wall-kick correction, rejecting the whole rotation if the
/// corrected piece still collides. No partial rotation is ever applied.
pub fn try_rotate(piece: &Piece, settled: &[Cell]) -> Piece {
    let rotated = kick(rotate(piece));
    if is_colliding(&rotated, settled) {
        piece.clone()
    } else {
        rotated
    }
}
