//! Piece factory tests: the colour <-> shape bijection and selector
//! reduction, checked from outside the crate.

use gridfall::core::{pieces, rng};
use gridfall::types::{Colour, SPAWN_X, SPAWN_Y};

#[test]
fn test_colour_shape_bijection() {
    // Each selector 0..7 maps to exactly one colour, in order.
    let expected = [
        Colour::Yellow,
        Colour::Blue,
        Colour::Orange,
        Colour::Red,
        Colour::Green,
        Colour::Purple,
        Colour::Cyan,
    ];
    for (index, colour) in expected.iter().enumerate() {
        let piece = pieces::tetromino(index as u32, 4, 4, "t");
        assert!(piece.iter().all(|c| c.colour == *colour));
    }
}

#[test]
fn test_selector_wraps_modulo_seven() {
    for offset in [0u32, 7, 70, 700_007] {
        let a = pieces::tetromino(3, 4, 4, "t");
        let b = pieces::tetromino(3 + offset, 4, 4, "t");
        assert_eq!(
            a.iter().map(|c| c.colour).collect::<Vec<_>>(),
            b.iter().map(|c| c.colour).collect::<Vec<_>>()
        );
    }
    assert_eq!(rng::scale(700_010), 3);
}

#[test]
fn test_spawn_anchor_keeps_pieces_above_visible_grid() {
    for index in 0..7u32 {
        let piece = pieces::tetromino(index, SPAWN_X, SPAWN_Y, "t");
        assert!(piece.iter().all(|c| c.y < 0), "shape {} spawns visible", index);
        assert!(piece.iter().all(|c| c.x >= 0 && c.x < 10));
    }
}

#[test]
fn test_same_colour_same_footprint_anywhere() {
    // The factory is position-independent: footprints translate rigidly.
    for index in 0..7u32 {
        let at_origin = pieces::tetromino(index, 0, 0, "t");
        let offset = pieces::tetromino(index, 3, 5, "t");
        for (a, b) in at_origin.iter().zip(offset.iter()) {
            assert_eq!(a.x + 3, b.x);
            assert_eq!(a.y + 5, b.y);
            assert_eq!(a.colour, b.colour);
        }
    }
}

#[test]
fn test_identity_tags_do_not_affect_geometry() {
    let a = pieces::from_colour(Colour::Red, 4, 4, "alpha");
    let b = pieces::from_colour(Colour::Red, 4, 4, "beta");
    for (ca, cb) in a.iter().zip(b.iter()) {
        assert_eq!((ca.x, ca.y), (cb.x, cb.y));
        assert_ne!(ca.id, cb.id);
    }
}
