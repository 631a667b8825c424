// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cubie slots and their canonical sticker colorings.
//!
//! A *slot* is a physical position on the cube that holds a corner or edge
//! piece; the *identity* of the piece living there varies across cube
//! states. Slots and identities share one index space per group, given by
//! the canonical orders below.
//!
//! The canonical sticker lists give, for each identity, its colors in
//! rotation order. A piece at orientation `o` shows the canonical list
//! rotated by `o` positions: the sticker at position `j` has color
//! `colors[(j + o) % k]`.

use crate::geometry::constants::{CORNER_ORIS, EDGE_ORIS, N_CORNERS, N_EDGES};
use crate::geometry::Color;

/// Corner slot indices in canonical order.
pub mod corner {
    pub const URF: usize = 0;
    pub const UFL: usize = 1;
    pub const ULB: usize = 2;
    pub const UBR: usize = 3;
    pub const DFR: usize = 4;
    pub const DLF: usize = 5;
    pub const DBL: usize = 6;
    pub const DRB: usize = 7;
}

/// Edge slot indices in canonical order.
pub mod edge {
    pub const UR: usize = 0;
    pub const UF: usize = 1;
    pub const UL: usize = 2;
    pub const UB: usize = 3;
    pub const DR: usize = 4;
    pub const DF: usize = 5;
    pub const DL: usize = 6;
    pub const DB: usize = 7;
    pub const FR: usize = 8;
    pub const FL: usize = 9;
    pub const BL: usize = 10;
    pub const BR: usize = 11;
}

/// Canonical sticker triples of the eight corner pieces.
///
/// Indexed by corner identity; colors listed in rotation order.
pub const CORNER_COLORS: [[Color; CORNER_ORIS]; N_CORNERS] = [
    [Color::U, Color::R, Color::F], // URF
    [Color::U, Color::F, Color::L], // UFL
    [Color::U, Color::L, Color::B], // ULB
    [Color::U, Color::B, Color::R], // UBR
    [Color::D, Color::F, Color::R], // DFR
    [Color::D, Color::L, Color::F], // DLF
    [Color::D, Color::B, Color::L], // DBL
    [Color::D, Color::R, Color::B], // DRB
];

/// Canonical sticker pairs of the twelve edge pieces.
pub const EDGE_COLORS: [[Color; EDGE_ORIS]; N_EDGES] = [
    [Color::U, Color::R], // UR
    [Color::U, Color::F], // UF
    [Color::U, Color::L], // UL
    [Color::U, Color::B], // UB
    [Color::D, Color::R], // DR
    [Color::D, Color::F], // DF
    [Color::D, Color::L], // DL
    [Color::D, Color::B], // DB
    [Color::F, Color::R], // FR
    [Color::F, Color::L], // FL
    [Color::B, Color::L], // BL
    [Color::B, Color::R], // BR
];

/// Which of the two piece groups a slot belongs to.
///
/// The two groups are independent constraint systems over the same six
/// colors; all sizing questions (slot count, orientation count, sticker
/// colors) are answered through this enum so the state structures can stay
/// group-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// The eight corner slots (three stickers, orientation mod 3).
    Corners,
    /// The twelve edge slots (two stickers, orientation mod 2).
    Edges,
}

impl GroupKind {
    /// Number of slots (and identities) in this group.
    pub const fn n_cubies(self) -> usize {
        match self {
            GroupKind::Corners => N_CORNERS,
            GroupKind::Edges => N_EDGES,
        }
    }

    /// Number of orientations of a piece in this group.
    pub const fn n_oris(self) -> usize {
        match self {
            GroupKind::Corners => CORNER_ORIS,
            GroupKind::Edges => EDGE_ORIS,
        }
    }

    /// Canonical sticker color of identity `cubie` at rotation index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `cubie` or `idx` is out of range for the group.
    pub fn sticker_color(self, cubie: usize, idx: usize) -> Color {
        match self {
            GroupKind::Corners => CORNER_COLORS[cubie][idx],
            GroupKind::Edges => EDGE_COLORS[cubie][idx],
        }
    }
}
