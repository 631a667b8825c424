// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for cube geometry.
//!
//! This module defines the facelet and cubie counts of the 3×3×3 cube and
//! the derived sizes used by the option sets and piece groups.

/// Number of sticker colors, one per face: U, R, F, D, L, B.
pub const N_COLORS: usize = 6;

/// Facelets per face (3×3 grid).
pub const FACE_SIZE: usize = 9;

/// Total number of facelets (6 faces × 9 facelets).
pub const N_FACELETS: usize = N_COLORS * FACE_SIZE;

/// Number of corner cubies.
pub const N_CORNERS: usize = 8;

/// Number of edge cubies.
pub const N_EDGES: usize = 12;

/// Orientations (twists) of a corner cubie.
pub const CORNER_ORIS: usize = 3;

/// Orientations (flips) of an edge cubie.
pub const EDGE_ORIS: usize = 2;

/// Options per slot: every (cubie, orientation) pair valid for a group.
///
/// Both groups happen to produce the same count (8×3 = 12×2 = 24), which
/// lets corner and edge slots share one fixed-capacity option array.
pub const N_OPTIONS: usize = N_CORNERS * CORNER_ORIS;

/// Slot capacity of a piece group (the edge group is the larger one).
pub const MAX_SLOTS: usize = N_EDGES;

/// Stickers of each color contributed by one group.
///
/// Every color appears on exactly four corner cubies and four edge cubies,
/// so each group starts with a per-color quota of 4.
pub const COLOR_QUOTA: i32 = 4;

/// Compile-time assertion that the two groups share an option count.
///
/// The shared fixed-capacity arrays in the state structures depend on this.
const _: () = assert!(
    N_CORNERS * CORNER_ORIS == N_EDGES * EDGE_ORIS,
    "corner and edge groups must have equal option counts"
);

/// Compile-time assertion on the facelet count.
const _: () = assert!(N_FACELETS == 54, "a 3x3x3 cube has 54 facelets");
