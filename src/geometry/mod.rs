// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the 3×3×3 cube.
//!
//! This module contains the fixed, identity-independent geometry:
//! - Color: sticker colors named after faces (U, R, F, D, L, B)
//! - ColorSet: six-bit set of colors
//! - Cubie slots and canonical sticker colorings
//! - Facelet indexing and the facelet → cubie lookup tables

pub mod color;
pub mod color_set;
pub mod constants;
pub mod cubie;
pub mod facelet;

// Re-export for convenience
pub use color::Color;
pub use color_set::ColorSet;
pub use constants::{N_COLORS, N_CORNERS, N_EDGES, N_FACELETS};
pub use cubie::GroupKind;
pub use facelet::{cubie_loc, face_color, group_of, is_center, CubieLoc, FaceletId};
