// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Facelet indexing and the facelet → cubie lookup tables.
//!
//! Facelets are numbered 0..54, six 3×3 faces in the fixed order
//! U, R, F, D, L, B, row-major within each face. The center of face `k` is
//! facelet `9k + 4` and carries color `k` by definition.
//!
//! The lookup tables here map every non-center facelet to the cubie slot it
//! sits on and to its position within that cubie's sticker list. The map is
//! purely geometric: slot means physical position on the cube, independent
//! of which piece currently lives there.

use crate::geometry::constants::{FACE_SIZE, N_FACELETS};
use crate::geometry::cubie::GroupKind;
use crate::geometry::Color;

/// Index of a facelet (0..54).
pub type FaceletId = usize;

/// Location of a facelet on its cubie: which slot, and which sticker
/// position within the slot's canonical sticker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieLoc {
    /// Slot index within the facelet's group.
    pub slot: usize,
    /// Sticker position within the slot (0..n_oris).
    pub pos: usize,
}

// Corner and edge slots interleave on each face, so one table covers both
// groups; the group is recovered from the facelet offset parity. Centers
// hold -1.
#[rustfmt::skip]
const SLOT_OF_FACELET: [i8; N_FACELETS] = {
    use crate::geometry::cubie::corner::{DBL, DFR, DLF, DRB, UBR, UFL, ULB, URF};
    use crate::geometry::cubie::edge::{BL, BR, DB, DF, DL, DR, FL, FR, UB, UF, UL, UR};
    const fn c(slot: usize) -> i8 {
        slot as i8
    }
    [
        // U
        c(ULB), c(UB), c(UBR), c(UL), -1, c(UR), c(UFL), c(UF), c(URF),
        // R
        c(URF), c(UR), c(UBR), c(FR), -1, c(BR), c(DFR), c(DR), c(DRB),
        // F
        c(UFL), c(UF), c(URF), c(FL), -1, c(FR), c(DLF), c(DF), c(DFR),
        // D
        c(DLF), c(DF), c(DFR), c(DL), -1, c(DR), c(DBL), c(DB), c(DRB),
        // L
        c(ULB), c(UL), c(UFL), c(BL), -1, c(FL), c(DBL), c(DL), c(DLF),
        // B
        c(UBR), c(UB), c(ULB), c(BR), -1, c(BL), c(DRB), c(DB), c(DBL),
    ]
};

// Position of each facelet within its cubie's sticker list.
#[rustfmt::skip]
const POS_OF_FACELET: [i8; N_FACELETS] = [
    // U
    0, 0, 0, 0, -1, 0, 0, 0, 0,
    // R
    1, 1, 2, 1, -1, 1, 2, 1, 1,
    // F
    1, 1, 2, 0, -1, 0, 2, 1, 1,
    // D
    0, 0, 0, 0, -1, 0, 0, 0, 0,
    // L
    1, 1, 2, 1, -1, 1, 2, 1, 1,
    // B
    1, 1, 2, 0, -1, 0, 2, 1, 1,
];

/// Whether a facelet is a face center.
pub fn is_center(f: FaceletId) -> bool {
    f % FACE_SIZE == 4
}

/// The color of the face a facelet belongs to.
///
/// For a center facelet this is its fixed color.
pub fn face_color(f: FaceletId) -> Color {
    Color::new((f / FACE_SIZE) as u8)
}

/// Which piece group a non-center facelet's cubie belongs to.
///
/// Within a face, edge stickers sit at odd offsets and corner stickers at
/// even non-center offsets.
pub fn group_of(f: FaceletId) -> GroupKind {
    if (f % FACE_SIZE) % 2 == 1 {
        GroupKind::Edges
    } else {
        GroupKind::Corners
    }
}

/// Look up the cubie slot and sticker position of a facelet.
///
/// Returns `None` for center facelets, which belong to no cubie.
pub fn cubie_loc(f: FaceletId) -> Option<CubieLoc> {
    let slot = SLOT_OF_FACELET[f];
    if slot < 0 {
        return None;
    }
    Some(CubieLoc {
        slot: slot as usize,
        pos: POS_OF_FACELET[f] as usize,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::{CORNER_ORIS, EDGE_ORIS, N_CORNERS, N_EDGES};
    use crate::geometry::cubie::{corner, edge};

    #[test]
    fn test_centers_have_no_cubie() {
        for f in 0..N_FACELETS {
            assert_eq!(cubie_loc(f).is_none(), is_center(f), "facelet {}", f);
        }
    }

    #[test]
    fn test_center_colors() {
        assert_eq!(face_color(4), Color::U);
        assert_eq!(face_color(13), Color::R);
        assert_eq!(face_color(22), Color::F);
        assert_eq!(face_color(31), Color::D);
        assert_eq!(face_color(40), Color::L);
        assert_eq!(face_color(49), Color::B);
    }

    #[test]
    fn test_every_sticker_position_covered_once() {
        // Each corner slot must be hit at positions 0, 1, 2 exactly once;
        // each edge slot at positions 0, 1 exactly once.
        let mut corner_seen = [[0u8; CORNER_ORIS]; N_CORNERS];
        let mut edge_seen = [[0u8; EDGE_ORIS]; N_EDGES];

        for f in 0..N_FACELETS {
            let Some(loc) = cubie_loc(f) else { continue };
            match group_of(f) {
                GroupKind::Corners => corner_seen[loc.slot][loc.pos] += 1,
                GroupKind::Edges => edge_seen[loc.slot][loc.pos] += 1,
            }
        }

        assert_eq!(corner_seen, [[1; CORNER_ORIS]; N_CORNERS]);
        assert_eq!(edge_seen, [[1; EDGE_ORIS]; N_EDGES]);
    }

    #[test]
    fn test_known_locations() {
        // Facelet 0 is the U-face sticker of the ULB corner.
        assert_eq!(
            cubie_loc(0),
            Some(CubieLoc {
                slot: corner::ULB,
                pos: 0
            })
        );
        // Facelet 8 is the U-face sticker of URF.
        assert_eq!(
            cubie_loc(8),
            Some(CubieLoc {
                slot: corner::URF,
                pos: 0
            })
        );
        // Facelet 12 is the R-face sticker of the FR edge.
        assert_eq!(
            cubie_loc(12),
            Some(CubieLoc {
                slot: edge::FR,
                pos: 1
            })
        );
        // Facelet 47 is the B-face sticker of ULB.
        assert_eq!(
            cubie_loc(47),
            Some(CubieLoc {
                slot: corner::ULB,
                pos: 2
            })
        );
    }

    #[test]
    fn test_group_parity_rule() {
        assert_eq!(group_of(0), GroupKind::Corners);
        assert_eq!(group_of(1), GroupKind::Edges);
        assert_eq!(group_of(5), GroupKind::Edges);
        assert_eq!(group_of(8), GroupKind::Corners);
    }
}
