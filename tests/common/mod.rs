// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared test utilities: cube states and synthetic confidence matrices.

#![allow(dead_code)] // Not all test files use all helpers

use cube_match::geometry::cubie::{CORNER_COLORS, EDGE_COLORS};
use cube_match::geometry::{cubie_loc, face_color, group_of, is_center, Color, GroupKind};
use cube_match::geometry::{N_CORNERS, N_EDGES, N_FACELETS};
use cube_match::Confidences;

/// Score given to the true color of each facelet in synthetic priors.
pub const FULL_SCORE: i32 = 65535;

/// A cube state described piece-wise: which identity sits in each slot and
/// at which orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    pub corner_perm: [usize; N_CORNERS],
    pub corner_oris: [u8; N_CORNERS],
    pub edge_perm: [usize; N_EDGES],
    pub edge_oris: [u8; N_EDGES],
}

impl CubeState {
    /// The solved cube.
    pub fn solved() -> Self {
        Self {
            corner_perm: [0, 1, 2, 3, 4, 5, 6, 7],
            corner_oris: [0; N_CORNERS],
            edge_perm: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            edge_oris: [0; N_EDGES],
        }
    }

    /// Whether the state satisfies the group constraints of a solvable
    /// cube: matching permutation parities and zero orientation sums.
    pub fn is_solvable(&self) -> bool {
        let twist: u32 = self.corner_oris.iter().map(|&o| u32::from(o)).sum();
        let flip: u32 = self.edge_oris.iter().map(|&o| u32::from(o)).sum();
        twist % 3 == 0
            && flip % 2 == 0
            && permutation_parity(&self.corner_perm) == permutation_parity(&self.edge_perm)
    }

    /// The color shown at each facelet.
    pub fn facelet_colors(&self) -> [Color; N_FACELETS] {
        let mut colors = [Color::U; N_FACELETS];
        for (f, out) in colors.iter_mut().enumerate() {
            if is_center(f) {
                *out = face_color(f);
                continue;
            }
            let loc = cubie_loc(f).unwrap();
            *out = match group_of(f) {
                GroupKind::Corners => {
                    let id = self.corner_perm[loc.slot];
                    let ori = self.corner_oris[loc.slot] as usize;
                    CORNER_COLORS[id][(loc.pos + ori) % 3]
                }
                GroupKind::Edges => {
                    let id = self.edge_perm[loc.slot];
                    let ori = self.edge_oris[loc.slot] as usize;
                    EDGE_COLORS[id][(loc.pos + ori) % 2]
                }
            };
        }
        colors
    }

    /// The canonical 54-character face string of this state.
    pub fn face_string(&self) -> String {
        self.facelet_colors().iter().map(|c| c.to_char()).collect()
    }

    /// A confidence matrix giving full score to each facelet's true color
    /// and zero to everything else.
    pub fn perfect_confidences(&self) -> Confidences {
        let mut conf = [[0i32; 6]; N_FACELETS];
        for (row, color) in conf.iter_mut().zip(self.facelet_colors()) {
            row[color.as_usize()] = FULL_SCORE;
        }
        conf
    }
}

/// Parity of a permutation: 0 for even, 1 for odd.
pub fn permutation_parity(perm: &[usize]) -> u8 {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in (i + 1)..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}

/// Argsort-based permutation from arbitrary sort keys.
///
/// Stable, so duplicate keys still produce a valid permutation.
pub fn permutation_from_keys(keys: &[u32]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..keys.len()).collect();
    perm.sort_by_key(|&i| (keys[i], i));
    perm
}
