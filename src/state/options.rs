// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-slot option sets over (identity, orientation) hypotheses.
//!
//! A slot's option set starts with all 24 (cubie, orientation) pairs of its
//! group and is narrowed by the reductions below as sticker observations
//! and propagated constraints arrive. The set is the sole source of truth
//! for what a slot may still hold; once it is empty the containing group is
//! in contradiction.
//!
//! # Memory layout
//!
//! Everything lives in fixed-size inline arrays so that a whole piece group
//! is flat, position-independent memory: the matching driver snapshots
//! groups by bulk copy before each speculative assignment and swaps the
//! copies back in on failure. No field of this module may introduce heap
//! indirection.

use crate::geometry::constants::{CORNER_ORIS, N_OPTIONS};
use crate::geometry::{Color, ColorSet, GroupKind};

/// One (identity, orientation) hypothesis for a slot.
///
/// `cols[j]` is the color shown at sticker position `j` under this
/// hypothesis: the canonical sticker list of `cubie` rotated by `ori`.
/// For edges only the first two entries are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieOption {
    /// Color at each sticker position (rotation applied).
    pub cols: [Color; CORNER_ORIS],
    /// Union of the colors above.
    pub colset: ColorSet,
    /// Orientation of this hypothesis.
    pub ori: u8,
    /// Identity of this hypothesis.
    pub cubie: u8,
}

impl CubieOption {
    const PLACEHOLDER: CubieOption = CubieOption {
        cols: [Color::U; CORNER_ORIS],
        colset: ColorSet::empty(),
        ori: 0,
        cubie: 0,
    };
}

/// The surviving (identity, orientation) options of one cubie slot.
///
/// The active options occupy the prefix `opts[0..rem]`; reductions compact
/// the prefix in place with a write-pointer sweep. Summary fields (colset
/// intersection, deduced orientation/identity, error flag) are recomputed
/// whenever a reduction actually removes options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubieOptions {
    opts: [CubieOption; N_OPTIONS],
    rem: usize,

    error: bool,
    colset: ColorSet,
    ori: Option<u8>,
    cubie: Option<u8>,
}

impl CubieOptions {
    /// Create the full option set for a slot of the given group.
    pub fn new(kind: GroupKind) -> Self {
        let k = kind.n_oris();
        let mut opts = [CubieOption::PLACEHOLDER; N_OPTIONS];

        let mut i = 0;
        for cubie in 0..kind.n_cubies() {
            for ori in 0..k {
                let mut cols = [Color::U; CORNER_ORIS];
                let mut colset = ColorSet::empty();
                for (j, col) in cols.iter_mut().enumerate().take(k) {
                    *col = kind.sticker_color(cubie, (j + ori) % k);
                    colset.insert(*col);
                }
                opts[i] = CubieOption {
                    cols,
                    colset,
                    ori: ori as u8,
                    cubie: cubie as u8,
                };
                i += 1;
            }
        }
        debug_assert_eq!(i, N_OPTIONS);

        Self {
            opts,
            rem: N_OPTIONS,
            error: false,
            colset: ColorSet::empty(),
            ori: None,
            cubie: None,
        }
    }

    /// Whether the slot has run out of options (contradiction).
    pub fn in_error(&self) -> bool {
        self.error
    }

    /// Intersection of the colsets of all active options.
    ///
    /// A color in this set is known to appear on the slot no matter which
    /// option survives.
    pub fn colset(&self) -> ColorSet {
        self.colset
    }

    /// The slot's orientation, once all active options agree on it.
    pub fn ori(&self) -> Option<u8> {
        self.ori
    }

    /// The slot's identity, once all active options agree on it.
    pub fn cubie(&self) -> Option<u8> {
        self.cubie
    }

    /// Number of active options.
    pub fn rem(&self) -> usize {
        self.rem
    }

    /// The active options, for inspection.
    pub fn active(&self) -> &[CubieOption] {
        &self.opts[..self.rem]
    }

    /// Keep options showing `col` at sticker position `pos`.
    ///
    /// This is the funnel for sticker observations.
    pub fn retain_color_at(&mut self, pos: usize, col: Color) {
        self.reduce(|o| o.cols[pos] == col);
    }

    /// Keep options whose color set does not contain `col`.
    ///
    /// Fired when a color's group quota is exhausted elsewhere.
    pub fn exclude_color(&mut self, col: Color) {
        self.reduce(|o| !o.colset.contains(col));
    }

    /// Keep options with orientation `ori`.
    pub fn retain_ori(&mut self, ori: u8) {
        self.reduce(|o| o.ori == ori);
    }

    /// Keep options with identity `cubie`.
    pub fn retain_cubie(&mut self, cubie: u8) {
        self.reduce(|o| o.cubie == cubie);
    }

    /// Keep options whose identity differs from `cubie`.
    ///
    /// Broadcast to all other slots when an identity is committed.
    pub fn exclude_cubie(&mut self, cubie: u8) {
        self.reduce(|o| o.cubie != cubie);
    }

    /// In-place stable compaction of the active prefix.
    ///
    /// Summary fields are only recomputed when options were actually
    /// removed, so re-applying a reduction is a cheap no-op.
    fn reduce(&mut self, keep: impl Fn(&CubieOption) -> bool) {
        let mut rem1 = 0;
        for i in 0..self.rem {
            if keep(&self.opts[i]) {
                self.opts[rem1] = self.opts[i];
                rem1 += 1;
            }
        }
        if rem1 != self.rem {
            self.rem = rem1;
            self.update();
        }
    }

    /// Recompute summary fields after a shrinking reduction.
    fn update(&mut self) {
        if self.rem == 0 {
            self.error = true;
            return;
        }

        let mut colset = self.opts[0].colset;
        for o in &self.opts[1..self.rem] {
            colset = colset.intersection(o.colset);
        }
        self.colset = colset;

        if self.ori.is_none() {
            let first = self.opts[0].ori;
            if self.opts[1..self.rem].iter().all(|o| o.ori == first) {
                self.ori = Some(first);
            }
        }

        if self.cubie.is_none() {
            let first = self.opts[0].cubie;
            if self.opts[1..self.rem].iter().all(|o| o.cubie == first) {
                self.cubie = Some(first);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::{N_CORNERS, N_EDGES};
    use crate::geometry::cubie::{corner, edge};

    #[test]
    fn test_new_has_all_options() {
        let corners = CubieOptions::new(GroupKind::Corners);
        assert_eq!(corners.rem(), N_CORNERS * 3);
        assert!(!corners.in_error());
        assert!(corners.ori().is_none());
        assert!(corners.cubie().is_none());
        // With all options active, no color is common to every option.
        assert!(corners.colset().is_empty());

        let edges = CubieOptions::new(GroupKind::Edges);
        assert_eq!(edges.rem(), N_EDGES * 2);
    }

    #[test]
    fn test_option_rotation_convention() {
        let opts = CubieOptions::new(GroupKind::Corners);
        // Find the URF, ori=1 option: canonical (U, R, F) rotated by one
        // gives (R, F, U).
        let o = opts
            .active()
            .iter()
            .find(|o| o.cubie == corner::URF as u8 && o.ori == 1)
            .unwrap();
        assert_eq!(o.cols[0], Color::R);
        assert_eq!(o.cols[1], Color::F);
        assert_eq!(o.cols[2], Color::U);
    }

    #[test]
    fn test_retain_color_at() {
        let mut opts = CubieOptions::new(GroupKind::Corners);
        opts.retain_color_at(0, Color::U);
        // Four U-corners × the one rotation showing U at position 0.
        assert_eq!(opts.rem(), 4);
        assert!(opts.colset().contains(Color::U));
        // U sits at canonical position 0 of every U-corner, so all
        // survivors share orientation 0 and it is deduced immediately.
        assert_eq!(opts.ori(), Some(0));
        assert!(opts.cubie().is_none());
        for o in opts.active() {
            assert_eq!(o.cols[0], Color::U);
        }
    }

    #[test]
    fn test_two_stickers_pin_a_corner() {
        let mut opts = CubieOptions::new(GroupKind::Corners);
        opts.retain_color_at(0, Color::U);
        opts.retain_color_at(1, Color::R);
        assert_eq!(opts.rem(), 1);
        assert_eq!(opts.cubie(), Some(corner::URF as u8));
        assert_eq!(opts.ori(), Some(0));
        assert!(!opts.in_error());
    }

    #[test]
    fn test_contradiction_sets_error() {
        let mut opts = CubieOptions::new(GroupKind::Edges);
        opts.retain_color_at(0, Color::U);
        opts.retain_color_at(1, Color::D);
        // No edge piece carries both U and D.
        assert_eq!(opts.rem(), 0);
        assert!(opts.in_error());
    }

    #[test]
    fn test_exclude_color() {
        let mut opts = CubieOptions::new(GroupKind::Edges);
        opts.exclude_color(Color::U);
        // Four U-edges × 2 orientations removed.
        assert_eq!(opts.rem(), (N_EDGES - 4) * 2);
        for o in opts.active() {
            assert!(!o.colset.contains(Color::U));
        }
    }

    #[test]
    fn test_retain_ori() {
        let mut opts = CubieOptions::new(GroupKind::Edges);
        opts.retain_ori(1);
        assert_eq!(opts.rem(), N_EDGES);
        assert_eq!(opts.ori(), Some(1));
        assert!(opts.cubie().is_none());
    }

    #[test]
    fn test_retain_and_exclude_cubie() {
        let mut opts = CubieOptions::new(GroupKind::Edges);
        opts.exclude_cubie(edge::UR as u8);
        assert_eq!(opts.rem(), (N_EDGES - 1) * 2);

        opts.retain_cubie(edge::UF as u8);
        assert_eq!(opts.rem(), 2);
        assert_eq!(opts.cubie(), Some(edge::UF as u8));
        assert!(opts.ori().is_none());
    }

    #[test]
    fn test_reductions_are_idempotent() {
        let mut opts = CubieOptions::new(GroupKind::Corners);
        opts.retain_color_at(0, Color::U);
        let snapshot = opts;

        opts.retain_color_at(0, Color::U);
        assert_eq!(opts, snapshot);

        opts.exclude_color(Color::D);
        let snapshot = opts;
        opts.exclude_color(Color::D);
        assert_eq!(opts, snapshot);
    }

    #[test]
    fn test_colset_is_intersection_of_active_options() {
        let mut opts = CubieOptions::new(GroupKind::Corners);
        opts.retain_color_at(0, Color::U);

        let mut expected = ColorSet::full();
        for o in opts.active() {
            expected = expected.intersection(o.colset);
        }
        assert_eq!(opts.colset(), expected);
    }
}
