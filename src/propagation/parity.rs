// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parity closure rules.
//!
//! Two global facts about a solvable cube close the remaining degrees of
//! freedom once a group is nearly determined:
//!
//! - Orientations sum to zero mod `k` (3 for corners, 2 for edges), so the
//!   last open orientation is forced.
//! - The permutation parities of corners and edges agree, so with the
//!   parity known the last two open identities have only one legal
//!   placement.
//!
//! Both rules narrow option sets only; the actual commits happen on the
//! next propagation pass, so a rule that contradicts the observations
//! surfaces as an emptied option set rather than a silent overrule.

use crate::state::CubieGroup;

/// Force the one undetermined orientation from the zero-sum rule.
///
/// Caller guarantees exactly one slot has no committed orientation.
pub(super) fn force_last_orientation(group: &mut CubieGroup) {
    let n = group.n_slots();
    let k = group.kind.n_oris() as u32;
    let last = ((k - group.orisum % k) % k) as u8;

    for slot in 0..n {
        if group.oris[slot].is_none() {
            group.opts[slot].retain_ori(last);
            break;
        }
    }
}

/// Place the two remaining identities so the permutation matches `par`.
///
/// Caller guarantees `group.par` is known and exactly two slots have no
/// committed identity. Of the two possible pairings of open slots to
/// missing identities, exactly one yields the required parity; the other
/// is a transposition away and therefore of opposite parity.
pub(super) fn place_last_two_cubies(group: &mut CubieGroup) {
    let n = group.n_slots();
    let Some(par) = group.par else { return };

    // The two open slots, in order.
    let mut open = (0..n).filter(|&i| group.perm[i].is_none());
    let (Some(i1), Some(i2)) = (open.next(), open.next()) else {
        return;
    };

    // The two missing identities, in order.
    let mut contained = [false; crate::geometry::constants::MAX_SLOTS];
    for c in group.perm.iter().take(n).flatten() {
        contained[*c as usize] = true;
    }
    let mut missing = (0..n).filter(|&c| !contained[c]).map(|c| c as u8);
    let (Some(c1), Some(c2)) = (missing.next(), missing.next()) else {
        return;
    };

    // Inversions the straight pairing (i1 -> c1, i2 -> c2) would add
    // against the committed slots.
    let mut added = 0u32;
    for i in 0..n {
        let Some(c) = group.perm[i] else { continue };
        if i < i1 && c > c1 {
            added += 1;
        }
        if i > i1 && c < c1 {
            added += 1;
        }
        if i < i2 && c > c2 {
            added += 1;
        }
        if i > i2 && c < c2 {
            added += 1;
        }
    }

    let straight = (((group.invcnt + added) & 1) as u8) == par;
    let (a1, a2) = if straight { (c1, c2) } else { (c2, c1) };

    group.opts[i1].retain_cubie(a1);
    group.opts[i2].retain_cubie(a2);
}
