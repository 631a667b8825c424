// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The fixed-point propagation loop for one piece group.
//!
//! `propagate` runs full passes over the group's slots until a pass makes
//! no change. Each pass interleaves three kinds of pruning:
//!
//! 1. **Color quotas**: each color appears on exactly four cubies of a
//!    group. Whenever a slot's intersected colset gains a color, that
//!    color's quota drops; at zero, every slot not already known to carry
//!    the color loses all options containing it.
//! 2. **Orientation/identity commits**: a slot whose option set has
//!    collapsed to a single orientation or identity gets it committed;
//!    committed identities are broadcast as exclusions to all other slots.
//! 3. **Parity closures** (after each pass): the last open orientation is
//!    forced by the zero-sum rule, and the last two open identities are
//!    placed by permutation parity. See the `parity` module.
//!
//! One committed sticker can cascade through quotas, exclusions, and
//! parity into many further commitments. This cascade is what lets a
//! handful of confident facelets carry a noisy scan.

use crate::state::CubieGroup;

use super::errors::PropagationFailure;
use super::parity::{force_last_orientation, place_last_two_cubies};

/// Run the constraint closure to its fixed point.
///
/// Returns an error as soon as any slot runs out of options. On success
/// the group is stable: a second call with no intervening assignment
/// changes nothing.
pub fn propagate(group: &mut CubieGroup) -> Result<(), PropagationFailure> {
    let n = group.n_slots();

    let mut change = true;
    while change {
        change = false;

        for slot in 0..n {
            if group.opts[slot].in_error() {
                return Err(PropagationFailure::NoOptionsLeft { slot });
            }

            change |= sweep_color_quotas(group, slot);
            change |= group.commit_ori(slot);
            change |= group.commit_cubie(slot);
        }

        // Figure out the last orientation by the zero-sum rule. The commit
        // happens on the next pass so a contradiction is not overruled.
        if group.aoris == n - 1 {
            force_last_orientation(group);
            change = true;
        }

        // Place the last two identities by permutation parity.
        if group.par.is_some() && group.aperm == n - 2 {
            place_last_two_cubies(group);
            change = true;
        }
    }

    Ok(())
}

/// Fold a slot's newly determined colors into the group's quotas.
///
/// The slot's intersected colset only ever grows, so the difference
/// against the cached copy is exactly the set of colors newly known to
/// appear on this slot. Returns true if an exhausted quota pruned any
/// other slot.
fn sweep_color_quotas(group: &mut CubieGroup, slot: usize) -> bool {
    let n = group.n_slots();
    let mut change = false;

    let fresh = group.opts[slot].colset().difference(group.seen_colsets[slot]);
    group.seen_colsets[slot] = group.seen_colsets[slot].union(fresh);

    for col in fresh.iter() {
        group.colcounts[col.as_usize()] -= 1;
        if group.colcounts[col.as_usize()] == 0 {
            // All cubies of this color are accounted for; no other slot
            // may carry it. A slot whose own colset already contains the
            // color is one of the four accounted ones.
            for i in 0..n {
                if !group.opts[i].colset().contains(col) {
                    group.opts[i].exclude_color(col);
                    change = true;
                }
            }
        }
    }

    change
}
