// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The candidate loop: heap, speculative commits, and rollback.
//!
//! Candidates are (score, facelet, color) triples ordered by prior
//! confidence; the loop always commits the most confident unresolved
//! facelet next. Each commit is speculative: the affected group is
//! snapshotted by bulk copy first, and a failed propagation swaps the
//! snapshot back in: an O(1) pointer swap, however deep the propagation
//! went.
//!
//! The heap never re-scores: the prior is the only evidence there is, and
//! propagation acts as a consistency filter on top of it.

use crate::geometry::{
    cubie_loc, face_color, group_of, is_center, Color, CubieLoc, GroupKind, N_COLORS, N_FACELETS,
};
use crate::propagation::propagate;
use crate::state::CubieGroup;
use std::collections::BinaryHeap;
use std::mem;

use super::errors::MatchError;

/// Per-facelet confidence scores, one row per facelet in color order.
pub type Confidences = [[i32; N_COLORS]; N_FACELETS];

/// Sentinel overwriting a score once its candidate has been tried.
///
/// Table scores are non-negative (u16 on disk), so the sentinel doubles as
/// the "no candidates left" signal of [`best_color`]. A caller of the
/// score-level entry point may also pass it directly to mark a color as
/// not a candidate for a facelet.
const TRIED: i32 = -1;

/// One prioritized color hypothesis for a facelet.
///
/// The derived ordering compares score first, then facelet and color as
/// deterministic tiebreaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    score: i32,
    facelet: usize,
    color: u8,
}

/// First color with the maximum score in a facelet's row.
fn best_color(scores: &[i32; N_COLORS]) -> (i32, u8) {
    let mut best = 0usize;
    for col in 1..N_COLORS {
        if scores[col] > scores[best] {
            best = col;
        }
    }
    (scores[best], best as u8)
}

/// Speculatively commit one candidate color.
///
/// Snapshots the active group, funnels the observation in, and
/// propagates. On success, a freshly derived parity is bridged into the
/// passive group (which is snapshotted too before its own propagation).
/// Any failure swaps every snapshotted group back to its backup and
/// reports false.
fn try_candidate(
    active: &mut Box<CubieGroup>,
    active_backup: &mut Box<CubieGroup>,
    passive: &mut Box<CubieGroup>,
    passive_backup: &mut Box<CubieGroup>,
    loc: CubieLoc,
    col: Color,
) -> bool {
    **active_backup = **active;
    active.assign_color(loc.slot, loc.pos, col);
    if propagate(active).is_err() {
        mem::swap(active, active_backup);
        return false;
    }

    if let Some(par) = active.par() {
        if passive.par().is_none() {
            **passive_backup = **passive;
            passive.assign_parity(par);
            if propagate(passive).is_err() {
                mem::swap(active, active_backup);
                mem::swap(passive, passive_backup);
                return false;
            }
        }
    }

    true
}

/// Run the matching loop over a confidence matrix.
///
/// `conf` is consumed: tried scores are overwritten with a sentinel as the
/// loop walks each facelet's candidates in descending order.
pub(super) fn run(mut conf: Confidences, n_attempts: u32) -> Result<String, MatchError> {
    let mut result = [Color::U; N_FACELETS];

    let mut heap = BinaryHeap::with_capacity(N_FACELETS);
    for (f, row) in conf.iter_mut().enumerate() {
        if is_center(f) {
            result[f] = face_color(f);
            continue;
        }
        let (score, color) = best_color(row);
        heap.push(Candidate {
            score,
            facelet: f,
            color,
        });
        row[color as usize] = TRIED;
    }

    let mut attempts = [n_attempts as i32; N_FACELETS];

    let mut corners = Box::new(CubieGroup::new(GroupKind::Corners));
    let mut edges = Box::new(CubieGroup::new(GroupKind::Edges));
    // Backups are overwritten before every use; cloning just gives them a
    // valid initial value.
    let mut corners_backup = corners.clone();
    let mut edges_backup = edges.clone();

    while let Some(Candidate { facelet, color, .. }) = heap.pop() {
        let loc = cubie_loc(facelet).expect("center facelets never enter the heap");
        let col = Color::new(color);

        let succ = match group_of(facelet) {
            GroupKind::Edges => try_candidate(
                &mut edges,
                &mut edges_backup,
                &mut corners,
                &mut corners_backup,
                loc,
                col,
            ),
            GroupKind::Corners => try_candidate(
                &mut corners,
                &mut corners_backup,
                &mut edges,
                &mut edges_backup,
                loc,
                col,
            ),
        };

        if succ {
            result[facelet] = col;
            continue;
        }

        // The failure is attributed to this facelet even when the parity
        // bridge tripped in the other group.
        let (score, next) = best_color(&conf[facelet]);
        if score == TRIED {
            return Err(MatchError::CandidatesExhausted { facelet });
        }
        heap.push(Candidate {
            score,
            facelet,
            color: next,
        });
        conf[facelet][next as usize] = TRIED;

        attempts[facelet] -= 1;
        if attempts[facelet] < 0 {
            return Err(MatchError::AttemptsExhausted { facelet });
        }
    }

    Ok(result.iter().map(|c| c.to_char()).collect())
}
