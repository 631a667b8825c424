// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The matching driver: from per-facelet evidence to a face string.
//!
//! Matching fuses two sources of information:
//!
//! - the **prior**: per-facelet confidence scores over the six colors,
//!   looked up in the [`ScanTable`];
//! - the **constraints**: everything the [`propagation`] module knows
//!   about solvable cubes.
//!
//! Candidates are committed most-confident-first. A candidate that
//! contradicts the constraints is rolled back and the facelet retries its
//! next-best color, up to a per-facelet budget. Centers are fixed by
//! definition and never enter the loop.
//!
//! On success the result is a 54-character string over `U,R,F,D,L,B`,
//! face-major and row-major, with each color appearing exactly nine
//! times, orientation sums zero, and corner and edge permutation parities
//! equal.
//! Failure ([`MatchError`]) means the frame should be re-captured; there
//! are no partial results.
//!
//! [`ScanTable`]: crate::memo::ScanTable
//! [`propagation`]: crate::propagation

pub mod driver;
pub mod errors;

pub use driver::Confidences;
pub use errors::MatchError;

use crate::geometry::N_FACELETS;
use crate::memo::ScanTable;

/// Default per-facelet retry budget.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Match a scanned frame of BGR samples against the cube constraints.
///
/// `bgrs` holds one averaged BGR triple per facelet, in facelet order.
/// `n_attempts` bounds how many colors are tried per facelet before the
/// scan is abandoned; [`DEFAULT_ATTEMPTS`] is tuned for the domain.
///
/// # Errors
///
/// Returns a [`MatchError`] when no consistent coloring is found; the
/// caller is expected to re-capture the frame and try again.
pub fn match_colors(
    table: &ScanTable,
    bgrs: &[[u8; 3]; N_FACELETS],
    n_attempts: u32,
) -> Result<String, MatchError> {
    let mut conf = [[0i32; crate::geometry::N_COLORS]; N_FACELETS];
    for (row, bgr) in conf.iter_mut().zip(bgrs) {
        for (dst, &score) in row.iter_mut().zip(table.scores(*bgr)) {
            *dst = i32::from(score);
        }
    }
    match_confidences(conf, n_attempts)
}

/// Match a precomputed confidence matrix against the cube constraints.
///
/// This is the driver core behind [`match_colors`]; it is public so that
/// embedders with their own classifier can skip the table, and so the
/// driver is exercisable without 192 MiB of prior.
///
/// Scores are non-negative, except that a score of exactly −1 marks a
/// color as not a candidate for its facelet (the driver uses the same
/// sentinel internally for already-tried candidates). A facelet whose
/// candidates are all consumed fails the scan, so every facelet needs at
/// least one candidate color.
pub fn match_confidences(conf: Confidences, n_attempts: u32) -> Result<String, MatchError> {
    driver::run(conf, n_attempts)
}
