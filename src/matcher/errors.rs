// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type for the matching driver.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// A scan could not be matched to any consistent cube coloring.
///
/// Both variants mean the same thing to a caller: the frame was too noisy
/// and should be re-captured. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum MatchError {
    /// A facelet contradicted the constraints under all six colors.
    CandidatesExhausted { facelet: usize },

    /// A facelet consumed its whole retry budget.
    ///
    /// The budget keeps pathological frames from forcing long chains of
    /// speculative assignments before failing.
    AttemptsExhausted { facelet: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::CandidatesExhausted { facelet } => {
                write!(f, "Facelet {} failed under all six colors", facelet)
            }
            MatchError::AttemptsExhausted { facelet } => {
                write!(f, "Facelet {} exhausted its retry budget", facelet)
            }
        }
    }
}

impl std::error::Error for MatchError {}
