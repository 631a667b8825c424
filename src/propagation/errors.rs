// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for constraint propagation.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Errors that can occur during constraint propagation.
///
/// A propagation failure is not fatal: the matching driver rolls the
/// affected groups back to their snapshots and retries the triggering
/// facelet with its next-best color.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum PropagationFailure {
    /// A slot's option set is empty: no (identity, orientation) pair is
    /// consistent with the observations and constraints applied so far.
    NoOptionsLeft { slot: usize },
}

impl fmt::Display for PropagationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagationFailure::NoOptionsLeft { slot } => {
                write!(f, "Slot {} has no remaining options", slot)
            }
        }
    }
}

impl std::error::Error for PropagationFailure {}
