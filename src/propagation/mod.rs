// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint propagation for cube color matching.
//!
//! This module implements the fixed-point closure that turns sticker
//! observations into global deductions. A piece group accumulates
//! observations through [`CubieGroup::assign_color`]; `propagate` then
//! drives four constraint families to quiescence:
//!
//! - **Option consistency**: a slot's surviving (identity, orientation)
//!   options always reflect every observation funneled into it.
//! - **Color quotas**: each color appears on exactly four cubies per
//!   group; exhausted quotas prune the color everywhere else.
//! - **Identity exclusivity**: a committed identity is excluded from all
//!   other slots.
//! - **Parity**: orientations sum to zero mod `k`; corner and edge
//!   permutations share parity, placing the last two identities.
//!
//! Failure is reported as soon as any slot runs out of options; the
//! matching driver treats this as a signal to roll back and retry the
//! triggering facelet with its next-best color.
//!
//! [`CubieGroup::assign_color`]: crate::state::CubieGroup::assign_color

pub mod core;
pub mod errors;
mod parity;

pub use self::core::propagate;
pub use self::errors::PropagationFailure;
