// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, snapshot-copied for rollback).
//!
//! This module contains the mutable per-scan state:
//! - CubieOptions: surviving (identity, orientation) options per slot
//! - CubieGroup: a whole corner or edge constraint system
//!
//! All of it is flat `Copy` memory so the matching driver can snapshot a
//! group with one bulk copy and roll back with one pointer swap.

pub mod group;
pub mod options;

pub use group::CubieGroup;
pub use options::{CubieOption, CubieOptions};
