// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint-propagation color matching for 3×3×3 cube scans.
//!
//! Given one averaged BGR sample per facelet, this crate identifies the
//! cube's 54 sticker colors and emits the canonical face string. Colors
//! are assigned in order of classifier confidence while the full
//! combinatorial constraints of a solvable cube prune the alternatives;
//! together with reliable confidence scores this handles strong
//! reflections and uneven lighting that defeat per-facelet
//! classification.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes during matching:
//! - The scan table: a dense BGR → confidence lookup (192 MiB), trained
//!   externally and loaded once per process
//! - Facelet → cubie geometry tables and canonical sticker colorings
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Per-scan state, designed as flat `Copy` memory for cheap speculation:
//! - CubieGroup: one constraint system per piece group (corners, edges),
//!   holding per-slot option sets, color quotas, and parity bookkeeping
//! - A backup instance per group; commits snapshot by bulk copy and roll
//!   back by pointer swap
//!
//! # Matching algorithm
//!
//! 1. Look up each facelet's six confidence scores in the scan table.
//! 2. Keep the best unresolved (facelet, color) candidate in a max-heap.
//! 3. Tentatively commit the popped candidate to its group and run
//!    constraint propagation (color quotas, identity exclusivity,
//!    orientation and permutation parity) to a fixed point.
//! 4. On contradiction, roll back and retry the facelet's next-best
//!    color, bounded by a per-facelet budget.
//! 5. Once one group derives the permutation parity, bridge it into the
//!    other group (corners and edges of a solvable cube share it).
//!
//! A single confident facelet often forces several others, which is what
//! lets the matcher recover from low-quality color classification.
//!
//! # Example
//!
//! ```no_run
//! use cube_match::{match_colors, ScanTable, DEFAULT_ATTEMPTS};
//!
//! let table = ScanTable::load_default()?;
//! let bgrs = [[0u8; 3]; 54]; // one averaged BGR triple per facelet
//! match match_colors(&table, &bgrs, DEFAULT_ATTEMPTS) {
//!     Ok(faces) => println!("{}", faces),
//!     Err(err) => eprintln!("rescan needed: {}", err),
//! }
//! # Ok::<(), cube_match::TableError>(())
//! ```

pub mod geometry;
pub mod matcher;
pub mod memo;
pub mod propagation;
pub mod state;

// Re-export commonly used types
pub use matcher::{match_colors, match_confidences, Confidences, MatchError, DEFAULT_ATTEMPTS};
pub use memo::{ScanTable, TableError};
pub use propagation::{propagate, PropagationFailure};
pub use state::CubieGroup;
