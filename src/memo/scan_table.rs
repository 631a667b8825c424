// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The precomputed BGR → confidence lookup table.
//!
//! The table is the output of a nearest-neighbor model trained on
//! successful scans; this crate treats it as an opaque dense array. Every
//! possible 24-bit BGR value maps to six u16 confidence scores, one per
//! color in the order U, R, F, D, L, B.
//!
//! The on-disk format is the raw array: 16,777,216 entries of six
//! little-endian u16s each, 192 MiB total, indexed by
//! `((b * 256) + g) * 256 + r`. The whole file is read into memory once at
//! startup and shared read-only afterwards.

use crate::geometry::constants::N_COLORS;
use std::fmt;
use std::fs;
use std::path::Path;
use strum_macros::EnumCount as EnumCountMacro;

/// Default table filename, next to the working directory.
pub const TABLE_FILE: &str = "scan.tbl";

/// Number of distinct 24-bit BGR values.
pub const N_BGRS: usize = 1 << 24;

/// Exact size of a valid table file in bytes.
pub const TABLE_BYTES: usize = N_BGRS * N_COLORS * 2;

/// Errors that can occur while loading the scan table.
///
/// All of them are fatal for the matching core: without the prior there is
/// no evidence to order candidates by.
#[derive(Debug, EnumCountMacro)]
pub enum TableError {
    /// The table file could not be opened or read.
    Io(std::io::Error),

    /// The file exists but does not have the exact expected size.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(err) => write!(f, "Failed to read scan table: {}", err),
            TableError::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Scan table has {} bytes, expected exactly {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            TableError::SizeMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

/// The dense BGR → confidence lookup (Tier 1: immutable after load).
#[derive(Debug)]
pub struct ScanTable {
    scores: Box<[[u16; N_COLORS]]>,
}

impl ScanTable {
    /// Load the table from a file.
    ///
    /// The file must be exactly [`TABLE_BYTES`] long; anything else is a
    /// [`TableError::SizeMismatch`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        eprintln!(
            "[ScanTable] Loading {} ({} MiB)...",
            path.as_ref().display(),
            TABLE_BYTES / (1024 * 1024)
        );

        let bytes = fs::read(path)?;
        if bytes.len() != TABLE_BYTES {
            return Err(TableError::SizeMismatch {
                expected: TABLE_BYTES,
                actual: bytes.len(),
            });
        }

        let mut scores = vec![[0u16; N_COLORS]; N_BGRS].into_boxed_slice();
        for (entry, chunk) in scores.iter_mut().zip(bytes.chunks_exact(N_COLORS * 2)) {
            for (score, pair) in entry.iter_mut().zip(chunk.chunks_exact(2)) {
                *score = u16::from_le_bytes([pair[0], pair[1]]);
            }
        }

        eprintln!("[ScanTable] Load complete ({} entries)", N_BGRS);
        Ok(Self { scores })
    }

    /// Load the table from [`TABLE_FILE`] in the working directory.
    pub fn load_default() -> Result<Self, TableError> {
        Self::load(TABLE_FILE)
    }

    /// Build a table from in-memory scores.
    ///
    /// Useful for embedders that ship the table by other means (and for
    /// tests). The slice must cover every BGR value.
    pub fn from_scores(scores: Vec<[u16; N_COLORS]>) -> Result<Self, TableError> {
        if scores.len() != N_BGRS {
            return Err(TableError::SizeMismatch {
                expected: TABLE_BYTES,
                actual: scores.len() * N_COLORS * 2,
            });
        }
        Ok(Self {
            scores: scores.into_boxed_slice(),
        })
    }

    /// Confidence scores for one BGR sample, in color order U,R,F,D,L,B.
    pub fn scores(&self, bgr: [u8; 3]) -> &[u16; N_COLORS] {
        &self.scores[Self::index(bgr)]
    }

    /// Dense index of a BGR triple.
    fn index(bgr: [u8; 3]) -> usize {
        ((bgr[0] as usize * 256) + bgr[1] as usize) * 256 + bgr[2] as usize
    }
}
