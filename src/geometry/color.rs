// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for facelet and sticker colors.
//!
//! Colors are named after the face whose center carries them in the solved
//! cube: U, R, F, D, L, B. They are represented as integers 0..N_COLORS-1
//! in that order, which is also the face order of the result string.
//!
//! # Examples
//!
//! ```
//! use cube_match::geometry::{Color, N_COLORS};
//!
//! let up = Color::U;
//! assert_eq!(up.to_char(), 'U');
//!
//! let right = Color::from_char('R').unwrap();
//! assert_eq!(right.value(), 1);
//!
//! let colors: Vec<char> = Color::all().map(|c| c.to_char()).collect();
//! assert_eq!(colors.len(), N_COLORS);
//! ```

use crate::geometry::constants::N_COLORS;
use std::fmt;

/// Character representation of each color, in face order.
const COLOR_CHARS: [char; N_COLORS] = ['U', 'R', 'F', 'D', 'L', 'B'];

/// A sticker color in the range 0..N_COLORS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with slot or facelet indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// The up-face color.
    pub const U: Color = Color(0);
    /// The right-face color.
    pub const R: Color = Color(1);
    /// The front-face color.
    pub const F: Color = Color(2);
    /// The down-face color.
    pub const D: Color = Color(3);
    /// The left-face color.
    pub const L: Color = Color(4);
    /// The back-face color.
    pub const B: Color = Color(5);

    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= N_COLORS`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < N_COLORS, "Color out of range");
        Self(value)
    }

    /// Try to create a new color, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < N_COLORS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Convert a color to its face letter ('U', 'R', 'F', 'D', 'L', 'B').
    ///
    /// # Example
    /// ```
    /// use cube_match::geometry::Color;
    /// assert_eq!(Color::U.to_char(), 'U');
    /// assert_eq!(Color::B.to_char(), 'B');
    /// ```
    pub fn to_char(self) -> char {
        COLOR_CHARS[self.as_usize()]
    }

    /// Parse a color from its face letter.
    ///
    /// # Example
    /// ```
    /// use cube_match::geometry::Color;
    /// assert_eq!(Color::from_char('F'), Some(Color::F));
    /// assert_eq!(Color::from_char('X'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        COLOR_CHARS
            .iter()
            .position(|&ch| ch == c)
            .map(|i| Self(i as u8))
    }

    /// Iterator over all valid colors (0..N_COLORS).
    pub fn all() -> impl Iterator<Item = Color> {
        (0..N_COLORS as u8).map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
