//! Coordinate labels in letter-plus-number form ("A1", "B7", ...).

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::common::ParseError;

/// Zero-based (row, col) cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Wire label: column letter from `'A'`, then 1-based row number.
    pub fn to_label(&self) -> String {
        debug_assert!(self.col < 26);
        format!("{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }

    /// Parse a label, validating against a board of side `size`.
    pub fn from_label(label: &str, size: usize) -> Result<Self, ParseError> {
        let label = label.trim();
        let bad = || ParseError::BadCoord(String::from(label));

        let mut chars = label.chars();
        let letter = chars.next().ok_or_else(bad)?;
        let digits = chars.as_str();
        if !letter.is_ascii_alphabetic() || digits.is_empty() {
            return Err(bad());
        }
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let row_num: usize = digits.parse().map_err(|_| bad())?;
        if row_num == 0 {
            return Err(bad());
        }
        let row = row_num - 1;
        if row >= size || col >= size {
            return Err(bad());
        }
        Ok(Self { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label())
    }
}
