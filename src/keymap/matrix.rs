//! ErgoDox key matrix geometry
//!
//! Layout coordinates are `(row, col)` as seen when looking at the keyboard:
//! 6 rows by 14 columns, the left half takes columns 0-6 and the right half
//! columns 7-13, with the thumb clusters in the last row. The electrical
//! matrix is the transpose of that (14 rows by 6 columns).

use static_assertions as sa;

/// Number of rows in layout coordinates
pub const NROWS: usize = 6;
/// Number of columns in layout coordinates
pub const NCOLS: usize = 14;

/// Number of rows of the electrical matrix
pub const MATRIX_ROWS: usize = NCOLS;
/// Number of columns of the electrical matrix
pub const MATRIX_COLS: usize = NROWS;

/// Number of physical keys
pub const NKEYS: usize = 76;

/// Positions in the layout grid that have no switch
pub const HOLES: [(u8, u8); 8] = [
    (2, 6), (2, 7),
    (4, 5), (4, 6), (4, 7), (4, 8),
    (5, 0), (5, 13),
];

sa::const_assert_eq!(NROWS * NCOLS - HOLES.len(), NKEYS);

/// Half of the split keyboard
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Side of the board a layout column belongs to
    pub const fn of(col: u8) -> Self {
        if (col as usize) < NCOLS / 2 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Layout columns belonging to this side
    pub const fn cols(&self) -> core::ops::Range<u8> {
        match self {
            Self::Left => 0..(NCOLS / 2) as u8,
            Self::Right => (NCOLS / 2) as u8..NCOLS as u8,
        }
    }
}

/// Check if layout coordinates point at a physical key
pub const fn is_key(row: u8, col: u8) -> bool {
    if row as usize >= NROWS || col as usize >= NCOLS {
        return false;
    }
    let mut i = 0;
    while i < HOLES.len() {
        if HOLES[i].0 == row && HOLES[i].1 == col {
            return false;
        }
        i += 1;
    }
    true
}

/// Transform electrical matrix coordinates to layout coordinates
///
/// Meant to be used with [`keyberon::layout::Event::transform`].
pub const fn to_layout((row, col): (u8, u8)) -> (u8, u8) {
    debug_assert!((row as usize) < MATRIX_ROWS && (col as usize) < MATRIX_COLS);
    (col, row)
}

/// Transform layout coordinates to electrical matrix coordinates
pub const fn to_matrix((row, col): (u8, u8)) -> (u8, u8) {
    (col, row)
}

/// Iterate over layout coordinates of all physical keys
pub fn keys() -> impl Iterator<Item = (u8, u8)> {
    (0..NROWS as u8)
        .flat_map(|row| (0..NCOLS as u8).map(move |col| (row, col)))
        .filter(|&(row, col)| is_key(row, col))
}
