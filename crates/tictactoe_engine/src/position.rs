//! Named board cells and grid geometry.
//!
//! Indices are the move currency of the engine; a [`Position`] names an
//! index for display and lets the frontend walk the grid by row and column.

use serde::{Deserialize, Serialize};

/// Width and height of the grid.
const SIDE: usize = 3;

/// One of the nine cells, declared in index order (row-major from the top left).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Position {
    /// Row 0, column 0.
    #[strum(serialize = "top left")]
    TopLeft,
    /// Row 0, column 1.
    #[strum(serialize = "top")]
    TopCenter,
    /// Row 0, column 2.
    #[strum(serialize = "top right")]
    TopRight,
    /// Row 1, column 0.
    #[strum(serialize = "left")]
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    #[strum(serialize = "right")]
    MiddleRight,
    /// Row 2, column 0.
    #[strum(serialize = "bottom left")]
    BottomLeft,
    /// Row 2, column 1.
    #[strum(serialize = "bottom")]
    BottomCenter,
    /// Row 2, column 2.
    #[strum(serialize = "bottom right")]
    BottomRight,
}

impl Position {
    /// Every cell, indexed by board index.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Short name such as "top left" or "center".
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Board index, 0 to 8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The cell at `index`, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / SIDE
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.to_index() % SIDE
    }

    /// The cell at `row`/`col`; `None` off the grid.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE)
            .then(|| Self::from_index(row * SIDE + col))
            .flatten()
    }
}
