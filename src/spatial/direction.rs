//! The four grid directions over (row, column) coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit offset towards one of the four orthogonal neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Offset (-1, 0)
    Up,
    /// Offset (1, 0)
    Down,
    /// Offset (0, -1)
    Left,
    /// Offset (0, 1)
    Right,
}

impl Direction {
    /// All directions in propagation order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column offset of the direction
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position in `ALL`, used to index per-direction tables
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Direction with the given offset, if it is a unit offset
    pub const fn from_offset(offset: [isize; 2]) -> Option<Self> {
        match offset {
            [-1, 0] => Some(Self::Up),
            [1, 0] => Some(Self::Down),
            [0, -1] => Some(Self::Left),
            [0, 1] => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [row, col] = self.offset();
        write!(f, "({row}, {col})")
    }
}

/// Step from `pos` towards `direction` inside a `width` x `height` grid
///
/// Returns `None` when the neighbor falls outside `[0, height) x [0, width)`.
pub const fn is_pos_valid(
    pos: [usize; 2],
    direction: Direction,
    width: usize,
    height: usize,
) -> Option<[usize; 2]> {
    let [dr, dc] = direction.offset();
    let Some(row) = pos[0].checked_add_signed(dr) else {
        return None;
    };
    let Some(col) = pos[1].checked_add_signed(dc) else {
        return None;
    };
    if row >= height || col >= width {
        return None;
    }
    Some([row, col])
}
