//! Board rotation and the attack direction it selects.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// Rotation of the board in 90 degree steps.
///
/// Rotation never permutes board storage; it only decides which way the
/// next attack points.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Rotation {
    /// 0 degrees (attacks point down).
    #[default]
    #[strum(to_string = "0°")]
    Deg0,
    /// 90 degrees (attacks point right).
    #[strum(to_string = "90°")]
    Deg90,
    /// 180 degrees (attacks point up).
    #[strum(to_string = "180°")]
    Deg180,
    /// 270 degrees (attacks point left).
    #[strum(to_string = "270°")]
    Deg270,
}

impl Rotation {
    /// Rotates a further 90 degrees, wrapping at 360.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Builds a rotation from degrees; any multiple of 90 is accepted.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Direction the next attack travels.
    pub fn attack_direction(self) -> Direction {
        match self {
            Rotation::Deg0 => Direction::Down,
            Rotation::Deg90 => Direction::Right,
            Rotation::Deg180 => Direction::Up,
            Rotation::Deg270 => Direction::Left,
        }
    }

    /// Attack step in flattened index space.
    pub fn attack_offset(self) -> isize {
        self.attack_direction().offset()
    }
}

/// An orthogonal direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Step in flattened, row-major index space.
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -(BOARD_SIZE as isize),
            Direction::Down => BOARD_SIZE as isize,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// True for left/right steps, the only ones that can wrap across rows.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}
