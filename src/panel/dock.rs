//! Dock sides
//!
//! A satellite panel is attached to one of the four edges of the layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Edge a panel docks against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockSide {
    Top,
    Left,
    Right,
    Bottom,
}

impl DockSide {
    /// Returns the axis the docking edge runs along
    ///
    /// Top/Bottom panels slide horizontally along their edge, Left/Right
    /// panels slide vertically.
    pub fn axis(&self) -> Axis {
        match self {
            DockSide::Top | DockSide::Bottom => Axis::Horizontal,
            DockSide::Left | DockSide::Right => Axis::Vertical,
        }
    }

    /// The side facing this one
    pub fn opposite(&self) -> DockSide {
        match self {
            DockSide::Top => DockSide::Bottom,
            DockSide::Bottom => DockSide::Top,
            DockSide::Left => DockSide::Right,
            DockSide::Right => DockSide::Left,
        }
    }

    /// Single-letter code used in saved layouts
    pub fn code(&self) -> char {
        match self {
            DockSide::Top => 'T',
            DockSide::Left => 'L',
            DockSide::Right => 'R',
            DockSide::Bottom => 'B',
        }
    }

    /// All sides in snap evaluation order
    pub const ALL: [DockSide; 4] = [
        DockSide::Top,
        DockSide::Bottom,
        DockSide::Left,
        DockSide::Right,
    ];
}

impl fmt::Display for DockSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DockSide {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(DockSide::Top),
            "L" => Ok(DockSide::Left),
            "R" => Ok(DockSide::Right),
            "B" => Ok(DockSide::Bottom),
            _ => Err(()),
        }
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}
