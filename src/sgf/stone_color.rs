use serde::{Deserialize, Serialize};

/// Color of a played stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoneColor {
    /// First player, marker `B`
    Black,
    /// Second player, marker `W`
    White,
}

impl StoneColor {
    /// Maps an SGF move marker to its color. Anything but `B`/`W` is not a move.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'B' => Some(StoneColor::Black),
            'W' => Some(StoneColor::White),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            StoneColor::Black => 'B',
            StoneColor::White => 'W',
        }
    }
}

impl std::fmt::Display for StoneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoneColor::Black => write!(f, "black"),
            StoneColor::White => write!(f, "white"),
        }
    }
}
