use core::fmt;
use serde::{Deserialize, Serialize};

/// Colors of the master palette, in the order games take them from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Orange,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// First `count` colors of the master palette, clamped to its length.
    pub fn palette(count: usize) -> &'static [Color] {
        &Self::ALL[..count.min(Self::COUNT)]
    }

    pub const fn as_str(self) -> &'static str {
        use Color::*;
        match self {
            Red => "red",
            Yellow => "yellow",
            Green => "green",
            Blue => "blue",
            Purple => "purple",
            Orange => "orange",
        }
    }

    pub fn from_name(name: &str) -> Option<Color> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single cell of the board. `included` marks membership in the controlled region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    pub included: bool,
}

impl Tile {
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            included: false,
        }
    }

    pub const fn included(color: Color) -> Self {
        Self {
            color,
            included: true,
        }
    }
}
