use std::fmt;
use std::str::FromStr;

use crate::CubeError;

/// Color of a single sticker.
///
/// Constructed from a one-character color code, case-insensitively. The
/// wildcard `.` stands for an unknown color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sticker {
    /// `W`
    White,
    /// `R`
    Red,
    /// `B`
    Blue,
    /// `G`
    Green,
    /// `Y`
    Yellow,
    /// `O`
    Orange,
    /// `.`
    Wildcard,
}

impl Sticker {
    /// All sticker colors, in color-code order `W R B G Y O .`
    pub const ALL: [Sticker; 7] = [
        Self::White,
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Wildcard,
    ];

    /// Constructs a sticker from a color code.
    pub fn new(code: char) -> Result<Self, CubeError> {
        match code.to_ascii_uppercase() {
            'W' => Ok(Self::White),
            'R' => Ok(Self::Red),
            'B' => Ok(Self::Blue),
            'G' => Ok(Self::Green),
            'Y' => Ok(Self::Yellow),
            'O' => Ok(Self::Orange),
            '.' => Ok(Self::Wildcard),
            _ => Err(CubeError::InvalidColor(code)),
        }
    }

    /// Returns the uppercase color code.
    pub fn code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Wildcard => '.',
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for Sticker {
    type Error = CubeError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl FromStr for Sticker {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::new(code),
            _ => Err(CubeError::BadColorCode(s.to_owned())),
        }
    }
}
