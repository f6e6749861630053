use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::CubeError;

/// Direction that a sticker faces.
///
/// The declaration order `F B R L U D` is the facing alphabet order; it pairs
/// with the color order `R O G B Y W` for the solved state.
#[derive(Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Facing {
    F,
    B,
    R,
    L,
    U,
    D,
}

impl Facing {
    /// Returns the facing named by a single uppercase letter.
    pub fn from_char(c: char) -> Result<Self, CubeError> {
        Self::from_str(c.encode_utf8(&mut [0; 4])).map_err(|_| CubeError::InvalidFacing(c))
    }

    /// Returns the index of the facing in alphabet order.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Returns a bit unique to the facing, used to compare sets of facings
    /// regardless of letter order.
    pub(crate) fn bit(self) -> u8 {
        1 << self.index()
    }
}
