//! The [`Tile`] type — the symbol stored in one maze cell.

/// A maze cell symbol, as written in maze files.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Free = 0,
    Wall = 1,
    Start = 2,
    Goal = 3,
}

impl Tile {
    /// Integer code used in maze files.
    #[inline]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Whether a search may step onto this tile. Only walls block.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl TryFrom<i64> for Tile {
    type Error = i64;

    /// Map a file code to a tile, handing back the value when it is unknown.
    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Tile::Free),
            1 => Ok(Tile::Wall),
            2 => Ok(Tile::Start),
            3 => Ok(Tile::Goal),
            other => Err(other),
        }
    }
}

impl From<Tile> for i64 {
    fn from(t: Tile) -> Self {
        t.code()
    }
}
