use crate::core::constants::{CELL_MASK, MAX_CELL, MAX_TILE_ID, MIN_TILE_ID, TILE_SHIFT, Y_CELL_SHIFT};
use crate::util::error::{Axis, GeoIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A packed tile identifier.
///
/// # Binary Format
///
/// | Bits   | Field   | Description                         |
/// |--------|---------|-------------------------------------|
/// | 31..18 | Tile id | One of 442-450 for a valid GeoID    |
/// | 17..9  | Y cell  | Cell row inside the tile (0-511)    |
/// | 8..0   | X cell  | Cell column inside the tile (0-511) |
///
/// Any `u32` can be held in a `GeoId`; validity of the tile id is only
/// checked when decoding.
///
/// # Example
/// ```
/// use geoid_rs::GeoId;
///
/// let id = GeoId::from_parts(446, 255, 255).unwrap();
/// assert_eq!(id.as_u32(), 117_047_039);
/// assert_eq!(id.tile_id(), 446);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoId(u32);

impl GeoId {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packs a tile id and two cell indices, rejecting values that would not
    /// survive unpacking.
    pub fn from_parts(tile_id: u32, y_cell: u32, x_cell: u32) -> Result<Self, GeoIdError> {
        if !(MIN_TILE_ID..=MAX_TILE_ID).contains(&tile_id) {
            return Err(GeoIdError::InvalidTile(tile_id));
        }
        if y_cell > MAX_CELL {
            return Err(GeoIdError::CellOutOfRange {
                axis: Axis::Y,
                cell: y_cell as i64,
            });
        }
        if x_cell > MAX_CELL {
            return Err(GeoIdError::CellOutOfRange {
                axis: Axis::X,
                cell: x_cell as i64,
            });
        }
        Ok(Self((tile_id << TILE_SHIFT) | (y_cell << Y_CELL_SHIFT) | x_cell))
    }

    /// Packs without range checks. Negative or oversized cells bleed into
    /// neighbouring fields, and the result is truncated to 32 bits.
    pub(crate) fn pack_wrapping(tile_id: i64, y_cell: i64, x_cell: i64) -> Self {
        Self(((tile_id << TILE_SHIFT) | (y_cell << Y_CELL_SHIFT) | x_cell) as u32)
    }

    pub fn tile_id(self) -> u32 {
        self.0 >> TILE_SHIFT
    }

    pub fn y_cell(self) -> u32 {
        (self.0 >> Y_CELL_SHIFT) & CELL_MASK
    }

    pub fn x_cell(self) -> u32 {
        self.0 & CELL_MASK
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn has_valid_tile(self) -> bool {
        (MIN_TILE_ID..=MAX_TILE_ID).contains(&self.tile_id())
    }
}

impl From<u32> for GeoId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<GeoId> for u32 {
    fn from(id: GeoId) -> Self {
        id.0
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GeoId {
    type Err = GeoIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(GeoId)
            .map_err(|e| GeoIdError::InvalidGeoId(format!("'{}': {}", s, e)))
    }
}
