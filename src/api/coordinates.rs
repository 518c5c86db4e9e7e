use crate::core::codec::{GeoIdCodec, encode};
use crate::core::terrain::TerrainHeightResolver;
use crate::util::coord::Position;
use crate::util::error::GeoIdError;
use crate::util::identifier::GeoId;
use serde::{Deserialize, Serialize};

/// Named offsets around a stored position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Center,
}

impl Corner {
    /// Delta added to the stored position.
    ///
    /// These are in world units, not cells: a cell is 4 units wide but the
    /// corners sit 1 unit apart. Kept as the host scripts expect them.
    pub fn offset(self) -> Position {
        match self {
            Corner::NorthEast => Position::new(1.0, 0.0, 0.0),
            Corner::NorthWest => Position::new(1.0, 1.0, 0.0),
            Corner::SouthEast => Position::new(0.0, 0.0, 0.0),
            Corner::SouthWest => Position::new(0.0, 1.0, 0.0),
            Corner::Center => Position::new(0.5, 0.5, 0.0),
        }
    }
}

/// The result of one conversion: a GeoID and the position it stands for.
///
/// Every conversion builds a new value; nothing is cached between calls.
///
/// # Example
///
/// ```
/// use geoid_rs::{Coordinates, Position};
///
/// let coords = Coordinates::from_position(Position::new(10.0, 10.0, 5.0));
/// assert_eq!(coords.geoid.tile_id(), 446);
/// assert_eq!(coords.center(), Position::new(10.5, 10.5, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub geoid: GeoId,
    pub position: Position,
}

impl Coordinates {
    /// Encodes `position` and keeps it as given, height included.
    pub fn from_position(position: impl Into<Position>) -> Self {
        let position = position.into();
        Self {
            geoid: encode(&position),
            position,
        }
    }

    /// Decodes `geoid`, asking the codec's terrain for the height.
    pub fn from_geo_id<R: TerrainHeightResolver>(
        geoid: GeoId,
        codec: &GeoIdCodec<R>,
    ) -> Result<Self, GeoIdError> {
        Ok(Self {
            geoid,
            position: codec.decode(geoid)?,
        })
    }

    /// Like [`Coordinates::from_geo_id`] but stores `(-1, -1, -1)` when the
    /// GeoID cannot be decoded.
    pub fn from_geo_id_or_sentinel<R: TerrainHeightResolver>(
        geoid: GeoId,
        codec: &GeoIdCodec<R>,
    ) -> Self {
        Self {
            geoid,
            position: codec.decode_or_sentinel(geoid),
        }
    }

    pub fn corner(&self, corner: Corner) -> Position {
        self.position + corner.offset()
    }

    pub fn north_east(&self) -> Position {
        self.corner(Corner::NorthEast)
    }

    pub fn north_west(&self) -> Position {
        self.corner(Corner::NorthWest)
    }

    pub fn south_east(&self) -> Position {
        self.corner(Corner::SouthEast)
    }

    pub fn south_west(&self) -> Position {
        self.corner(Corner::SouthWest)
    }

    pub fn center(&self) -> Position {
        self.corner(Corner::Center)
    }

    /// The four corners in NE, NW, SE, SW order.
    pub fn corners(&self) -> [Position; 4] {
        [
            self.north_east(),
            self.north_west(),
            self.south_east(),
            self.south_west(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terrain::{FlatTerrain, NoTerrain};

    #[test]
    fn test_corner_queries() {
        let coords = Coordinates::from_position(Position::new(10.0, 10.0, 5.0));

        assert_eq!(coords.north_east(), Position::new(11.0, 10.0, 5.0));
        assert_eq!(coords.north_west(), Position::new(11.0, 11.0, 5.0));
        assert_eq!(coords.south_east(), Position::new(10.0, 10.0, 5.0));
        assert_eq!(coords.south_west(), Position::new(10.0, 11.0, 5.0));
        assert_eq!(coords.center(), Position::new(10.5, 10.5, 5.0));
    }

    #[test]
    fn test_corners_order() {
        let coords = Coordinates::from_position((0.0, 0.0, 0.0));
        assert_eq!(
            coords.corners(),
            [
                Position::new(1.0, 0.0, 0.0),
                Position::new(1.0, 1.0, 0.0),
                Position::new(0.0, 0.0, 0.0),
                Position::new(0.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_from_position_keeps_position() {
        let position = Position::new(2000.0, 2000.0, 77.0);
        let coords = Coordinates::from_position(position);
        assert_eq!(coords.position, position);
        assert_eq!(coords.geoid.as_u32(), 118_089_972);
    }

    #[test]
    fn test_each_conversion_is_independent() -> Result<(), GeoIdError> {
        let codec = GeoIdCodec::new(FlatTerrain::new(3.0));
        let first = Coordinates::from_position((-2000.0, -2000.0));
        let second = Coordinates::from_geo_id(GeoId::from_parts(446, 255, 255)?, &codec)?;

        assert_eq!(first.geoid.tile_id(), 442);
        assert_eq!(second.position, Position::new(0.0, 0.0, 3.0));
        assert_eq!(second.north_east(), Position::new(1.0, 0.0, 3.0));
        Ok(())
    }

    #[test]
    fn test_from_geo_id_errors() {
        let codec = GeoIdCodec::new(NoTerrain);
        let bad_tile = GeoId::from_raw(999 << 18);

        assert_eq!(
            Coordinates::from_geo_id(bad_tile, &codec),
            Err(GeoIdError::InvalidTile(999))
        );

        let legacy = Coordinates::from_geo_id_or_sentinel(bad_tile, &codec);
        assert_eq!(legacy.geoid, bad_tile);
        assert!(legacy.position.is_sentinel());
        assert_eq!(legacy.center(), Position::new(-0.5, -0.5, -1.0));
    }

    #[test]
    fn test_serialize_json() {
        let coords = Coordinates::from_position(Position::new(0.0, 0.0, 1.0));
        let json = serde_json::to_string(&coords).unwrap();
        assert_eq!(json, r#"{"geoid":117047039,"position":{"x":0.0,"y":0.0,"z":1.0}}"#);
    }
}
