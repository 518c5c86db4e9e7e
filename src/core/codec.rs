use crate::core::constants::MAX_CELL;
use crate::core::terrain::{TerrainHeightResolver, TerrainQueryConfig};
use crate::core::tiles::{tile_by_id, tile_for};
use crate::util::coord::{Coordinate, Position};
use crate::util::error::{Axis, GeoIdError};
use crate::util::identifier::GeoId;
use rayon::prelude::*;

/// Encodes a world position into a [`GeoId`].
///
/// Only `x` and `y` are used. Cells are not range checked: positions in the
/// gaps between bands, or beyond the modelled world, still produce a value
/// but its fields are garbage. Use [`try_encode`] to reject those.
///
/// # Example
/// ```
/// use geoid_rs::encode;
///
/// let id = encode(&(0.0, 0.0));
/// assert_eq!(id.tile_id(), 446);
/// assert_eq!((id.x_cell(), id.y_cell()), (255, 255));
/// ```
pub fn encode<C: Coordinate>(coord: &C) -> GeoId {
    let (x, y) = (coord.x(), coord.y());
    let tile = tile_for(x, y);
    let id = GeoId::pack_wrapping(tile.id as i64, tile.y_cell(y), tile.x_cell(x));
    log::trace!("encoded ({}, {}) as {} on tile {}", x, y, id, tile.id);
    id
}

/// Like [`encode`], but fails on NaN or infinite input and when either cell
/// does not fit its 9-bit field.
pub fn try_encode<C: Coordinate>(coord: &C) -> Result<GeoId, GeoIdError> {
    let (x, y) = (coord.x(), coord.y());
    if !x.is_finite() {
        return Err(GeoIdError::NonFiniteCoordinate(Axis::X));
    }
    if !y.is_finite() {
        return Err(GeoIdError::NonFiniteCoordinate(Axis::Y));
    }
    let tile = tile_for(x, y);
    let x_cell = checked_cell(tile.x_cell(x), Axis::X)?;
    let y_cell = checked_cell(tile.y_cell(y), Axis::Y)?;
    GeoId::from_parts(tile.id, y_cell, x_cell)
}

fn checked_cell(cell: i64, axis: Axis) -> Result<u32, GeoIdError> {
    if (0..=MAX_CELL as i64).contains(&cell) {
        Ok(cell as u32)
    } else {
        Err(GeoIdError::CellOutOfRange { axis, cell })
    }
}

/// Encodes many positions in parallel, preserving order.
pub fn encode_all<C: Coordinate + Sync>(coords: &[C]) -> Vec<GeoId> {
    coords.par_iter().map(encode).collect()
}

/// Reconstructs the world `(x, y)` of the lower corner of a GeoID's cell.
pub fn locate(geoid: GeoId) -> Result<(f64, f64), GeoIdError> {
    let tile = tile_by_id(geoid.tile_id()).ok_or(GeoIdError::InvalidTile(geoid.tile_id()))?;
    Ok((tile.x_from_cell(geoid.x_cell()), tile.y_from_cell(geoid.y_cell())))
}

/// Decodes a GeoID into a position, taking the height from the terrain below.
///
/// # Errors
///
/// - [`GeoIdError::InvalidTile`] - the tile id is outside 442-450
/// - [`GeoIdError::NoTerrainIntersection`] - the ray through the cell hit nothing
pub fn decode<R: TerrainHeightResolver>(
    geoid: GeoId,
    resolver: &R,
    config: &TerrainQueryConfig,
) -> Result<Position, GeoIdError> {
    let (x, y) = locate(geoid)?;
    let hit = resolver
        .cast_ray(&config.ray_at(x, y))
        .ok_or(GeoIdError::NoTerrainIntersection { x, y })?;
    Ok(Position::new(x, y, hit.z))
}

/// [`decode`] with the legacy failure encoding: `(-1, -1, -1)` for either an
/// invalid tile or a missed terrain ray.
pub fn decode_or_sentinel<R: TerrainHeightResolver>(
    geoid: GeoId,
    resolver: &R,
    config: &TerrainQueryConfig,
) -> Position {
    decode(geoid, resolver, config).unwrap_or_else(|e| {
        log::debug!("GeoID {} did not decode: {}", geoid, e);
        Position::SENTINEL
    })
}

/// A terrain resolver paired with the query it should answer.
///
/// # Example
/// ```
/// use geoid_rs::{FlatTerrain, GeoIdCodec, Position};
///
/// let codec = GeoIdCodec::new(FlatTerrain::new(12.0));
/// let id = codec.encode(&(2000.0, 2000.0));
/// assert_eq!(codec.decode(id).unwrap(), Position::new(2000.0, 2000.0, 12.0));
/// ```
#[derive(Debug, Clone)]
pub struct GeoIdCodec<R> {
    resolver: R,
    config: TerrainQueryConfig,
}

impl<R: TerrainHeightResolver> GeoIdCodec<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            config: TerrainQueryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TerrainQueryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TerrainQueryConfig {
        &self.config
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn encode<C: Coordinate>(&self, coord: &C) -> GeoId {
        encode(coord)
    }

    pub fn try_encode<C: Coordinate>(&self, coord: &C) -> Result<GeoId, GeoIdError> {
        try_encode(coord)
    }

    pub fn decode(&self, geoid: GeoId) -> Result<Position, GeoIdError> {
        decode(geoid, &self.resolver, &self.config)
    }

    pub fn decode_or_sentinel(&self, geoid: GeoId) -> Position {
        decode_or_sentinel(geoid, &self.resolver, &self.config)
    }
}
