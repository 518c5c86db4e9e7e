pub mod codec;
pub mod constants;
pub mod terrain;
pub mod tiles;

pub use codec::{GeoIdCodec, decode, decode_or_sentinel, encode, encode_all, locate, try_encode};
pub use constants::{CELL_SIZE, MAX_TILE_ID, MIN_TILE_ID};
pub use terrain::{FlatTerrain, NoTerrain, TerrainHeightResolver, TerrainQueryConfig, TerrainRay};
pub use tiles::{Band, TILES, Tile, tile_by_id, tile_for};
