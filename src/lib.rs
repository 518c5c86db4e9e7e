//! # geoid-rs
//!
//! GeoIDs pack a world position into one integer: a tile id (442-450) and
//! two 9-bit cell indices on a 4 unit grid. There are currently three main
//! entry points.
//!
//! ### 1. `encode` / `GeoIdCodec` - Position <-> GeoID
//!
//! ```
//! use geoid_rs::{FlatTerrain, GeoIdCodec, GeoIdError, Position, encode};
//!
//! # fn main() -> Result<(), GeoIdError> {
//! let id = encode(&(0.0, 0.0));
//! assert_eq!(id.as_u32(), 117_047_039);
//!
//! // Heights come from the host's terrain; here it is flat at 20 units
//! let codec = GeoIdCodec::new(FlatTerrain::new(20.0));
//! assert_eq!(codec.decode(id)?, Position::new(0.0, 0.0, 20.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Coordinates` - Corner Queries
//!
//! ```
//! use geoid_rs::{Coordinates, Position};
//!
//! let coords = Coordinates::from_position(Position::new(10.0, 10.0, 5.0));
//! assert_eq!(coords.north_west(), Position::new(11.0, 11.0, 5.0));
//! ```
//!
//! ### 3. `GeoCell` / `GeoCellGrid` - Cell Geometry
//!
//! ```
//! use geoid_rs::GeoCellGrid;
//! use geo_types::point;
//!
//! let grid = GeoCellGrid::builder().extent(-20.0, -20.0, 20.0, 20.0).build();
//! if let Some(cell) = grid.get_cell_at(&point! { x: 3.0, y: 3.0 }) {
//!     println!("{}", cell.geoid);
//! }
//! ```
//!
//! The [`host`] module carries the small helpers over the server's own
//! objects (player lookup, broadcast, shape search, transforms).
//!

pub mod api;
pub mod core;
pub mod host;
pub mod util;

pub use crate::api::{
    Coordinates, Corner, GeoCell, GeoCellGrid, GeoCellGridBuilder, RowStatus,
    geoid_csv_to_positions, positions_csv_to_geoids,
};
pub use crate::core::{
    Band, CELL_SIZE, FlatTerrain, GeoIdCodec, MAX_TILE_ID, MIN_TILE_ID, NoTerrain, TILES,
    TerrainHeightResolver, TerrainQueryConfig, TerrainRay, Tile, decode, decode_or_sentinel,
    encode, encode_all, locate, tile_by_id, tile_for, try_encode,
};
pub use crate::host::{
    AxisAngle, Broadcast, Connection, NodeKind, SceneNode, SceneObject, Transform,
    create_position_transform, find_shape_files, get_player, message_all,
};
pub use crate::util::{Axis, Coordinate, GeoId, GeoIdError, Position};

pub use geo_types;
