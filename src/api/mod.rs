pub mod cell;
pub mod coordinates;
pub mod geoid_csv;
pub mod grid;

pub use cell::GeoCell;
pub use coordinates::{Coordinates, Corner};
pub use geoid_csv::{RowStatus, geoid_csv_to_positions, positions_csv_to_geoids};
pub use grid::{GeoCellGrid, GeoCellGridBuilder};
