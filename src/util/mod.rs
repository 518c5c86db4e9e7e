pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::{Coordinate, Position};
pub use error::{Axis, GeoIdError};
pub use identifier::GeoId;
