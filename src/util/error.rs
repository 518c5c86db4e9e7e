use std::fmt;

/// Horizontal axis of a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Error type for geoid-rs operations.
#[derive(Debug, PartialEq)]
pub enum GeoIdError {
    /// The tile id packed in a GeoID is outside 442-450.
    InvalidTile(u32),
    /// The terrain ray found no ground under the reconstructed cell.
    NoTerrainIntersection { x: f64, y: f64 },
    /// A position coordinate is NaN or infinite.
    NonFiniteCoordinate(Axis),
    /// A cell index does not fit the 9-bit field (0-511).
    CellOutOfRange { axis: Axis, cell: i64 },
    /// A GeoID string is not an unsigned 32-bit integer.
    InvalidGeoId(String),
    /// Configuration could not be parsed or is inconsistent.
    InvalidConfig(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl fmt::Display for GeoIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoIdError::InvalidTile(t) => write!(f, "Invalid tile id: {}", t),
            GeoIdError::NoTerrainIntersection { x, y } => {
                write!(f, "No terrain intersection at ({}, {})", x, y)
            }
            GeoIdError::NonFiniteCoordinate(axis) => {
                write!(f, "Non-finite {} coordinate", axis)
            }
            GeoIdError::CellOutOfRange { axis, cell } => {
                write!(f, "Cell index out of range on {} axis: {}", axis, cell)
            }
            GeoIdError::InvalidGeoId(msg) => write!(f, "Invalid GeoID: {}", msg),
            GeoIdError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            GeoIdError::IoError(msg) => write!(f, "IO error: {}", msg),
            GeoIdError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for GeoIdError {}
