/// Lowest tile id in the table
pub const MIN_TILE_ID: u32 = 442;

/// Highest tile id in the table
pub const MAX_TILE_ID: u32 = 450;

/// Bit offset of the tile id inside a GeoID
pub const TILE_SHIFT: u32 = 18;

/// Bit offset of the y cell inside a GeoID
pub const Y_CELL_SHIFT: u32 = 9;

/// Mask for one 9-bit cell field
pub const CELL_MASK: u32 = 0x1FF;

/// Largest cell index on either axis
pub const MAX_CELL: u32 = CELL_MASK;

/// Cell edge length in world units
pub const CELL_SIZE: f64 = 4.0;

/// World units to cell index
pub(crate) const CELL_SCALE: f64 = 0.25;

/// Band thresholds, identical on both axes
pub const LOW_THRESHOLD: f64 = -1024.0;
pub const HIGH_THRESHOLD: f64 = 1020.0;

/// Terrain ray endpoints and collision category
pub const RAY_CEILING: f64 = 1500.0;
pub const RAY_FLOOR: f64 = -1500.0;
pub const TERRAIN_RAY_MASK: u32 = 1 << 2;
