use crate::core::constants::{CELL_SCALE, CELL_SIZE, HIGH_THRESHOLD, LOW_THRESHOLD, MIN_TILE_ID};

/// One third of an axis: a half-open range `[min, max)` and the origin that
/// cell indices inside it are counted from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub origin: f64,
}

impl Band {
    pub const LOW: Band = Band {
        min: f64::NEG_INFINITY,
        max: LOW_THRESHOLD,
        origin: -3064.0,
    };
    pub const MID: Band = Band {
        min: LOW_THRESHOLD,
        max: HIGH_THRESHOLD,
        origin: -1020.0,
    };
    pub const HIGH: Band = Band {
        min: HIGH_THRESHOLD,
        max: f64::INFINITY,
        origin: 1024.0,
    };

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }

    /// Cell index of `v` counted from this band's origin. Not range checked.
    pub fn cell(&self, v: f64) -> i64 {
        ((v - self.origin) * CELL_SCALE).floor() as i64
    }

    /// Lower edge of cell `cell` in world units.
    pub fn cell_start(&self, cell: u32) -> f64 {
        cell as f64 * CELL_SIZE + self.origin
    }
}

/// Band index (0 = low, 1 = mid, 2 = high) for one axis value.
///
/// Comparisons run low to high exactly like the threshold tests they replace,
/// so NaN falls through to the high band.
pub fn band_index(v: f64) -> usize {
    if v < LOW_THRESHOLD {
        0
    } else if v < HIGH_THRESHOLD {
        1
    } else {
        2
    }
}

const BANDS: [Band; 3] = [Band::LOW, Band::MID, Band::HIGH];

/// A fixed region of the world plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub id: u32,
    pub x: Band,
    pub y: Band,
}

impl Tile {
    const fn new(id: u32, x: Band, y: Band) -> Self {
        Self { id, x, y }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }

    pub fn x_cell(&self, x: f64) -> i64 {
        self.x.cell(x)
    }

    pub fn y_cell(&self, y: f64) -> i64 {
        self.y.cell(y)
    }

    pub fn x_from_cell(&self, cell: u32) -> f64 {
        self.x.cell_start(cell)
    }

    pub fn y_from_cell(&self, cell: u32) -> f64 {
        self.y.cell_start(cell)
    }

    /// Offsets added to a scaled cell index to get world units, `(x, y)`.
    pub fn offsets(&self) -> (f64, f64) {
        (self.x.origin, self.y.origin)
    }
}

/// The 3x3 tile layout, row-major on y: ids grow with x first, then y.
pub const TILES: [Tile; 9] = [
    Tile::new(442, Band::LOW, Band::LOW),
    Tile::new(443, Band::MID, Band::LOW),
    Tile::new(444, Band::HIGH, Band::LOW),
    Tile::new(445, Band::LOW, Band::MID),
    Tile::new(446, Band::MID, Band::MID),
    Tile::new(447, Band::HIGH, Band::MID),
    Tile::new(448, Band::LOW, Band::HIGH),
    Tile::new(449, Band::MID, Band::HIGH),
    Tile::new(450, Band::HIGH, Band::HIGH),
];

/// Selects the tile covering `(x, y)`.
pub fn tile_for(x: f64, y: f64) -> &'static Tile {
    &TILES[band_index(y) * BANDS.len() + band_index(x)]
}

/// Looks up a tile by id.
pub fn tile_by_id(id: u32) -> Option<&'static Tile> {
    let idx = id.checked_sub(MIN_TILE_ID)? as usize;
    TILES.get(idx)
}
