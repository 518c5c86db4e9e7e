use crate::core::constants::{RAY_CEILING, RAY_FLOOR, TERRAIN_RAY_MASK};
use crate::util::coord::Position;
use crate::util::error::GeoIdError;
use serde::Deserialize;

/// A vertical segment cast against the host's collision geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainRay {
    pub start: Position,
    pub end: Position,
    /// Collision category bits the ray should hit.
    pub mask: u32,
}

/// Finds where a [`TerrainRay`] first meets terrain or static geometry.
///
/// Implemented by the embedding application. Closures of the form
/// `Fn(&TerrainRay) -> Option<Position>` work out of the box.
pub trait TerrainHeightResolver {
    /// Returns the intersection point, or `None` when nothing was hit.
    fn cast_ray(&self, ray: &TerrainRay) -> Option<Position>;
}

impl<F> TerrainHeightResolver for F
where
    F: Fn(&TerrainRay) -> Option<Position>,
{
    fn cast_ray(&self, ray: &TerrainRay) -> Option<Position> {
        self(ray)
    }
}

/// Ground at a constant height everywhere the ray spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTerrain {
    pub height: f64,
}

impl FlatTerrain {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl TerrainHeightResolver for FlatTerrain {
    fn cast_ray(&self, ray: &TerrainRay) -> Option<Position> {
        let (lo, hi) = if ray.start.z < ray.end.z {
            (ray.start.z, ray.end.z)
        } else {
            (ray.end.z, ray.start.z)
        };
        (self.height >= lo && self.height <= hi)
            .then(|| Position::new(ray.start.x, ray.start.y, self.height))
    }
}

/// A world with nothing to hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTerrain;

impl TerrainHeightResolver for NoTerrain {
    fn cast_ray(&self, _ray: &TerrainRay) -> Option<Position> {
        None
    }
}

/// Configuration for the height query issued while decoding.
///
/// # Example
/// ```
/// use geoid_rs::TerrainQueryConfig;
///
/// let config = TerrainQueryConfig::from_json(r#"{ "ceiling": 800.0 }"#).unwrap();
/// assert_eq!(config.ceiling, 800.0);
/// assert_eq!(config.floor, -1500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainQueryConfig {
    /// Height the ray starts from.
    pub ceiling: f64,
    /// Height the ray ends at.
    pub floor: f64,
    pub collision_mask: u32,
}

impl Default for TerrainQueryConfig {
    fn default() -> Self {
        Self {
            ceiling: RAY_CEILING,
            floor: RAY_FLOOR,
            collision_mask: TERRAIN_RAY_MASK,
        }
    }
}

impl TerrainQueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }

    pub fn collision_mask(mut self, mask: u32) -> Self {
        self.collision_mask = mask;
        self
    }

    /// Parses a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GeoIdError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GeoIdError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GeoIdError> {
        if self.ceiling <= self.floor {
            return Err(GeoIdError::InvalidConfig(format!(
                "ceiling {} must be above floor {}",
                self.ceiling, self.floor
            )));
        }
        if self.collision_mask == 0 {
            return Err(GeoIdError::InvalidConfig(
                "collision_mask must select at least one category".to_string(),
            ));
        }
        Ok(())
    }

    /// The downward ray through `(x, y)`.
    pub fn ray_at(&self, x: f64, y: f64) -> TerrainRay {
        TerrainRay {
            start: Position::new(x, y, self.ceiling),
            end: Position::new(x, y, self.floor),
            mask: self.collision_mask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ray() {
        let ray = TerrainQueryConfig::default().ray_at(12.0, -8.0);
        assert_eq!(ray.start, Position::new(12.0, -8.0, 1500.0));
        assert_eq!(ray.end, Position::new(12.0, -8.0, -1500.0));
        assert_eq!(ray.mask, 4);
    }

    #[test]
    fn test_flat_terrain_hit_and_miss() {
        let config = TerrainQueryConfig::default();
        let hit = FlatTerrain::new(42.5).cast_ray(&config.ray_at(1.0, 2.0));
        assert_eq!(hit, Some(Position::new(1.0, 2.0, 42.5)));

        let miss = FlatTerrain::new(2000.0).cast_ray(&config.ray_at(1.0, 2.0));
        assert_eq!(miss, None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |ray: &TerrainRay| Some(Position::new(ray.start.x, ray.start.y, 7.0));
        let hit = resolver.cast_ray(&TerrainQueryConfig::default().ray_at(0.0, 0.0));
        assert_eq!(hit.map(|p| p.z), Some(7.0));
        assert_eq!(NoTerrain.cast_ray(&TerrainQueryConfig::default().ray_at(0.0, 0.0)), None);
    }

    #[test]
    fn test_config_from_json() -> Result<(), GeoIdError> {
        let config = TerrainQueryConfig::from_json(r#"{"floor": -200.0, "collision_mask": 12}"#)?;
        assert_eq!(config.ceiling, 1500.0);
        assert_eq!(config.floor, -200.0);
        assert_eq!(config.collision_mask, 12);
        Ok(())
    }

    #[test]
    fn test_config_rejects_inverted_ray() {
        let result = TerrainQueryConfig::from_json(r#"{"ceiling": -10.0, "floor": 10.0}"#);
        assert!(matches!(result, Err(GeoIdError::InvalidConfig(_))));

        let result = TerrainQueryConfig::new().collision_mask(0).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let result = TerrainQueryConfig::from_json("{ceiling:");
        assert!(matches!(result, Err(GeoIdError::InvalidConfig(_))));
    }
}
