use geoid_rs::{Coordinates, FlatTerrain, GeoCell, GeoIdCodec, GeoIdError, Position};

fn main() -> Result<(), GeoIdError> {
    env_logger::init();

    let position = Position::new(-1337.3, 1500.9, 70.0);
    let coords = Coordinates::from_position(position);

    println!("GeoID: {}", coords.geoid);
    println!(
        "Tile: {}, Cell: ({}, {})",
        coords.geoid.tile_id(),
        coords.geoid.x_cell(),
        coords.geoid.y_cell()
    );

    let codec = GeoIdCodec::new(FlatTerrain::new(64.0));
    let restored = Coordinates::from_geo_id(coords.geoid, &codec)?;
    println!("Decoded: {}", restored.position);
    println!("Center: {}", restored.center());

    let cell = GeoCell::from_geo_id(coords.geoid)?;
    println!("Cell polygon: {:?}", cell.to_polygon());

    Ok(())
}
