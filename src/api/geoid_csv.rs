use crate::core::codec::{GeoIdCodec, try_encode};
use crate::core::terrain::TerrainHeightResolver;
use crate::util::coord::Position;
use crate::util::error::GeoIdError;
use crate::util::identifier::GeoId;
use csv::{Reader, StringRecord, Writer};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Per-row outcome written to the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Ok,
    /// GeoID tile id outside 442-450
    InvalidTile,
    /// No ground under the decoded cell
    NoTerrain,
    /// NaN or infinite position
    NonFinite,
    /// Position in a gap between tiles or beyond the world
    OutOfRange,
}

impl RowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Ok => "ok",
            RowStatus::InvalidTile => "invalid_tile",
            RowStatus::NoTerrain => "no_terrain",
            RowStatus::NonFinite => "non_finite",
            RowStatus::OutOfRange => "out_of_range",
        }
    }

    fn of<T>(result: &Result<T, GeoIdError>) -> Self {
        match result {
            Ok(_) => RowStatus::Ok,
            Err(GeoIdError::InvalidTile(_)) => RowStatus::InvalidTile,
            Err(GeoIdError::NoTerrainIntersection { .. }) => RowStatus::NoTerrain,
            Err(GeoIdError::NonFiniteCoordinate(_)) => RowStatus::NonFinite,
            Err(_) => RowStatus::OutOfRange,
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn csv_err(e: csv::Error) -> GeoIdError {
    GeoIdError::CsvError(e.to_string())
}

/// Opens both ends of a conversion and writes the output header: `leading`
/// columns first, then every input column unchanged.
fn open_pair(
    input: &Path,
    output: &Path,
    leading: &[&str],
) -> Result<(Reader<File>, Writer<File>, StringRecord), GeoIdError> {
    let mut reader = Reader::from_path(input).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let mut writer = Writer::from_path(output).map_err(csv_err)?;
    writer
        .write_record(leading.iter().copied().chain(headers.iter()))
        .map_err(csv_err)?;
    Ok((reader, writer, headers))
}

fn column(headers: &StringRecord, name: &str) -> Result<usize, GeoIdError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| GeoIdError::CsvError(format!("Column '{}' not found", name)))
}

fn field<'r>(record: &'r StringRecord, idx: usize, row: usize) -> Result<&'r str, GeoIdError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| GeoIdError::CsvError(format!("Row {}: missing column {}", row, idx)))
}

fn number(record: &StringRecord, idx: usize, row: usize) -> Result<f64, GeoIdError> {
    let raw = field(record, idx, row)?;
    raw.parse()
        .map_err(|_| GeoIdError::CsvError(format!("Row {}: '{}' is not a number", row, raw)))
}

/// Prepends `geoid,status` to every row of a positions file.
///
/// Rows whose position has no cell keep an empty `geoid` and say why in
/// `status` (`non_finite` or `out_of_range`). Text that is not a number at
/// all fails the whole conversion. Returns how many rows were encoded.
///
/// # Example
///
/// ```no_run
/// use geoid_rs::positions_csv_to_geoids;
///
/// let encoded = positions_csv_to_geoids("claims.csv", "claims_geoid.csv", "x", "y").unwrap();
/// println!("{} claims encoded", encoded);
/// ```
pub fn positions_csv_to_geoids(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    x_column: &str,
    y_column: &str,
) -> Result<usize, GeoIdError> {
    let (mut reader, mut writer, headers) =
        open_pair(input.as_ref(), output.as_ref(), &["geoid", "status"])?;
    let (x_idx, y_idx) = (column(&headers, x_column)?, column(&headers, y_column)?);

    let mut encoded = 0;
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let row = i + 1;
        let position = (number(&record, x_idx, row)?, number(&record, y_idx, row)?);

        let result = try_encode(&position);
        let status = RowStatus::of(&result);
        let geoid = match result {
            Ok(id) => {
                encoded += 1;
                id.to_string()
            }
            Err(e) => {
                log::debug!("row {} has no GeoID: {}", row, e);
                String::new()
            }
        };
        writer
            .write_record([geoid.as_str(), status.as_str()].into_iter().chain(record.iter()))
            .map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| GeoIdError::IoError(e.to_string()))?;
    Ok(encoded)
}

/// Prepends `x,y,z,status` to every row of a GeoID file.
///
/// Undecodable rows are kept with the `(-1, -1, -1)` position and a status of
/// `invalid_tile` or `no_terrain`. A GeoID that is not a number fails the
/// whole conversion. Returns how many rows decoded.
///
/// # Example
///
/// ```no_run
/// use geoid_rs::{geoid_csv_to_positions, FlatTerrain, GeoIdCodec};
///
/// let codec = GeoIdCodec::new(FlatTerrain::new(0.0));
/// geoid_csv_to_positions("claims_geoid.csv", "claims_xyz.csv", "geoid", &codec).unwrap();
/// ```
pub fn geoid_csv_to_positions<R: TerrainHeightResolver>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    geoid_column: &str,
    codec: &GeoIdCodec<R>,
) -> Result<usize, GeoIdError> {
    let (mut reader, mut writer, headers) =
        open_pair(input.as_ref(), output.as_ref(), &["x", "y", "z", "status"])?;
    let geoid_idx = column(&headers, geoid_column)?;

    let mut decoded = 0;
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(csv_err)?;
        let row = i + 1;
        let geoid: GeoId = field(&record, geoid_idx, row)?.parse()?;

        let result = codec.decode(geoid);
        let status = RowStatus::of(&result);
        let position = result.unwrap_or_else(|e| {
            log::debug!("row {} GeoID {} kept as sentinel: {}", row, geoid, e);
            Position::SENTINEL
        });
        if status == RowStatus::Ok {
            decoded += 1;
        }

        let leading = [
            position.x.to_string(),
            position.y.to_string(),
            position.z.to_string(),
            status.to_string(),
        ];
        writer
            .write_record(leading.iter().map(String::as_str).chain(record.iter()))
            .map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| GeoIdError::IoError(e.to_string()))?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::terrain::{FlatTerrain, NoTerrain};
    use std::fs;
    use tempfile::tempdir;

    fn convert_positions(contents: &str) -> Result<(usize, Vec<String>), GeoIdError> {
        let dir = tempdir().map_err(|e| GeoIdError::IoError(e.to_string()))?;
        let input = dir.path().join("claims.csv");
        let output = dir.path().join("claims_geoid.csv");
        fs::write(&input, contents).map_err(|e| GeoIdError::IoError(e.to_string()))?;

        let encoded = positions_csv_to_geoids(&input, &output, "x", "y")?;
        let written = fs::read_to_string(&output).map_err(|e| GeoIdError::IoError(e.to_string()))?;
        Ok((encoded, written.lines().map(str::to_string).collect()))
    }

    fn convert_geoids<R: TerrainHeightResolver>(
        contents: &str,
        codec: &GeoIdCodec<R>,
    ) -> Result<(usize, Vec<String>), GeoIdError> {
        let dir = tempdir().map_err(|e| GeoIdError::IoError(e.to_string()))?;
        let input = dir.path().join("geoids.csv");
        let output = dir.path().join("positions.csv");
        fs::write(&input, contents).map_err(|e| GeoIdError::IoError(e.to_string()))?;

        let decoded = geoid_csv_to_positions(&input, &output, "geoid", codec)?;
        let written = fs::read_to_string(&output).map_err(|e| GeoIdError::IoError(e.to_string()))?;
        Ok((decoded, written.lines().map(str::to_string).collect()))
    }

    #[test]
    fn test_positions_to_geoids() -> Result<(), GeoIdError> {
        let (encoded, lines) = convert_positions("owner,x,y\nalice,0,0\nbob,2000,2000\n")?;
        assert_eq!(encoded, 2);
        assert_eq!(
            lines,
            vec![
                "geoid,status,owner,x,y",
                "117047039,ok,alice,0,0",
                "118089972,ok,bob,2000,2000",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unencodable_rows_are_kept_with_status() -> Result<(), GeoIdError> {
        let (encoded, lines) =
            convert_positions("x,y\n0,0\nNaN,0\n0,inf\n-1022,0\n9000,0\n")?;
        assert_eq!(encoded, 1);
        assert_eq!(lines[1], "117047039,ok,0,0");
        assert_eq!(lines[2], ",non_finite,NaN,0");
        assert_eq!(lines[3], ",non_finite,0,inf");
        assert_eq!(lines[4], ",out_of_range,-1022,0");
        assert_eq!(lines[5], ",out_of_range,9000,0");
        Ok(())
    }

    #[test]
    fn test_non_numeric_position_fails_with_row() {
        match convert_positions("x,y\n0,0\nnorth,0\n") {
            Err(GeoIdError::CsvError(msg)) => assert!(msg.starts_with("Row 2:")),
            other => panic!("Expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column() {
        assert!(matches!(
            convert_positions("a,b\n1,2\n"),
            Err(GeoIdError::CsvError(_))
        ));
    }

    #[test]
    fn test_geoids_to_positions() -> Result<(), GeoIdError> {
        let codec = GeoIdCodec::new(FlatTerrain::new(25.0));
        let contents = format!("geoid,owner\n117047039,alice\n{},mallory\n", 999u32 << 18);
        let (decoded, lines) = convert_geoids(&contents, &codec)?;

        assert_eq!(decoded, 1);
        assert_eq!(lines[0], "x,y,z,status,geoid,owner");
        assert_eq!(lines[1], "0,0,25,ok,117047039,alice");
        assert_eq!(lines[2], "-1,-1,-1,invalid_tile,261881856,mallory");
        Ok(())
    }

    #[test]
    fn test_geoids_without_terrain() -> Result<(), GeoIdError> {
        let codec = GeoIdCodec::new(NoTerrain);
        let (decoded, lines) = convert_geoids("geoid\n117047039\n", &codec)?;
        assert_eq!(decoded, 0);
        assert_eq!(lines[1], "-1,-1,-1,no_terrain,117047039");
        Ok(())
    }

    #[test]
    fn test_bad_geoid_text_fails() {
        let codec = GeoIdCodec::new(FlatTerrain::new(0.0));
        assert!(matches!(
            convert_geoids("geoid\nabc\n", &codec),
            Err(GeoIdError::InvalidGeoId(_))
        ));
    }

    #[test]
    fn test_round_trip_through_files() -> Result<(), GeoIdError> {
        let dir = tempdir().map_err(|e| GeoIdError::IoError(e.to_string()))?;
        let positions = dir.path().join("claims.csv");
        let geoids = dir.path().join("claims_geoid.csv");
        let restored = dir.path().join("claims_xyz.csv");
        fs::write(&positions, "x,y\n2001.5,2003.9\n")
            .map_err(|e| GeoIdError::IoError(e.to_string()))?;

        positions_csv_to_geoids(&positions, &geoids, "x", "y")?;
        let codec = GeoIdCodec::new(FlatTerrain::new(3.0));
        geoid_csv_to_positions(&geoids, &restored, "geoid", &codec)?;

        let written =
            fs::read_to_string(&restored).map_err(|e| GeoIdError::IoError(e.to_string()))?;
        assert_eq!(written.lines().nth(1), Some("2000,2000,3,ok,118089972,ok,2001.5,2003.9"));
        Ok(())
    }
}
