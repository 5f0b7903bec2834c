// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-table CSV parsing.
//!
//! Header matching is case-insensitive, whitespace-tolerant, and
//! order-independent; extra columns are ignored. The dataset's `\N` null
//! marker reads as an absent value for optional fields, and the finishing
//! position is normalized into the tagged classification instead of being
//! forced into an integer.

use crate::error::LoaderError;
use csv::StringRecord;
use pitwall_domain::{
    Classification, Constructor, ConstructorId, Driver, DriverId, DriverStanding, LapRecord, Race,
    RaceId, RaceResult, Season,
};
use std::collections::HashMap;
use std::io::Read;

/// Canonical driver table file name.
pub const DRIVERS_FILE: &str = "drivers.csv";
/// Canonical constructor table file name.
pub const CONSTRUCTORS_FILE: &str = "constructors.csv";
/// Canonical race table file name.
pub const RACES_FILE: &str = "races.csv";
/// Canonical result table file name.
pub const RESULTS_FILE: &str = "results.csv";
/// Canonical championship standings table file name.
pub const STANDINGS_FILE: &str = "driver_standings.csv";
/// Canonical lap position table file name.
pub const LAP_TIMES_FILE: &str = "lap_times.csv";
/// Canonical season table file name.
pub const SEASONS_FILE: &str = "seasons.csv";

/// The dataset's null marker.
const NULL_MARKER: &str = "\\N";

const DRIVER_HEADERS: &[&str] = &["driverId", "forename", "surname", "nationality"];
const CONSTRUCTOR_HEADERS: &[&str] = &["constructorId", "name", "nationality"];
const RACE_HEADERS: &[&str] = &["raceId", "year", "name", "round"];
const RESULT_HEADERS: &[&str] = &["raceId", "driverId", "position", "grid", "points"];
const STANDING_HEADERS: &[&str] = &["raceId", "driverId", "points", "position", "wins"];
const LAP_TIME_HEADERS: &[&str] = &["raceId", "driverId", "lap", "position"];
const SEASON_HEADERS: &[&str] = &["year"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Column lookup for one file, built from its validated header row.
struct HeaderMap {
    file: &'static str,
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Reads and validates the header row of `reader`.
    fn from_reader<R: Read>(
        file: &'static str,
        reader: &mut csv::Reader<R>,
        required: &[&str],
    ) -> Result<Self, LoaderError> {
        let headers: StringRecord = reader
            .headers()
            .map_err(|source| LoaderError::Csv { file, source })?
            .clone();

        let mut columns: HashMap<String, usize> = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            columns.insert(normalize_header(header), index);
        }

        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|name| !columns.contains_key(&normalize_header(name)))
            .collect();
        if !missing.is_empty() {
            return Err(LoaderError::MissingHeaders {
                file,
                missing: missing.join(", "),
            });
        }

        Ok(Self { file, columns })
    }

    /// The trimmed field value; empty cells read as absent.
    fn get<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.columns
            .get(&normalize_header(name))
            .and_then(|&index| record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// As [`HeaderMap::get`], with the `\N` null marker also reading as
    /// absent.
    fn optional<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.get(record, name).filter(|value| *value != NULL_MARKER)
    }

    /// The field value, required to be present and non-empty.
    fn required<'r>(
        &self,
        record: &'r StringRecord,
        row: usize,
        field: &'static str,
    ) -> Result<&'r str, LoaderError> {
        self.get(record, field).ok_or(LoaderError::InvalidField {
            file: self.file,
            row,
            field,
            message: String::from("required field is missing or empty"),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    file: &'static str,
    row: usize,
    field: &'static str,
    raw: &str,
) -> Result<T, LoaderError> {
    raw.parse::<T>().map_err(|_| LoaderError::InvalidField {
        file,
        row,
        field,
        message: format!("invalid number '{raw}'"),
    })
}

fn parse_points(
    file: &'static str,
    row: usize,
    field: &'static str,
    raw: &str,
) -> Result<f64, LoaderError> {
    let points: f64 = parse_number(file, row, field, raw)?;
    if points.is_nan() || points < 0.0 {
        return Err(LoaderError::InvalidField {
            file,
            row,
            field,
            message: format!("points must be a non-negative number, got '{raw}'"),
        });
    }
    Ok(points)
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input)
}

fn next_record(
    file: &'static str,
    record: Result<StringRecord, csv::Error>,
) -> Result<StringRecord, LoaderError> {
    record.map_err(|source| LoaderError::Csv { file, source })
}

/// Parses the driver table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, or
/// malformed fields.
pub fn parse_drivers<R: Read>(input: R) -> Result<Vec<Driver>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(DRIVERS_FILE, &mut reader, DRIVER_HEADERS)?;

    let mut drivers: Vec<Driver> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(DRIVERS_FILE, record)?;

        let id: u32 = parse_number(
            DRIVERS_FILE,
            row,
            "driverId",
            map.required(&record, row, "driverId")?,
        )?;
        let forename: String = map.required(&record, row, "forename")?.to_string();
        let surname: String = map.required(&record, row, "surname")?.to_string();
        let nationality: String = map.required(&record, row, "nationality")?.to_string();
        let code: Option<String> = map.optional(&record, "code").map(str::to_string);

        drivers.push(Driver::new(
            DriverId::new(id),
            forename,
            surname,
            code,
            nationality,
        ));
    }
    Ok(drivers)
}

/// Parses the constructor table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, or
/// malformed fields.
pub fn parse_constructors<R: Read>(input: R) -> Result<Vec<Constructor>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap =
        HeaderMap::from_reader(CONSTRUCTORS_FILE, &mut reader, CONSTRUCTOR_HEADERS)?;

    let mut constructors: Vec<Constructor> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(CONSTRUCTORS_FILE, record)?;

        let id: u32 = parse_number(
            CONSTRUCTORS_FILE,
            row,
            "constructorId",
            map.required(&record, row, "constructorId")?,
        )?;
        let name: String = map.required(&record, row, "name")?.to_string();
        let nationality: String = map.required(&record, row, "nationality")?.to_string();

        constructors.push(Constructor::new(ConstructorId::new(id), name, nationality));
    }
    Ok(constructors)
}

/// Parses the race table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, or
/// malformed fields.
pub fn parse_races<R: Read>(input: R) -> Result<Vec<Race>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(RACES_FILE, &mut reader, RACE_HEADERS)?;

    let mut races: Vec<Race> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(RACES_FILE, record)?;

        let id: u32 = parse_number(
            RACES_FILE,
            row,
            "raceId",
            map.required(&record, row, "raceId")?,
        )?;
        let year: u16 = parse_number(
            RACES_FILE,
            row,
            "year",
            map.required(&record, row, "year")?,
        )?;
        let name: String = map.required(&record, row, "name")?.to_string();
        let round: u32 = parse_number(
            RACES_FILE,
            row,
            "round",
            map.required(&record, row, "round")?,
        )?;

        races.push(Race::new(RaceId::new(id), year, name, round));
    }
    Ok(races)
}

/// Parses the result table.
///
/// The position field is normalized into the tagged classification: numeric
/// values become classified positions, anything else (including the `\N`
/// null marker) is preserved as an unclassified status code.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, malformed
/// numeric fields, or negative points.
pub fn parse_results<R: Read>(input: R) -> Result<Vec<RaceResult>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(RESULTS_FILE, &mut reader, RESULT_HEADERS)?;

    let mut results: Vec<RaceResult> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(RESULTS_FILE, record)?;

        let race_id: u32 = parse_number(
            RESULTS_FILE,
            row,
            "raceId",
            map.required(&record, row, "raceId")?,
        )?;
        let driver_id: u32 = parse_number(
            RESULTS_FILE,
            row,
            "driverId",
            map.required(&record, row, "driverId")?,
        )?;
        let constructor_id: Option<u32> = match map.optional(&record, "constructorId") {
            Some(raw) => Some(parse_number(RESULTS_FILE, row, "constructorId", raw)?),
            None => None,
        };
        let classification: Classification =
            Classification::parse(map.required(&record, row, "position")?);
        let grid: u32 = parse_number(
            RESULTS_FILE,
            row,
            "grid",
            map.required(&record, row, "grid")?,
        )?;
        let points: f64 = parse_points(
            RESULTS_FILE,
            row,
            "points",
            map.required(&record, row, "points")?,
        )?;

        results.push(RaceResult::new(
            RaceId::new(race_id),
            DriverId::new(driver_id),
            constructor_id.map(ConstructorId::new),
            classification,
            grid,
            points,
        ));
    }
    Ok(results)
}

/// Parses the championship standings table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, malformed
/// numeric fields, or negative points.
pub fn parse_standings<R: Read>(input: R) -> Result<Vec<DriverStanding>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(STANDINGS_FILE, &mut reader, STANDING_HEADERS)?;

    let mut standings: Vec<DriverStanding> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(STANDINGS_FILE, record)?;

        let race_id: u32 = parse_number(
            STANDINGS_FILE,
            row,
            "raceId",
            map.required(&record, row, "raceId")?,
        )?;
        let driver_id: u32 = parse_number(
            STANDINGS_FILE,
            row,
            "driverId",
            map.required(&record, row, "driverId")?,
        )?;
        let points: f64 = parse_points(
            STANDINGS_FILE,
            row,
            "points",
            map.required(&record, row, "points")?,
        )?;
        let position: u32 = parse_number(
            STANDINGS_FILE,
            row,
            "position",
            map.required(&record, row, "position")?,
        )?;
        let wins: u32 = parse_number(
            STANDINGS_FILE,
            row,
            "wins",
            map.required(&record, row, "wins")?,
        )?;

        standings.push(DriverStanding::new(
            RaceId::new(race_id),
            DriverId::new(driver_id),
            points,
            position,
            wins,
        ));
    }
    Ok(standings)
}

/// Parses the lap position table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, or
/// malformed numeric fields.
pub fn parse_lap_times<R: Read>(input: R) -> Result<Vec<LapRecord>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(LAP_TIMES_FILE, &mut reader, LAP_TIME_HEADERS)?;

    let mut laps: Vec<LapRecord> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(LAP_TIMES_FILE, record)?;

        let race_id: u32 = parse_number(
            LAP_TIMES_FILE,
            row,
            "raceId",
            map.required(&record, row, "raceId")?,
        )?;
        let driver_id: u32 = parse_number(
            LAP_TIMES_FILE,
            row,
            "driverId",
            map.required(&record, row, "driverId")?,
        )?;
        let lap: u32 = parse_number(
            LAP_TIMES_FILE,
            row,
            "lap",
            map.required(&record, row, "lap")?,
        )?;
        let position: u32 = parse_number(
            LAP_TIMES_FILE,
            row,
            "position",
            map.required(&record, row, "position")?,
        )?;

        laps.push(LapRecord::new(
            RaceId::new(race_id),
            DriverId::new(driver_id),
            lap,
            position,
        ));
    }
    Ok(laps)
}

/// Parses the season table.
///
/// # Errors
///
/// Returns a `LoaderError` on missing headers, CSV syntax errors, or
/// malformed numeric fields.
pub fn parse_seasons<R: Read>(input: R) -> Result<Vec<Season>, LoaderError> {
    let mut reader = csv_reader(input);
    let map: HeaderMap = HeaderMap::from_reader(SEASONS_FILE, &mut reader, SEASON_HEADERS)?;

    let mut seasons: Vec<Season> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row: usize = index + 1;
        let record: StringRecord = next_record(SEASONS_FILE, record)?;

        let year: u16 = parse_number(
            SEASONS_FILE,
            row,
            "year",
            map.required(&record, row, "year")?,
        )?;

        seasons.push(Season::new(year));
    }
    Ok(seasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("driverId"), "driverid");
        assert_eq!(normalize_header("  Driver Id  "), "driver_id");
        assert_eq!(normalize_header("POSITION"), "position");
    }

    #[test]
    fn test_parse_drivers_with_all_fields() {
        let csv: &str = "driverId,driverRef,forename,surname,code,nationality\n\
                         1,hamilton,Lewis,Hamilton,HAM,British\n";

        let drivers: Vec<Driver> = parse_drivers(csv.as_bytes()).expect("valid CSV");

        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].id, DriverId::new(1));
        assert_eq!(drivers[0].full_name(), "Lewis Hamilton");
        assert_eq!(drivers[0].code.as_deref(), Some("HAM"));
        assert_eq!(drivers[0].nationality, "British");
    }

    #[test]
    fn test_parse_drivers_null_code_reads_as_absent() {
        let csv: &str = "driverId,forename,surname,code,nationality\n\
                         579,Nino,Farina,\\N,Italian\n";

        let drivers: Vec<Driver> = parse_drivers(csv.as_bytes()).expect("valid CSV");

        assert_eq!(drivers[0].code, None);
        assert_eq!(drivers[0].short_label(), "Farina");
    }

    #[test]
    fn test_parse_drivers_column_order_independence() {
        let csv: &str = "surname,nationality,driverId,forename\n\
                         Hamilton,British,1,Lewis\n";

        let drivers: Vec<Driver> = parse_drivers(csv.as_bytes()).expect("valid CSV");

        assert_eq!(drivers[0].id, DriverId::new(1));
        assert_eq!(drivers[0].surname, "Hamilton");
    }

    #[test]
    fn test_parse_drivers_missing_required_header() {
        let csv: &str = "driverId,forename\n1,Lewis\n";

        let result: Result<Vec<Driver>, LoaderError> = parse_drivers(csv.as_bytes());
        match result {
            Err(LoaderError::MissingHeaders { file, missing }) => {
                assert_eq!(file, DRIVERS_FILE);
                assert!(missing.contains("surname"));
                assert!(missing.contains("nationality"));
            }
            _ => panic!("Expected MissingHeaders error"),
        }
    }

    #[test]
    fn test_parse_drivers_missing_required_field() {
        let csv: &str = "driverId,forename,surname,nationality\n\
                         1,,Hamilton,British\n";

        let result: Result<Vec<Driver>, LoaderError> = parse_drivers(csv.as_bytes());
        match result {
            Err(LoaderError::InvalidField { row, field, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "forename");
            }
            _ => panic!("Expected InvalidField error"),
        }
    }

    #[test]
    fn test_parse_drivers_rejects_non_numeric_id() {
        let csv: &str = "driverId,forename,surname,nationality\n\
                         abc,Lewis,Hamilton,British\n";

        let result: Result<Vec<Driver>, LoaderError> = parse_drivers(csv.as_bytes());
        match result {
            Err(LoaderError::InvalidField { field, message, .. }) => {
                assert_eq!(field, "driverId");
                assert!(message.contains("abc"));
            }
            _ => panic!("Expected InvalidField error"),
        }
    }

    #[test]
    fn test_parse_constructors() {
        let csv: &str = "constructorId,constructorRef,name,nationality\n\
                         6,ferrari,Ferrari,Italian\n";

        let constructors: Vec<Constructor> =
            parse_constructors(csv.as_bytes()).expect("valid CSV");

        assert_eq!(constructors[0].id, ConstructorId::new(6));
        assert_eq!(constructors[0].name, "Ferrari");
    }

    #[test]
    fn test_parse_races() {
        let csv: &str = "raceId,year,round,name,date\n\
                         1009,2019,1,Australian Grand Prix,2019-03-17\n";

        let races: Vec<Race> = parse_races(csv.as_bytes()).expect("valid CSV");

        assert_eq!(races[0].id, RaceId::new(1009));
        assert_eq!(races[0].year, 2019);
        assert_eq!(races[0].round, 1);
        assert_eq!(races[0].name, "Australian Grand Prix");
    }

    #[test]
    fn test_parse_results_normalizes_position() {
        let csv: &str = "resultId,raceId,driverId,constructorId,grid,position,points\n\
                         1,18,1,1,1,1,10\n\
                         2,18,2,2,5,\\N,0\n";

        let results: Vec<RaceResult> = parse_results(csv.as_bytes()).expect("valid CSV");

        assert_eq!(results[0].classification, Classification::Classified(1));
        assert!(results[0].classification.is_win());
        assert_eq!(
            results[1].classification,
            Classification::Unclassified(String::from("\\N"))
        );
        assert_eq!(results[1].classification.position(), None);
    }

    #[test]
    fn test_parse_results_null_constructor_reads_as_absent() {
        let csv: &str = "raceId,driverId,constructorId,grid,position,points\n\
                         18,1,\\N,1,1,10\n";

        let results: Vec<RaceResult> = parse_results(csv.as_bytes()).expect("valid CSV");

        assert_eq!(results[0].constructor_id, None);
    }

    #[test]
    fn test_parse_results_rejects_negative_points() {
        let csv: &str = "raceId,driverId,constructorId,grid,position,points\n\
                         18,1,1,1,1,10\n\
                         18,2,1,2,2,-4\n";

        let result: Result<Vec<RaceResult>, LoaderError> = parse_results(csv.as_bytes());
        match result {
            Err(LoaderError::InvalidField { row, field, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "points");
            }
            _ => panic!("Expected InvalidField error"),
        }
    }

    #[test]
    fn test_parse_results_rejects_non_numeric_grid() {
        let csv: &str = "raceId,driverId,constructorId,grid,position,points\n\
                         18,1,1,\\N,1,10\n";

        let result: Result<Vec<RaceResult>, LoaderError> = parse_results(csv.as_bytes());
        match result {
            Err(LoaderError::InvalidField { field, .. }) => assert_eq!(field, "grid"),
            _ => panic!("Expected InvalidField error"),
        }
    }

    #[test]
    fn test_parse_standings() {
        let csv: &str = "driverStandingsId,raceId,driverId,points,position,positionText,wins\n\
                         1,18,1,10,1,1,1\n";

        let standings: Vec<DriverStanding> = parse_standings(csv.as_bytes()).expect("valid CSV");

        assert_eq!(standings[0].race_id, RaceId::new(18));
        assert_eq!(standings[0].driver_id, DriverId::new(1));
        assert_eq!(standings[0].position, 1);
        assert_eq!(standings[0].wins, 1);
    }

    #[test]
    fn test_parse_lap_times() {
        let csv: &str = "raceId,driverId,lap,position,time,milliseconds\n\
                         841,20,1,1,1:38.109,98109\n\
                         841,20,2,1,1:33.006,93006\n";

        let laps: Vec<LapRecord> = parse_lap_times(csv.as_bytes()).expect("valid CSV");

        assert_eq!(laps.len(), 2);
        assert_eq!(laps[0].race_id, RaceId::new(841));
        assert_eq!(laps[0].lap, 1);
        assert_eq!(laps[1].lap, 2);
    }

    #[test]
    fn test_parse_seasons() {
        let csv: &str = "year,url\n\
                         2009,http://en.wikipedia.org/wiki/2009_Formula_One_season\n\
                         2008,http://en.wikipedia.org/wiki/2008_Formula_One_season\n";

        let seasons: Vec<Season> = parse_seasons(csv.as_bytes()).expect("valid CSV");

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].year, 2009);
        assert_eq!(seasons[1].year, 2008);
    }
}
