// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Classification, Constructor, ConstructorId, DomainError, Driver, DriverId, DriverStanding,
    LapRecord, Race, RaceId, RaceResult, Season, validate_constructor_ids_unique,
    validate_driver_ids_unique, validate_lap_records, validate_race_identities_unique,
    validate_results, validate_season_years_unique, validate_standings,
};

fn create_test_driver(id: u32) -> Driver {
    Driver::new(
        DriverId::new(id),
        String::from("Test"),
        format!("Driver{id}"),
        None,
        String::from("British"),
    )
}

fn create_test_constructor(id: u32) -> Constructor {
    Constructor::new(
        ConstructorId::new(id),
        format!("Constructor {id}"),
        String::from("British"),
    )
}

fn create_test_race(id: u32, year: u16, name: &str) -> Race {
    Race::new(RaceId::new(id), year, String::from(name), 1)
}

fn create_test_result(race: u32, driver: u32, constructor: Option<u32>) -> RaceResult {
    RaceResult::new(
        RaceId::new(race),
        DriverId::new(driver),
        constructor.map(ConstructorId::new),
        Classification::parse("1"),
        1,
        25.0,
    )
}

#[test]
fn test_unique_driver_ids_pass() {
    let drivers: Vec<Driver> = vec![create_test_driver(1), create_test_driver(2)];
    assert!(validate_driver_ids_unique(&drivers).is_ok());
}

#[test]
fn test_duplicate_driver_id_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1), create_test_driver(1)];

    let result: Result<(), DomainError> = validate_driver_ids_unique(&drivers);
    assert_eq!(
        result,
        Err(DomainError::DuplicateDriver {
            driver_id: DriverId::new(1)
        })
    );
}

#[test]
fn test_duplicate_constructor_id_rejected() {
    let constructors: Vec<Constructor> =
        vec![create_test_constructor(1), create_test_constructor(1)];

    let result: Result<(), DomainError> = validate_constructor_ids_unique(&constructors);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateConstructor { .. })
    ));
}

#[test]
fn test_duplicate_race_id_rejected() {
    let races: Vec<Race> = vec![
        create_test_race(1, 2020, "British Grand Prix"),
        create_test_race(1, 2021, "Monaco Grand Prix"),
    ];

    let result: Result<(), DomainError> = validate_race_identities_unique(&races);
    assert_eq!(
        result,
        Err(DomainError::DuplicateRace {
            race_id: RaceId::new(1)
        })
    );
}

#[test]
fn test_duplicate_race_year_name_pair_rejected() {
    let races: Vec<Race> = vec![
        create_test_race(1, 2020, "British Grand Prix"),
        create_test_race(2, 2020, "British Grand Prix"),
    ];

    let result: Result<(), DomainError> = validate_race_identities_unique(&races);
    assert_eq!(
        result,
        Err(DomainError::DuplicateRaceName {
            year: 2020,
            name: String::from("British Grand Prix"),
        })
    );
}

#[test]
fn test_same_race_name_in_different_years_passes() {
    let races: Vec<Race> = vec![
        create_test_race(1, 2020, "British Grand Prix"),
        create_test_race(2, 2021, "British Grand Prix"),
    ];

    assert!(validate_race_identities_unique(&races).is_ok());
}

#[test]
fn test_duplicate_season_year_rejected() {
    let seasons: Vec<Season> = vec![Season::new(2020), Season::new(2020)];

    let result: Result<(), DomainError> = validate_season_years_unique(&seasons);
    assert_eq!(result, Err(DomainError::DuplicateSeason { year: 2020 }));
}

#[test]
fn test_valid_results_pass() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let constructors: Vec<Constructor> = vec![create_test_constructor(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![create_test_result(1, 1, Some(1))];

    assert!(validate_results(&results, &races, &drivers, &constructors).is_ok());
}

#[test]
fn test_result_without_constructor_passes() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![create_test_result(1, 1, None)];

    assert!(validate_results(&results, &races, &drivers, &[]).is_ok());
}

#[test]
fn test_result_referencing_unknown_race_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![create_test_result(99, 1, None)];

    let result: Result<(), DomainError> = validate_results(&results, &races, &drivers, &[]);
    assert_eq!(
        result,
        Err(DomainError::MissingRace {
            race_id: RaceId::new(99),
            source: "results",
        })
    );
}

#[test]
fn test_result_referencing_unknown_driver_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![create_test_result(1, 99, None)];

    let result: Result<(), DomainError> = validate_results(&results, &races, &drivers, &[]);
    assert!(matches!(result, Err(DomainError::MissingDriver { .. })));
}

#[test]
fn test_result_referencing_unknown_constructor_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![create_test_result(1, 1, Some(99))];

    let result: Result<(), DomainError> = validate_results(&results, &races, &drivers, &[]);
    assert!(matches!(
        result,
        Err(DomainError::MissingConstructor { .. })
    ));
}

#[test]
fn test_duplicate_result_identity_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let constructors: Vec<Constructor> = vec![create_test_constructor(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let results: Vec<RaceResult> = vec![
        create_test_result(1, 1, Some(1)),
        create_test_result(1, 1, Some(1)),
    ];

    let result: Result<(), DomainError> =
        validate_results(&results, &races, &drivers, &constructors);
    assert!(matches!(result, Err(DomainError::DuplicateResult { .. })));
}

#[test]
fn test_negative_points_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let mut offending: RaceResult = create_test_result(1, 1, None);
    offending.points = -1.0;

    let result: Result<(), DomainError> = validate_results(&[offending], &races, &drivers, &[]);
    assert!(matches!(result, Err(DomainError::NegativePoints { .. })));
}

#[test]
fn test_valid_lap_records_pass() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let laps: Vec<LapRecord> = vec![
        LapRecord::new(RaceId::new(1), DriverId::new(1), 1, 1),
        LapRecord::new(RaceId::new(1), DriverId::new(1), 2, 1),
    ];

    assert!(validate_lap_records(&laps, &races, &drivers).is_ok());
}

#[test]
fn test_duplicate_lap_identity_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let laps: Vec<LapRecord> = vec![
        LapRecord::new(RaceId::new(1), DriverId::new(1), 1, 1),
        LapRecord::new(RaceId::new(1), DriverId::new(1), 1, 2),
    ];

    let result: Result<(), DomainError> = validate_lap_records(&laps, &races, &drivers);
    assert!(matches!(result, Err(DomainError::DuplicateLap { .. })));
}

#[test]
fn test_lap_referencing_unknown_race_rejected() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let laps: Vec<LapRecord> = vec![LapRecord::new(RaceId::new(9), DriverId::new(1), 1, 1)];

    let result: Result<(), DomainError> = validate_lap_records(&laps, &[], &drivers);
    assert_eq!(
        result,
        Err(DomainError::MissingRace {
            race_id: RaceId::new(9),
            source: "lap_times",
        })
    );
}

#[test]
fn test_valid_standings_pass() {
    let drivers: Vec<Driver> = vec![create_test_driver(1)];
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let standings: Vec<DriverStanding> =
        vec![DriverStanding::new(RaceId::new(1), DriverId::new(1), 25.0, 1, 1)];

    assert!(validate_standings(&standings, &races, &drivers).is_ok());
}

#[test]
fn test_standing_referencing_unknown_driver_rejected() {
    let races: Vec<Race> = vec![create_test_race(1, 2020, "British Grand Prix")];
    let standings: Vec<DriverStanding> =
        vec![DriverStanding::new(RaceId::new(1), DriverId::new(5), 25.0, 1, 1)];

    let result: Result<(), DomainError> = validate_standings(&standings, &races, &[]);
    assert_eq!(
        result,
        Err(DomainError::MissingDriver {
            driver_id: DriverId::new(5),
            source: "driver_standings",
        })
    );
}
