// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Dataset;
use pitwall_domain::{
    Classification, Constructor, ConstructorId, Driver, DriverId, DriverStanding, LapRecord, Race,
    RaceId, RaceResult, Season,
};

pub fn create_test_driver(id: u32, forename: &str, surname: &str, code: Option<&str>) -> Driver {
    Driver::new(
        DriverId::new(id),
        String::from(forename),
        String::from(surname),
        code.map(String::from),
        String::from("British"),
    )
}

pub fn create_test_constructor(id: u32, name: &str) -> Constructor {
    Constructor::new(ConstructorId::new(id), String::from(name), String::from("British"))
}

pub fn create_test_race(id: u32, year: u16, name: &str, round: u32) -> Race {
    Race::new(RaceId::new(id), year, String::from(name), round)
}

pub fn create_test_result(
    race: u32,
    driver: u32,
    constructor: u32,
    position: &str,
    grid: u32,
    points: f64,
) -> RaceResult {
    RaceResult::new(
        RaceId::new(race),
        DriverId::new(driver),
        Some(ConstructorId::new(constructor)),
        Classification::parse(position),
        grid,
        points,
    )
}

pub fn create_test_lap(race: u32, driver: u32, lap: u32, position: u32) -> LapRecord {
    LapRecord::new(RaceId::new(race), DriverId::new(driver), lap, position)
}

pub fn create_test_standing(
    race: u32,
    driver: u32,
    points: f64,
    position: u32,
    wins: u32,
) -> DriverStanding {
    DriverStanding::new(RaceId::new(race), DriverId::new(driver), points, position, wins)
}

/// Two seasons, three drivers (one without any results), two constructors.
///
/// 2020 British Grand Prix: Hamilton wins from pole, Verstappen second.
/// 2021 Monaco Grand Prix: Verstappen wins from pole, Hamilton third.
pub fn create_test_dataset() -> Dataset {
    let drivers: Vec<Driver> = vec![
        create_test_driver(1, "Lewis", "Hamilton", Some("HAM")),
        create_test_driver(2, "Max", "Verstappen", Some("VER")),
        create_test_driver(3, "Nino", "Farina", None),
    ];
    let constructors: Vec<Constructor> = vec![
        create_test_constructor(10, "Mercedes"),
        create_test_constructor(11, "Red Bull"),
    ];
    let races: Vec<Race> = vec![
        create_test_race(100, 2020, "British Grand Prix", 1),
        create_test_race(101, 2021, "Monaco Grand Prix", 1),
    ];
    let results: Vec<RaceResult> = vec![
        create_test_result(100, 1, 10, "1", 1, 25.0),
        create_test_result(100, 2, 11, "2", 2, 18.0),
        create_test_result(101, 1, 10, "3", 2, 15.0),
        create_test_result(101, 2, 11, "1", 1, 25.0),
    ];
    let standings: Vec<DriverStanding> = vec![
        create_test_standing(100, 1, 25.0, 1, 1),
        create_test_standing(100, 2, 18.0, 2, 0),
        create_test_standing(101, 1, 40.0, 2, 1),
        create_test_standing(101, 2, 43.0, 1, 1),
    ];
    let lap_times: Vec<LapRecord> = vec![
        create_test_lap(100, 1, 1, 1),
        create_test_lap(100, 2, 1, 2),
        create_test_lap(100, 1, 2, 1),
        create_test_lap(100, 2, 2, 2),
    ];
    let seasons: Vec<Season> = vec![Season::new(2020), Season::new(2021)];

    Dataset::new(
        drivers,
        constructors,
        races,
        results,
        standings,
        lap_times,
        seasons,
    )
    .expect("fixture dataset is valid")
}
