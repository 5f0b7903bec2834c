// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Table-level integrity rules.
//!
//! Every function here is a pure check over fully loaded tables. Checks stop
//! at the first violation; callers run them before any query so that query
//! code can rely on unique identities and resolvable references.

use crate::error::DomainError;
use crate::types::{
    Constructor, ConstructorId, Driver, DriverId, DriverStanding, LapRecord, Race, RaceId,
    RaceResult, Season,
};
use std::collections::HashSet;

/// Validates that driver ids are unique.
///
/// # Errors
///
/// Returns `DomainError::DuplicateDriver` for the first repeated id.
pub fn validate_driver_ids_unique(drivers: &[Driver]) -> Result<(), DomainError> {
    let mut seen: HashSet<DriverId> = HashSet::new();
    for driver in drivers {
        if !seen.insert(driver.id) {
            return Err(DomainError::DuplicateDriver {
                driver_id: driver.id,
            });
        }
    }
    Ok(())
}

/// Validates that constructor ids are unique.
///
/// # Errors
///
/// Returns `DomainError::DuplicateConstructor` for the first repeated id.
pub fn validate_constructor_ids_unique(constructors: &[Constructor]) -> Result<(), DomainError> {
    let mut seen: HashSet<ConstructorId> = HashSet::new();
    for constructor in constructors {
        if !seen.insert(constructor.id) {
            return Err(DomainError::DuplicateConstructor {
                constructor_id: constructor.id,
            });
        }
    }
    Ok(())
}

/// Validates that race ids are unique and that no (year, name) pair repeats.
///
/// The (year, name) pair backs human-facing race lookup, so a repeat would
/// make resolution ambiguous.
///
/// # Errors
///
/// Returns `DomainError::DuplicateRace` or `DomainError::DuplicateRaceName`
/// for the first violation.
pub fn validate_race_identities_unique(races: &[Race]) -> Result<(), DomainError> {
    let mut seen_ids: HashSet<RaceId> = HashSet::new();
    let mut seen_names: HashSet<(u16, &str)> = HashSet::new();
    for race in races {
        if !seen_ids.insert(race.id) {
            return Err(DomainError::DuplicateRace { race_id: race.id });
        }
        if !seen_names.insert((race.year, race.name.as_str())) {
            return Err(DomainError::DuplicateRaceName {
                year: race.year,
                name: race.name.clone(),
            });
        }
    }
    Ok(())
}

/// Validates that season years are unique.
///
/// # Errors
///
/// Returns `DomainError::DuplicateSeason` for the first repeated year.
pub fn validate_season_years_unique(seasons: &[Season]) -> Result<(), DomainError> {
    let mut seen: HashSet<u16> = HashSet::new();
    for season in seasons {
        if !seen.insert(season.year) {
            return Err(DomainError::DuplicateSeason { year: season.year });
        }
    }
    Ok(())
}

/// Validates the result table against its referenced tables.
///
/// Checks, in order per row: the (race id, driver id) identity is unique,
/// the race and driver references resolve, the constructor reference (when
/// set) resolves, and points are not negative.
///
/// # Errors
///
/// Returns the corresponding `DomainError` for the first violation.
pub fn validate_results(
    results: &[RaceResult],
    races: &[Race],
    drivers: &[Driver],
    constructors: &[Constructor],
) -> Result<(), DomainError> {
    let race_ids: HashSet<RaceId> = races.iter().map(|race| race.id).collect();
    let driver_ids: HashSet<DriverId> = drivers.iter().map(|driver| driver.id).collect();
    let constructor_ids: HashSet<ConstructorId> =
        constructors.iter().map(|constructor| constructor.id).collect();

    let mut seen: HashSet<(RaceId, DriverId)> = HashSet::new();
    for result in results {
        if !seen.insert((result.race_id, result.driver_id)) {
            return Err(DomainError::DuplicateResult {
                race_id: result.race_id,
                driver_id: result.driver_id,
            });
        }
        if !race_ids.contains(&result.race_id) {
            return Err(DomainError::MissingRace {
                race_id: result.race_id,
                source: "results",
            });
        }
        if !driver_ids.contains(&result.driver_id) {
            return Err(DomainError::MissingDriver {
                driver_id: result.driver_id,
                source: "results",
            });
        }
        if let Some(constructor_id) = result.constructor_id
            && !constructor_ids.contains(&constructor_id)
        {
            return Err(DomainError::MissingConstructor {
                constructor_id,
                source: "results",
            });
        }
        if result.points < 0.0 {
            return Err(DomainError::NegativePoints {
                race_id: result.race_id,
                driver_id: result.driver_id,
                points: result.points,
            });
        }
    }
    Ok(())
}

/// Validates the lap table against the race and driver tables.
///
/// # Errors
///
/// Returns `DomainError::DuplicateLap`, `DomainError::MissingRace`, or
/// `DomainError::MissingDriver` for the first violation.
pub fn validate_lap_records(
    laps: &[LapRecord],
    races: &[Race],
    drivers: &[Driver],
) -> Result<(), DomainError> {
    let race_ids: HashSet<RaceId> = races.iter().map(|race| race.id).collect();
    let driver_ids: HashSet<DriverId> = drivers.iter().map(|driver| driver.id).collect();

    let mut seen: HashSet<(RaceId, DriverId, u32)> = HashSet::new();
    for lap in laps {
        if !seen.insert((lap.race_id, lap.driver_id, lap.lap)) {
            return Err(DomainError::DuplicateLap {
                race_id: lap.race_id,
                driver_id: lap.driver_id,
                lap: lap.lap,
            });
        }
        if !race_ids.contains(&lap.race_id) {
            return Err(DomainError::MissingRace {
                race_id: lap.race_id,
                source: "lap_times",
            });
        }
        if !driver_ids.contains(&lap.driver_id) {
            return Err(DomainError::MissingDriver {
                driver_id: lap.driver_id,
                source: "lap_times",
            });
        }
    }
    Ok(())
}

/// Validates the standings table against the race and driver tables.
///
/// # Errors
///
/// Returns `DomainError::DuplicateStanding`, `DomainError::MissingRace`, or
/// `DomainError::MissingDriver` for the first violation.
pub fn validate_standings(
    standings: &[DriverStanding],
    races: &[Race],
    drivers: &[Driver],
) -> Result<(), DomainError> {
    let race_ids: HashSet<RaceId> = races.iter().map(|race| race.id).collect();
    let driver_ids: HashSet<DriverId> = drivers.iter().map(|driver| driver.id).collect();

    let mut seen: HashSet<(RaceId, DriverId)> = HashSet::new();
    for standing in standings {
        if !seen.insert((standing.race_id, standing.driver_id)) {
            return Err(DomainError::DuplicateStanding {
                race_id: standing.race_id,
                driver_id: standing.driver_id,
            });
        }
        if !race_ids.contains(&standing.race_id) {
            return Err(DomainError::MissingRace {
                race_id: standing.race_id,
                source: "driver_standings",
            });
        }
        if !driver_ids.contains(&standing.driver_id) {
            return Err(DomainError::MissingDriver {
                driver_id: standing.driver_id,
                source: "driver_standings",
            });
        }
    }
    Ok(())
}
