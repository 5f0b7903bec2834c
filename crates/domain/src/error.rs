// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ConstructorId, DriverId, RaceId};

/// Errors raised by lookups and dataset integrity checks.
///
/// Lookup failures are propagated to the caller; the engine never substitutes
/// a default value for a missing entity. Integrity violations are surfaced
/// rather than silently dropped, since dropped rows corrupt aggregate totals.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No driver matches the given full name.
    DriverNotFound {
        /// The full name that was looked up.
        full_name: String,
    },
    /// No constructor matches the given name.
    ConstructorNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// No race matches the given (year, name) pair.
    RaceNotFound {
        /// The year that was looked up.
        year: u16,
        /// The race name that was looked up.
        name: String,
    },
    /// No result row of the race holds a winning classification.
    WinnerNotFound {
        /// The race whose winner was requested.
        race_id: RaceId,
    },
    /// No result row of the race started from grid slot 1.
    PolePositionNotFound {
        /// The race whose pole sitter was requested.
        race_id: RaceId,
    },
    /// A row references a race id absent from the race table.
    MissingRace {
        /// The dangling race id.
        race_id: RaceId,
        /// The table holding the dangling reference.
        source: &'static str,
    },
    /// A row references a driver id absent from the driver table.
    MissingDriver {
        /// The dangling driver id.
        driver_id: DriverId,
        /// The table holding the dangling reference.
        source: &'static str,
    },
    /// A row references a constructor id absent from the constructor table.
    MissingConstructor {
        /// The dangling constructor id.
        constructor_id: ConstructorId,
        /// The table holding the dangling reference.
        source: &'static str,
    },
    /// Two driver rows share one id.
    DuplicateDriver {
        /// The duplicated id.
        driver_id: DriverId,
    },
    /// Two constructor rows share one id.
    DuplicateConstructor {
        /// The duplicated id.
        constructor_id: ConstructorId,
    },
    /// Two race rows share one id.
    DuplicateRace {
        /// The duplicated id.
        race_id: RaceId,
    },
    /// Two race rows share one (year, name) pair, breaking name lookup.
    DuplicateRaceName {
        /// The duplicated year.
        year: u16,
        /// The duplicated race name.
        name: String,
    },
    /// Two season rows share one year.
    DuplicateSeason {
        /// The duplicated year.
        year: u16,
    },
    /// Two result rows share one (race id, driver id) identity.
    DuplicateResult {
        /// The race id of the duplicated row.
        race_id: RaceId,
        /// The driver id of the duplicated row.
        driver_id: DriverId,
    },
    /// Two lap rows share one (race id, driver id, lap) identity.
    DuplicateLap {
        /// The race id of the duplicated row.
        race_id: RaceId,
        /// The driver id of the duplicated row.
        driver_id: DriverId,
        /// The lap number of the duplicated row.
        lap: u32,
    },
    /// Two standing rows share one (race id, driver id) identity.
    DuplicateStanding {
        /// The race id of the duplicated row.
        race_id: RaceId,
        /// The driver id of the duplicated row.
        driver_id: DriverId,
    },
    /// A result row carries negative points.
    NegativePoints {
        /// The race id of the offending row.
        race_id: RaceId,
        /// The driver id of the offending row.
        driver_id: DriverId,
        /// The offending points value.
        points: f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DriverNotFound { full_name } => {
                write!(f, "Driver '{full_name}' not found")
            }
            Self::ConstructorNotFound { name } => {
                write!(f, "Constructor '{name}' not found")
            }
            Self::RaceNotFound { year, name } => {
                write!(f, "Race '{name}' not found in year {year}")
            }
            Self::WinnerNotFound { race_id } => {
                write!(f, "Race {race_id} has no result with a winning position")
            }
            Self::PolePositionNotFound { race_id } => {
                write!(f, "Race {race_id} has no result starting from grid slot 1")
            }
            Self::MissingRace { race_id, source } => {
                write!(
                    f,
                    "{source} row references race {race_id} absent from the race table"
                )
            }
            Self::MissingDriver { driver_id, source } => {
                write!(
                    f,
                    "{source} row references driver {driver_id} absent from the driver table"
                )
            }
            Self::MissingConstructor {
                constructor_id,
                source,
            } => {
                write!(
                    f,
                    "{source} row references constructor {constructor_id} absent from the constructor table"
                )
            }
            Self::DuplicateDriver { driver_id } => {
                write!(f, "Driver id {driver_id} appears more than once")
            }
            Self::DuplicateConstructor { constructor_id } => {
                write!(f, "Constructor id {constructor_id} appears more than once")
            }
            Self::DuplicateRace { race_id } => {
                write!(f, "Race id {race_id} appears more than once")
            }
            Self::DuplicateRaceName { year, name } => {
                write!(f, "Race '{name}' appears more than once in year {year}")
            }
            Self::DuplicateSeason { year } => {
                write!(f, "Season {year} appears more than once")
            }
            Self::DuplicateResult { race_id, driver_id } => {
                write!(
                    f,
                    "Result for driver {driver_id} in race {race_id} appears more than once"
                )
            }
            Self::DuplicateLap {
                race_id,
                driver_id,
                lap,
            } => {
                write!(
                    f,
                    "Lap {lap} for driver {driver_id} in race {race_id} appears more than once"
                )
            }
            Self::DuplicateStanding { race_id, driver_id } => {
                write!(
                    f,
                    "Standing for driver {driver_id} after race {race_id} appears more than once"
                )
            }
            Self::NegativePoints {
                race_id,
                driver_id,
                points,
            } => {
                write!(
                    f,
                    "Result for driver {driver_id} in race {race_id} carries negative points ({points})"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
