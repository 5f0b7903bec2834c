// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resolution of human-facing selections to internal identifiers.
//!
//! Selection widgets hand back display strings; everything downstream works
//! on ids. These lookups are pure and exact: no normalization, no fuzzy
//! matching, no defaults for misses.

use pitwall_domain::{Constructor, ConstructorId, DomainError, Driver, DriverId, Race, RaceId};

/// Resolves a driver's full name ("forename surname") to their id.
///
/// When several drivers share a full name, the first row in table order wins.
/// This mirrors the selection widget, which lists every duplicate under the
/// same label; a disambiguation rule would change which statistics the label
/// shows, so none is invented here.
///
/// # Arguments
///
/// * `drivers` - The driver table
/// * `full_name` - The selected display name
///
/// # Errors
///
/// Returns `DomainError::DriverNotFound` when no driver matches exactly.
pub fn resolve_driver(drivers: &[Driver], full_name: &str) -> Result<DriverId, DomainError> {
    drivers
        .iter()
        .find(|driver| driver.full_name() == full_name)
        .map(|driver| driver.id)
        .ok_or_else(|| DomainError::DriverNotFound {
            full_name: full_name.to_string(),
        })
}

/// Resolves a constructor name to its id.
///
/// First row in table order wins on duplicate names, as for
/// [`resolve_driver`].
///
/// # Arguments
///
/// * `constructors` - The constructor table
/// * `name` - The selected constructor name
///
/// # Errors
///
/// Returns `DomainError::ConstructorNotFound` when no constructor matches
/// exactly.
pub fn resolve_constructor(
    constructors: &[Constructor],
    name: &str,
) -> Result<ConstructorId, DomainError> {
    constructors
        .iter()
        .find(|constructor| constructor.name == name)
        .map(|constructor| constructor.id)
        .ok_or_else(|| DomainError::ConstructorNotFound {
            name: name.to_string(),
        })
}

/// Resolves a (year, race name) selection to a race id.
///
/// The (year, name) pair is validated unique at dataset construction, so
/// this lookup is unambiguous.
///
/// # Arguments
///
/// * `races` - The race table
/// * `year` - The selected year
/// * `name` - The selected race name
///
/// # Errors
///
/// Returns `DomainError::RaceNotFound` when no race matches exactly.
pub fn resolve_race(races: &[Race], year: u16, name: &str) -> Result<RaceId, DomainError> {
    races
        .iter()
        .find(|race| race.year == year && race.name == name)
        .map(|race| race.id)
        .ok_or_else(|| DomainError::RaceNotFound {
            year,
            name: name.to_string(),
        })
}
