// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod ranking;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use ranking::rank_by;

// Re-export public types
pub use types::{
    Classification, Constructor, ConstructorId, Driver, DriverId, DriverStanding, Entity,
    LapRecord, Race, RaceId, RaceResult, Role, Season,
};
pub use validation::{
    validate_constructor_ids_unique, validate_driver_ids_unique, validate_lap_records,
    validate_race_identities_unique, validate_results, validate_season_years_unique,
    validate_standings,
};
