// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pitwall_domain::{
    Constructor, ConstructorId, DomainError, Driver, DriverId, DriverStanding, LapRecord, Race,
    RaceId, RaceResult, Season, validate_constructor_ids_unique, validate_driver_ids_unique,
    validate_lap_records, validate_race_identities_unique, validate_results,
    validate_season_years_unique, validate_standings,
};

/// The immutable session snapshot of every loaded table.
///
/// A `Dataset` is constructed once per session and never mutated. Construction
/// runs every integrity rule, so holders of a `Dataset` query tables whose
/// identities are unique and whose references all resolve. Queries over a
/// shared snapshot need no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    drivers: Vec<Driver>,
    constructors: Vec<Constructor>,
    races: Vec<Race>,
    results: Vec<RaceResult>,
    standings: Vec<DriverStanding>,
    lap_times: Vec<LapRecord>,
    seasons: Vec<Season>,
}

impl Dataset {
    /// Assembles a dataset from fully loaded tables.
    ///
    /// # Arguments
    ///
    /// * `drivers` - The driver table
    /// * `constructors` - The constructor table
    /// * `races` - The race table
    /// * `results` - The result table
    /// * `standings` - The per-race championship standings table
    /// * `lap_times` - The lap position table
    /// * `seasons` - The season table
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` raised by the integrity rules:
    /// duplicated identities, dangling references, or negative points.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        drivers: Vec<Driver>,
        constructors: Vec<Constructor>,
        races: Vec<Race>,
        results: Vec<RaceResult>,
        standings: Vec<DriverStanding>,
        lap_times: Vec<LapRecord>,
        seasons: Vec<Season>,
    ) -> Result<Self, DomainError> {
        validate_driver_ids_unique(&drivers)?;
        validate_constructor_ids_unique(&constructors)?;
        validate_race_identities_unique(&races)?;
        validate_season_years_unique(&seasons)?;
        validate_results(&results, &races, &drivers, &constructors)?;
        validate_lap_records(&lap_times, &races, &drivers)?;
        validate_standings(&standings, &races, &drivers)?;

        Ok(Self {
            drivers,
            constructors,
            races,
            results,
            standings,
            lap_times,
            seasons,
        })
    }

    /// The driver table, in load order.
    #[must_use]
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// The constructor table, in load order.
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// The race table, in load order.
    #[must_use]
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    /// The result table, in load order.
    #[must_use]
    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    /// The per-race championship standings table, in load order.
    #[must_use]
    pub fn standings(&self) -> &[DriverStanding] {
        &self.standings
    }

    /// The lap position table, in load order.
    #[must_use]
    pub fn lap_times(&self) -> &[LapRecord] {
        &self.lap_times
    }

    /// The season table, in load order.
    #[must_use]
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Looks up a driver by id.
    #[must_use]
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    /// Looks up a constructor by id.
    #[must_use]
    pub fn constructor(&self, id: ConstructorId) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|constructor| constructor.id == id)
    }

    /// Looks up a race by id.
    #[must_use]
    pub fn race(&self, id: RaceId) -> Option<&Race> {
        self.races.iter().find(|race| race.id == id)
    }

    /// The selectable years, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.seasons.iter().map(|season| season.year).collect();
        years.sort_unstable();
        years
    }
}
