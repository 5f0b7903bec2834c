// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-lap position reconstruction for a single race.
//!
//! The timeline drives a position-over-time view: one row per driver per
//! completed lap. Retired drivers simply stop appearing; no rows are
//! synthesized for them. Inverting the position axis (1 drawn at the top) is
//! the consuming layer's concern, not part of the output contract.

use pitwall_domain::{DomainError, Driver, DriverId, LapRecord, RaceId, RaceResult};
use serde::{Deserialize, Serialize};

/// One driver's position at the end of one lap, with the label the position
/// trace is drawn under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapPosition {
    /// The lap number, starting at 1.
    pub lap: u32,
    /// The driver who completed the lap.
    pub driver_id: DriverId,
    /// The driver's broadcast code, or surname when no code is assigned.
    pub driver_label: String,
    /// The driver's position at the end of the lap (1 = leading).
    pub position: u32,
}

/// Reconstructs the lap-by-lap position series of one race.
///
/// Returns the race's lap records joined with driver identity, ordered by
/// lap ascending and position ascending within each lap. A race id with no
/// lap data yields an empty series.
///
/// # Arguments
///
/// * `lap_times` - The lap position table
/// * `drivers` - The driver table, for label resolution
/// * `race_id` - The race to reconstruct
///
/// # Errors
///
/// Returns `DomainError::MissingDriver` if a lap row references a driver
/// absent from the driver table.
pub fn race_timeline(
    lap_times: &[LapRecord],
    drivers: &[Driver],
    race_id: RaceId,
) -> Result<Vec<LapPosition>, DomainError> {
    let mut entries: Vec<LapPosition> = Vec::new();
    for record in lap_times.iter().filter(|record| record.race_id == race_id) {
        let driver: &Driver = drivers
            .iter()
            .find(|driver| driver.id == record.driver_id)
            .ok_or(DomainError::MissingDriver {
                driver_id: record.driver_id,
                source: "lap_times",
            })?;
        entries.push(LapPosition {
            lap: record.lap,
            driver_id: record.driver_id,
            driver_label: driver.short_label().to_string(),
            position: record.position,
        });
    }

    entries.sort_by_key(|entry| (entry.lap, entry.position));
    Ok(entries)
}

/// The driver who won the race.
///
/// # Arguments
///
/// * `results` - The result table
/// * `drivers` - The driver table
/// * `race_id` - The race whose winner is requested
///
/// # Errors
///
/// Returns `DomainError::WinnerNotFound` when no result row of the race
/// holds a winning classification (incomplete data included), and
/// `DomainError::MissingDriver` if the winning row references a driver
/// absent from the driver table. Never falls back to a different driver.
pub fn race_winner<'a>(
    results: &[RaceResult],
    drivers: &'a [Driver],
    race_id: RaceId,
) -> Result<&'a Driver, DomainError> {
    let winning: &RaceResult = results
        .iter()
        .find(|result| result.race_id == race_id && result.classification.is_win())
        .ok_or(DomainError::WinnerNotFound { race_id })?;

    drivers
        .iter()
        .find(|driver| driver.id == winning.driver_id)
        .ok_or(DomainError::MissingDriver {
            driver_id: winning.driver_id,
            source: "results",
        })
}

/// The driver who started the race from pole position (grid slot 1).
///
/// # Arguments
///
/// * `results` - The result table
/// * `drivers` - The driver table
/// * `race_id` - The race whose pole sitter is requested
///
/// # Errors
///
/// Returns `DomainError::PolePositionNotFound` when no result row of the
/// race started from grid slot 1, and `DomainError::MissingDriver` if the
/// matching row references a driver absent from the driver table.
pub fn pole_position_driver<'a>(
    results: &[RaceResult],
    drivers: &'a [Driver],
    race_id: RaceId,
) -> Result<&'a Driver, DomainError> {
    let pole: &RaceResult = results
        .iter()
        .find(|result| result.race_id == race_id && result.grid == 1)
        .ok_or(DomainError::PolePositionNotFound { race_id })?;

    drivers
        .iter()
        .find(|driver| driver.id == pole.driver_id)
        .ok_or(DomainError::MissingDriver {
            driver_id: pole.driver_id,
            source: "results",
        })
}
