// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity statistics over the result and race tables.
//!
//! Every operation is a pure function of the tables it receives and is
//! parameterized over an [`Entity`] (an id tagged with its role), so drivers
//! and constructors share one implementation. Entities with no matching rows
//! get well-defined zero values, never errors; a dangling race reference is
//! surfaced as an integrity error, never skipped.

use pitwall_domain::{
    DomainError, DriverStanding, Entity, Race, RaceId, RaceResult, Role, rank_by,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Points accumulated in one championship year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoints {
    /// The championship year.
    pub year: u16,
    /// Points summed over that year's races.
    pub points: f64,
}

/// A fraction of entered races matching a predicate, with the raw counts
/// backing it.
///
/// The counts are carried alongside the rate because displays need both the
/// percentage and the underlying race totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateBreakdown {
    /// The fraction of entered races that matched. 0.0 when no races were
    /// entered.
    pub rate: f64,
    /// Entered races that matched the predicate.
    pub matched: usize,
    /// Entered races that did not match.
    pub unmatched: usize,
}

/// One row of a computed championship table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonStanding {
    /// The ranked entity.
    pub entity: Entity,
    /// Points summed over the season's races.
    pub points: f64,
    /// Wins counted over the season's races.
    pub wins: usize,
}

/// Sums the points an entity earned over every result row.
///
/// An entity with no rows earns 0.0; absence is not an error.
#[must_use]
pub fn total_points(results: &[RaceResult], entity: Entity) -> f64 {
    results
        .iter()
        .filter(|result| entity.matches(result))
        .map(|result| result.points)
        .sum()
}

/// Counts the races an entity won.
#[must_use]
pub fn total_wins(results: &[RaceResult], entity: Entity) -> usize {
    results
        .iter()
        .filter(|result| entity.matches(result) && result.classification.is_win())
        .count()
}

/// Counts the races an entity finished on the podium.
#[must_use]
pub fn total_podiums(results: &[RaceResult], entity: Entity) -> usize {
    results
        .iter()
        .filter(|result| entity.matches(result) && result.classification.is_podium())
        .count()
}

/// Sums an entity's points per championship year.
///
/// Joins the entity's result rows to the race table, groups by year, and
/// sums points. The output is ordered ascending by year; years without
/// participation are omitted rather than zero-filled.
///
/// # Arguments
///
/// * `results` - The result table
/// * `races` - The race table
/// * `entity` - The entity whose rows are summed
///
/// # Errors
///
/// Returns `DomainError::MissingRace` if one of the entity's rows references
/// a race absent from the race table. Skipping such a row would silently
/// understate the total, so it is surfaced instead.
pub fn points_by_year(
    results: &[RaceResult],
    races: &[Race],
    entity: Entity,
) -> Result<Vec<YearPoints>, DomainError> {
    let race_years: HashMap<RaceId, u16> = races.iter().map(|race| (race.id, race.year)).collect();

    let mut by_year: BTreeMap<u16, f64> = BTreeMap::new();
    for result in results.iter().filter(|result| entity.matches(result)) {
        let year: u16 =
            race_years
                .get(&result.race_id)
                .copied()
                .ok_or(DomainError::MissingRace {
                    race_id: result.race_id,
                    source: "results",
                })?;
        *by_year.entry(year).or_insert(0.0) += result.points;
    }

    Ok(by_year
        .into_iter()
        .map(|(year, points)| YearPoints { year, points })
        .collect())
}

/// The fraction of entered races in which the entity scored points.
#[must_use]
pub fn scoring_rate(results: &[RaceResult], entity: Entity) -> RateBreakdown {
    breakdown(results, entity, RaceResult::is_scoring)
}

/// The fraction of entered races the entity won.
#[must_use]
pub fn win_rate(results: &[RaceResult], entity: Entity) -> RateBreakdown {
    breakdown(results, entity, |result| result.classification.is_win())
}

fn breakdown(
    results: &[RaceResult],
    entity: Entity,
    predicate: impl Fn(&RaceResult) -> bool,
) -> RateBreakdown {
    let mut matched: usize = 0;
    let mut entered: usize = 0;
    for result in results.iter().filter(|result| entity.matches(result)) {
        entered += 1;
        if predicate(result) {
            matched += 1;
        }
    }

    // Zero races entered reads as a 0% rate, not a division error.
    #[allow(clippy::cast_precision_loss)]
    let rate: f64 = if entered == 0 {
        0.0
    } else {
        matched as f64 / entered as f64
    };

    RateBreakdown {
        rate,
        matched,
        unmatched: entered - matched,
    }
}

/// Orders entities by their win count, most wins first.
///
/// Entities without a single win are kept with a count of zero, never
/// excluded. Ties keep the input order, so repeated calls over the same
/// tables produce the same sequence.
///
/// # Arguments
///
/// * `entities` - The entity rows to order (drivers, constructors, ...)
/// * `results` - The result table wins are counted from
/// * `entity_of` - Maps an entity row to its tagged id
#[must_use]
pub fn rank_by_wins<'a, T, F>(entities: &'a [T], results: &[RaceResult], entity_of: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Entity,
{
    let mut wins: HashMap<Entity, usize> = HashMap::new();
    for result in results {
        if result.classification.is_win() {
            *wins.entry(Entity::Driver(result.driver_id)).or_insert(0) += 1;
            if let Some(constructor_id) = result.constructor_id {
                *wins.entry(Entity::Constructor(constructor_id)).or_insert(0) += 1;
            }
        }
    }

    rank_by(entities, |entity| {
        wins.get(&entity_of(entity)).copied().unwrap_or(0)
    })
}

/// Computes the championship table for one year and one role.
///
/// Every entity with at least one result row in that year's races appears
/// with its points sum and win count. Rows are ordered by points descending,
/// then wins descending, then first appearance in the result table, so the
/// output is deterministic.
///
/// # Arguments
///
/// * `results` - The result table
/// * `races` - The race table
/// * `year` - The championship year
/// * `role` - Whether rows are grouped by driver or by constructor
///
/// # Errors
///
/// Returns `DomainError::MissingRace` if a result row references a race
/// absent from the race table; such a row belongs to no year and skipping it
/// would corrupt whichever year it was meant for.
pub fn season_standings(
    results: &[RaceResult],
    races: &[Race],
    year: u16,
    role: Role,
) -> Result<Vec<SeasonStanding>, DomainError> {
    let race_years: HashMap<RaceId, u16> = races.iter().map(|race| (race.id, race.year)).collect();

    let mut appearance: Vec<Entity> = Vec::new();
    let mut totals: HashMap<Entity, (f64, usize)> = HashMap::new();
    for result in results {
        let race_year: u16 =
            race_years
                .get(&result.race_id)
                .copied()
                .ok_or(DomainError::MissingRace {
                    race_id: result.race_id,
                    source: "results",
                })?;
        if race_year != year {
            continue;
        }

        let entity: Entity = match role {
            Role::Driver => Entity::Driver(result.driver_id),
            Role::Constructor => match result.constructor_id {
                Some(constructor_id) => Entity::Constructor(constructor_id),
                // A row without a constructor reference contributes to no
                // constructor standing.
                None => continue,
            },
        };

        let entry: &mut (f64, usize) = totals.entry(entity).or_insert_with(|| {
            appearance.push(entity);
            (0.0, 0)
        });
        entry.0 += result.points;
        if result.classification.is_win() {
            entry.1 += 1;
        }
    }

    let mut rows: Vec<SeasonStanding> = appearance
        .into_iter()
        .map(|entity| {
            let (points, wins): (f64, usize) =
                totals.get(&entity).copied().unwrap_or((0.0, 0));
            SeasonStanding {
                entity,
                points,
                wins,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| b.wins.cmp(&a.wins))
    });

    Ok(rows)
}

/// The stored championship standings snapshot following one race, ordered by
/// championship position ascending.
///
/// A race id with no stored standings yields an empty table.
#[must_use]
pub fn standings_after(standings: &[DriverStanding], race_id: RaceId) -> Vec<&DriverStanding> {
    let mut rows: Vec<&DriverStanding> = standings
        .iter()
        .filter(|standing| standing.race_id == race_id)
        .collect();
    rows.sort_by_key(|standing| standing.position);
    rows
}
