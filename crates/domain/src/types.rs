// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Identifies a driver within one loaded dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DriverId(u32);

impl DriverId {
    /// Creates a new `DriverId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a constructor within one loaded dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ConstructorId(u32);

impl ConstructorId {
    /// Creates a new `ConstructorId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a race within one loaded dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RaceId(u32);

impl RaceId {
    /// Creates a new `RaceId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A driver entry in the driver table.
///
/// Drivers are unique by id. The broadcast code (e.g. "HAM") is absent for
/// drivers from seasons before codes were assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// The driver identifier.
    pub id: DriverId,
    /// The driver's given name.
    pub forename: String,
    /// The driver's family name.
    pub surname: String,
    /// Three-letter broadcast abbreviation, when assigned.
    pub code: Option<String>,
    /// The driver's nationality.
    pub nationality: String,
}

impl Driver {
    /// Creates a new `Driver`.
    #[must_use]
    pub const fn new(
        id: DriverId,
        forename: String,
        surname: String,
        code: Option<String>,
        nationality: String,
    ) -> Self {
        Self {
            id,
            forename,
            surname,
            code,
            nationality,
        }
    }

    /// The display name selection menus match against: forename and surname
    /// joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }

    /// Short label for dense displays: the broadcast code when assigned,
    /// the surname otherwise.
    #[must_use]
    pub fn short_label(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.surname)
    }
}

/// A constructor entry in the constructor table. Unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    /// The constructor identifier.
    pub id: ConstructorId,
    /// The constructor's name.
    pub name: String,
    /// The constructor's nationality.
    pub nationality: String,
}

impl Constructor {
    /// Creates a new `Constructor`.
    #[must_use]
    pub const fn new(id: ConstructorId, name: String, nationality: String) -> Self {
        Self {
            id,
            name,
            nationality,
        }
    }
}

/// A race entry in the race table.
///
/// Races are unique by id; the (year, name) pair is also unique so that
/// human-facing selections can be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    /// The race identifier.
    pub id: RaceId,
    /// The championship year the race belongs to.
    pub year: u16,
    /// The race name (e.g. "Monaco Grand Prix").
    pub name: String,
    /// The round number within the year.
    pub round: u32,
}

impl Race {
    /// Creates a new `Race`.
    #[must_use]
    pub const fn new(id: RaceId, year: u16, name: String, round: u32) -> Self {
        Self {
            id,
            year,
            name,
            round,
        }
    }
}

/// Finishing classification of one race entry.
///
/// The source data mixes numeric finishing positions with non-numeric status
/// codes for entries that were not classified (retirement, disqualification,
/// and so on). The two kinds are kept apart instead of being coerced into
/// one integer column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Classified with a final position. Position 1 is a win.
    Classified(u32),
    /// Not classified; carries the raw status code from the source row.
    Unclassified(String),
}

impl Classification {
    /// Parses a raw position field.
    ///
    /// A value that parses as a number becomes [`Classification::Classified`];
    /// anything else is preserved verbatim as an unclassified status code.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed: &str = raw.trim();
        trimmed
            .parse::<u32>()
            .map_or_else(|_| Self::Unclassified(trimmed.to_string()), Self::Classified)
    }

    /// The numeric finishing position, if the entry was classified.
    #[must_use]
    pub const fn position(&self) -> Option<u32> {
        match self {
            Self::Classified(position) => Some(*position),
            Self::Unclassified(_) => None,
        }
    }

    /// Whether this entry won the race.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Classified(1))
    }

    /// Whether this entry finished on the podium (positions 1 through 3).
    #[must_use]
    pub const fn is_podium(&self) -> bool {
        matches!(self, Self::Classified(1..=3))
    }
}

/// One driver's outcome in one race.
///
/// Identified by the (race id, driver id) pair. An unclassified entry still
/// counts as a race entered; it only stops counting toward wins, podiums,
/// and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// The race this result belongs to.
    pub race_id: RaceId,
    /// The driver this result belongs to.
    pub driver_id: DriverId,
    /// The constructor the driver raced for, when the source row carries one.
    pub constructor_id: Option<ConstructorId>,
    /// The finishing classification.
    pub classification: Classification,
    /// Grid slot the entry started from (1 = pole position).
    pub grid: u32,
    /// Championship points earned. Never negative.
    pub points: f64,
}

impl RaceResult {
    /// Creates a new `RaceResult`.
    #[must_use]
    pub const fn new(
        race_id: RaceId,
        driver_id: DriverId,
        constructor_id: Option<ConstructorId>,
        classification: Classification,
        grid: u32,
        points: f64,
    ) -> Self {
        Self {
            race_id,
            driver_id,
            constructor_id,
            classification,
            grid,
            points,
        }
    }

    /// Whether this entry earned any points.
    #[must_use]
    pub fn is_scoring(&self) -> bool {
        self.points > 0.0
    }
}

/// A driver's track position at the end of one lap.
///
/// Identified by the (race id, driver id, lap) triple. Retired drivers stop
/// appearing in later laps; no rows are synthesized for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapRecord {
    /// The race the lap belongs to.
    pub race_id: RaceId,
    /// The driver who completed the lap.
    pub driver_id: DriverId,
    /// The lap number, starting at 1.
    pub lap: u32,
    /// The driver's position at the end of the lap (1 = leading).
    pub position: u32,
}

impl LapRecord {
    /// Creates a new `LapRecord`.
    #[must_use]
    pub const fn new(race_id: RaceId, driver_id: DriverId, lap: u32, position: u32) -> Self {
        Self {
            race_id,
            driver_id,
            lap,
            position,
        }
    }
}

/// A driver's championship standing after one race.
///
/// Identified by the (race id, driver id) pair. Points and wins are
/// cumulative over the season up to and including that race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    /// The race after which this standing was recorded.
    pub race_id: RaceId,
    /// The driver the standing belongs to.
    pub driver_id: DriverId,
    /// Cumulative championship points.
    pub points: f64,
    /// Championship position (1 = leading the championship).
    pub position: u32,
    /// Cumulative win count.
    pub wins: u32,
}

impl DriverStanding {
    /// Creates a new `DriverStanding`.
    #[must_use]
    pub const fn new(
        race_id: RaceId,
        driver_id: DriverId,
        points: f64,
        position: u32,
        wins: u32,
    ) -> Self {
        Self {
            race_id,
            driver_id,
            points,
            position,
            wins,
        }
    }
}

/// A championship season. Seasons enumerate the selectable years and are
/// unique by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// The championship year.
    pub year: u16,
}

impl Season {
    /// Creates a new `Season`.
    #[must_use]
    pub const fn new(year: u16) -> Self {
        Self { year }
    }
}

/// The role an entity id is matched under within a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Match result rows by their driver id.
    Driver,
    /// Match result rows by their constructor id.
    Constructor,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driver => "driver",
            Self::Constructor => "constructor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A selectable entity: an id tagged with the role it is matched under.
///
/// Statistics queries are parameterized over this value so one set of query
/// functions serves drivers and constructors alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    /// A driver selection.
    Driver(DriverId),
    /// A constructor selection.
    Constructor(ConstructorId),
}

impl Entity {
    /// The role this entity is matched under.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Driver(_) => Role::Driver,
            Self::Constructor(_) => Role::Constructor,
        }
    }

    /// Whether a result row belongs to this entity.
    ///
    /// A result row with no constructor reference belongs to no constructor
    /// entity.
    #[must_use]
    pub fn matches(self, result: &RaceResult) -> bool {
        match self {
            Self::Driver(id) => result.driver_id == id,
            Self::Constructor(id) => result.constructor_id == Some(id),
        }
    }
}
