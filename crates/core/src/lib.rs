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

mod aggregate;
mod dataset;
mod resolver;
mod timeline;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{
    RateBreakdown, SeasonStanding, YearPoints, points_by_year, rank_by_wins, scoring_rate,
    season_standings, standings_after, total_podiums, total_points, total_wins, win_rate,
};
pub use dataset::Dataset;
pub use resolver::{resolve_constructor, resolve_driver, resolve_race};
pub use timeline::{LapPosition, pole_position_driver, race_timeline, race_winner};
