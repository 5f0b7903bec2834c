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
    clippy::all
)]

mod error;
mod tables;

pub use error::LoaderError;
pub use tables::{
    CONSTRUCTORS_FILE, DRIVERS_FILE, LAP_TIMES_FILE, RACES_FILE, RESULTS_FILE, SEASONS_FILE,
    STANDINGS_FILE, parse_constructors, parse_drivers, parse_lap_times, parse_races,
    parse_results, parse_seasons, parse_standings,
};

use pitwall::Dataset;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads the seven dataset tables from `dir` and assembles a validated
/// [`Dataset`].
///
/// The directory must hold the canonical file names (`drivers.csv`,
/// `constructors.csv`, `races.csv`, `results.csv`, `driver_standings.csv`,
/// `lap_times.csv`, `seasons.csv`). Loading happens once per session, before
/// any query runs.
///
/// # Arguments
///
/// * `dir` - The directory holding the dataset files
///
/// # Errors
///
/// Returns a `LoaderError` if a file cannot be read, a table cannot be
/// parsed, or the parsed tables violate a dataset integrity rule.
pub fn load_dataset(dir: &Path) -> Result<Dataset, LoaderError> {
    let drivers = parse_drivers(open(dir, DRIVERS_FILE)?)?;
    debug!(file = DRIVERS_FILE, rows = drivers.len(), "table parsed");

    let constructors = parse_constructors(open(dir, CONSTRUCTORS_FILE)?)?;
    debug!(
        file = CONSTRUCTORS_FILE,
        rows = constructors.len(),
        "table parsed"
    );

    let races = parse_races(open(dir, RACES_FILE)?)?;
    debug!(file = RACES_FILE, rows = races.len(), "table parsed");

    let results = parse_results(open(dir, RESULTS_FILE)?)?;
    debug!(file = RESULTS_FILE, rows = results.len(), "table parsed");

    let standings = parse_standings(open(dir, STANDINGS_FILE)?)?;
    debug!(file = STANDINGS_FILE, rows = standings.len(), "table parsed");

    let lap_times = parse_lap_times(open(dir, LAP_TIMES_FILE)?)?;
    debug!(file = LAP_TIMES_FILE, rows = lap_times.len(), "table parsed");

    let seasons = parse_seasons(open(dir, SEASONS_FILE)?)?;
    debug!(file = SEASONS_FILE, rows = seasons.len(), "table parsed");

    let dataset: Dataset = Dataset::new(
        drivers,
        constructors,
        races,
        results,
        standings,
        lap_times,
        seasons,
    )?;

    info!(
        drivers = dataset.drivers().len(),
        constructors = dataset.constructors().len(),
        races = dataset.races().len(),
        results = dataset.results().len(),
        standings = dataset.standings().len(),
        laps = dataset.lap_times().len(),
        seasons = dataset.seasons().len(),
        "dataset loaded"
    );

    Ok(dataset)
}

fn open(dir: &Path, file: &'static str) -> Result<File, LoaderError> {
    let path = dir.join(file);
    File::open(&path).map_err(|source| LoaderError::Io { path, source })
}
