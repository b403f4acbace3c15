//! Top-N filter for country statistics
//!
//! Reads a CSV of per-country statistics, drops every row with a missing
//! field, keeps the rows with the highest GDP and writes them back out in
//! country code order.

pub mod clean;
pub mod config;
pub mod error;
pub mod load_clean;
pub mod models;
pub mod statistics;
pub mod top_countries;

pub use config::FilterConfig;
pub use error::{Error, Result};
pub use models::{CountryRecord, Dataset};
pub use statistics::{FilterReport, GdpSummary};

use tracing::info;

/// Run the whole load, clean, select, write sequence once.
pub fn run(config: &FilterConfig) -> Result<FilterReport> {
    config.validate()?;
    info!(
        "Keeping the top {} rows of {:?} by {}",
        config.top_n, config.input, config.rank_column
    );

    let dataset = load_clean::load_dataset(&config.input, &config.key_column, &config.rank_column)?;
    let loaded = dataset.len();

    let dataset = clean::drop_incomplete(dataset);
    let complete = dataset.len();

    let top = top_countries::select_top(dataset, config.top_n)?;
    let gdp = GdpSummary::from_dataset(&top)?;

    clean::write_dataset(&top, &config.output)?;

    Ok(FilterReport {
        loaded,
        complete,
        kept: top.len(),
        gdp,
    })
}
