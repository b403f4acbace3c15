//! Fixed run configuration

use crate::{Error, Result};
use std::path::PathBuf;

pub const INPUT_FILE: &str = "gender_stats.csv";
pub const OUTPUT_FILE: &str = "richest_stats.csv";
pub const KEY_COLUMN: &str = "country_code";
pub const RANK_COLUMN: &str = "gdp_us_billion";
pub const TOP_N: usize = 15;

/// Where to read, where to write, and which columns drive the selection
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Lookup key, also the final sort order
    pub key_column: String,
    /// Numeric column the records are ranked by
    pub rank_column: String,
    /// How many of the highest ranked records to keep
    pub top_n: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_FILE),
            output: PathBuf::from(OUTPUT_FILE),
            key_column: KEY_COLUMN.to_string(),
            rank_column: RANK_COLUMN.to_string(),
            top_n: TOP_N,
        }
    }
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".to_string()));
        }
        if self.key_column == self.rank_column {
            return Err(Error::InvalidConfig(format!(
                "key column and rank column are both `{}`",
                self.key_column
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.input, PathBuf::from("gender_stats.csv"));
        assert_eq!(config.output, PathBuf::from("richest_stats.csv"));
        assert_eq!(config.key_column, "country_code");
        assert_eq!(config.rank_column, "gdp_us_billion");
        assert_eq!(config.top_n, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = FilterConfig {
            top_n: 0,
            ..FilterConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_same_key_and_rank_rejected() {
        let config = FilterConfig {
            rank_column: KEY_COLUMN.to_string(),
            ..FilterConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
