use crate::models::Dataset;
use crate::top_countries::rank_value;
use crate::Result;
use statrs::statistics::{Data, Distribution, Max, Median, Min};
use std::fmt;

/// Spread of the ranking values that made the cut
#[derive(Debug, Clone, PartialEq)]
pub struct GdpSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl GdpSummary {
    /// None for an empty dataset
    pub fn from_dataset(dataset: &Dataset) -> Result<Option<Self>> {
        let values = dataset
            .records
            .iter()
            .map(|r| rank_value(r, dataset).map(|v| v.into_inner()))
            .collect::<Result<Vec<f64>>>()?;
        if values.is_empty() {
            return Ok(None);
        }

        let data = Data::new(values);
        Ok(Some(Self {
            min: data.min(),
            max: data.max(),
            mean: data.mean().unwrap_or(f64::NAN),
            median: data.median(),
        }))
    }
}

/// What a run did to the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct FilterReport {
    pub loaded: usize,
    pub complete: usize,
    pub kept: usize,
    pub gdp: Option<GdpSummary>,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loaded {}, complete {}, kept {}",
            self.loaded, self.complete, self.kept
        )?;
        if let Some(gdp) = &self.gdp {
            write!(
                f,
                " (gdp min {:.2}, max {:.2}, mean {:.2}, median {:.2})",
                gdp.min, gdp.max, gdp.mean, gdp.median
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryRecord;

    fn dataset(gdps: &[&str]) -> Dataset {
        Dataset {
            key_column: "country_code".to_string(),
            columns: vec!["gdp_us_billion".to_string()],
            rank_index: 0,
            records: gdps
                .iter()
                .enumerate()
                .map(|(i, gdp)| CountryRecord {
                    country_code: format!("C{:02}", i),
                    values: vec![gdp.to_string()],
                    line: i as u64 + 2,
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary_of_kept_values() {
        let summary = GdpSummary::from_dataset(&dataset(&["4", "1", "10", "5"]))
            .unwrap()
            .unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 10.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 4.5);
    }

    #[test]
    fn test_summary_of_empty_dataset() {
        assert!(GdpSummary::from_dataset(&dataset(&[])).unwrap().is_none());
    }

    #[test]
    fn test_report_display() {
        let report = FilterReport {
            loaded: 25,
            complete: 20,
            kept: 15,
            gdp: Some(GdpSummary {
                min: 1.0,
                max: 3.0,
                mean: 2.0,
                median: 2.0,
            }),
        };
        assert_eq!(
            report.to_string(),
            "loaded 25, complete 20, kept 15 (gdp min 1.00, max 3.00, mean 2.00, median 2.00)"
        );

        let empty = FilterReport {
            loaded: 3,
            complete: 0,
            kept: 0,
            gdp: None,
        };
        assert_eq!(empty.to_string(), "loaded 3, complete 0, kept 0");
    }
}
