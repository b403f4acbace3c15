/// Cell texts read as "no value", matching the usual data-frame NA markers.
/// Compared verbatim, without trimming.
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// One country row, indexed by its country code.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country_code: String,
    /// Every non-key field, in input column order
    pub values: Vec<String>,
    /// Line of the record in the source file
    pub line: u64,
}

impl CountryRecord {
    /// True when neither the key nor any other field is missing
    pub fn is_complete(&self) -> bool {
        !is_missing(&self.country_code) && !self.values.iter().any(|v| is_missing(v))
    }
}

/// Records sharing one header layout. The key column is held apart from the
/// other columns and goes back to the front on output.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub key_column: String,
    pub columns: Vec<String>,
    /// Position of the ranking column inside `columns` and each record's `values`
    pub rank_index: usize,
    pub records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn rank_column(&self) -> &str {
        &self.columns[self.rank_index]
    }

    /// Output header: key column first, then the rest in input order
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(self.key_column.as_str())
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
