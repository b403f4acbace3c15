use crate::models::{CountryRecord, Dataset};
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

// Load the statistics file and index each row by its key column
pub fn load_dataset<P: AsRef<Path>>(
    path: P,
    key_column: &str,
    rank_column: &str,
) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = read_dataset(file, key_column, rank_column)?;
    info!(
        "Loaded {} records with {} columns from {:?}",
        dataset.len(),
        dataset.columns.len() + 1,
        path
    );
    Ok(dataset)
}

pub fn read_dataset<R: Read>(reader: R, key_column: &str, rank_column: &str) -> Result<Dataset> {
    // Short rows are allowed and padded; long rows are rejected below
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let key_index = column_index(&headers, key_column)?;
    column_index(&headers, rank_column)?;

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_index)
        .map(|(_, h)| h.to_string())
        .collect();
    let rank_index = columns
        .iter()
        .position(|c| c == rank_column)
        .ok_or_else(|| Error::MissingColumn(rank_column.to_string()))?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        if row.len() > headers.len() {
            return Err(Error::TooManyFields {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        if row.len() < headers.len() {
            debug!("Line {}: {} of {} fields present", line, row.len(), headers.len());
        }

        let mut country_code = String::new();
        let mut values = Vec::with_capacity(columns.len());
        for i in 0..headers.len() {
            let value = row.get(i).unwrap_or("").to_string();
            if i == key_index {
                country_code = value;
            } else {
                values.push(value);
            }
        }
        records.push(CountryRecord {
            country_code,
            values,
            line,
        });
    }

    Ok(Dataset {
        key_column: key_column.to_string(),
        columns,
        rank_index,
        records,
    })
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}
