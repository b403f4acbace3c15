use crate::models::Dataset;
use crate::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Keep only records with every field present, key included.
pub fn drop_incomplete(dataset: Dataset) -> Dataset {
    let total = dataset.len();
    let Dataset {
        key_column,
        columns,
        rank_index,
        records,
    } = dataset;

    let records: Vec<_> = records
        .into_iter()
        .filter(|record| {
            let complete = record.is_complete();
            if !complete {
                debug!("Dropping incomplete record on line {}", record.line);
            }
            complete
        })
        .collect();

    debug!("{} of {} records are complete", records.len(), total);
    Dataset {
        key_column,
        columns,
        rank_index,
        records,
    }
}

/// Write the dataset with its key as the first ordinary column. Creates or
/// truncates `path`.
pub fn write_dataset<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dataset_to(dataset, file)?;
    info!("Wrote {} records to {:?}", dataset.len(), path);
    Ok(())
}

pub fn write_dataset_to<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    // The header goes out by hand so an empty dataset still gets one
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(dataset.headers())?;

    for record in &dataset.records {
        wtr.write_record(
            std::iter::once(record.country_code.as_str())
                .chain(record.values.iter().map(String::as_str)),
        )?;
    }

    wtr.flush()?;
    Ok(())
}
