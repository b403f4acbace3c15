use crate::models::{CountryRecord, Dataset};
use crate::{Error, Result};
use itertools::Itertools;
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// Parse the ranking field of a complete record. Surrounding spaces are
/// ignored for parsing; the stored text is left as read.
pub fn rank_value(record: &CountryRecord, dataset: &Dataset) -> Result<NotNan<f64>> {
    let raw = &record.values[dataset.rank_index];
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|v| NotNan::new(v).ok())
        .ok_or_else(|| Error::InvalidNumber {
            line: record.line,
            column: dataset.rank_column().to_string(),
            value: raw.clone(),
        })
}

/// Keep the `n` records with the highest ranking value, then order them by key.
///
/// Ties on the ranking value favour the record that comes later in the input,
/// the same result as a stable ascending sort followed by taking the tail.
/// Records sharing a key stay in ascending rank order.
pub fn select_top(mut dataset: Dataset, n: usize) -> Result<Dataset> {
    // Min-heap of (value, position); the root is the weakest survivor
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, usize)>> =
        BinaryHeap::with_capacity(n.min(dataset.len()).saturating_add(1));
    for (position, record) in dataset.records.iter().enumerate() {
        let value = rank_value(record, &dataset)?;
        heap.push(Reverse((value, position)));
        if heap.len() > n {
            heap.pop();
        }
    }

    let total = dataset.len();
    let mut slots: Vec<Option<CountryRecord>> =
        std::mem::take(&mut dataset.records).into_iter().map(Some).collect();
    let records: Vec<CountryRecord> = heap
        .into_sorted_vec()
        .into_iter()
        .rev()
        .filter_map(|Reverse((_, position))| slots[position].take())
        .sorted_by(|a, b| a.country_code.cmp(&b.country_code))
        .collect();

    debug!(
        "Selected {} of {} records by {}",
        records.len(),
        total,
        dataset.rank_column()
    );
    dataset.records = records;
    Ok(dataset)
}
