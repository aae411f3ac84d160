use crate::dataset::{Dataset, DatasetError, MAIN_STUDIO};
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_TOP_STUDIOS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudioCount {
    pub studio: String,
    pub title_count: usize,
    /// Share of this studio among the ranked studios, 0-100.
    pub percent: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudioRanking {
    /// How many studios were asked for.
    pub limit: usize,
    pub studios: Vec<StudioCount>,
}

/// Counts titles per studio and keeps the `limit` studios with most titles.
/// Studios with the same count keep the order in which they first appear.
pub fn top_studios(dataset: &Dataset, limit: usize) -> Result<StudioRanking, DatasetError> {
    let studio_column = dataset.column(MAIN_STUDIO)?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for row in dataset.rows() {
        let Some(studio) = studio_column.text(row) else {
            continue;
        };
        match positions.get(studio) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(studio, counts.len());
                counts.push((studio.to_owned(), 1));
            }
        }
    }

    // stable, ties stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    let studios = counts
        .into_iter()
        .map(|(studio, title_count)| StudioCount {
            studio,
            title_count,
            percent: title_count as f64 * 100.0 / total as f64,
        })
        .collect();

    Ok(StudioRanking { limit, studios })
}
