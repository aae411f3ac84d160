use crate::dataset::{Dataset, DatasetError, GENRE, RATING};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRating {
    pub genre: String,
    /// Number of rated titles in the genre.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation, undefined below two ratings.
    pub std_dev: Option<f64>,
}

/// Running mean and variance (Welford).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RunningStats {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub(crate) fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    pub(crate) fn sample_std_dev(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).sqrt())
    }
}

/// Mean and spread of ratings per genre, highest mean first.
/// Genres without any rating sort last.
pub fn mean_rating_by_genre(dataset: &Dataset) -> Result<Vec<GenreRating>, DatasetError> {
    let genre_column = dataset.column(GENRE)?;
    let rating_column = dataset.column(RATING)?;

    let mut groups: Vec<(String, RunningStats)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (index, row) in dataset.rows().iter().enumerate() {
        let Some(genre) = genre_column.text(row) else {
            continue;
        };
        let position = *positions.entry(genre).or_insert_with(|| {
            groups.push((genre.to_owned(), RunningStats::default()));
            groups.len() - 1
        });
        if let Some(rating) = rating_column.number(row, index)? {
            groups[position].1.push(rating);
        }
    }

    let mut ratings: Vec<GenreRating> = groups
        .into_iter()
        .map(|(genre, stats)| GenreRating {
            genre,
            count: stats.count(),
            mean: stats.mean(),
            std_dev: stats.sample_std_dev(),
        })
        .collect();
    ratings.sort_by(|a, b| compare_means_descending(a.mean, b.mean));

    Ok(ratings)
}

fn compare_means_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
