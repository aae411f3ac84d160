use crate::dataset::{Dataset, DatasetError, GENRE, SETTING};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiFilter {
    pub genres: Vec<String>,
    pub settings: Vec<String>,
}

impl MultiFilter {
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.settings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rows whose genre is among the selected genres or whose setting is among
/// the selected settings. Nothing is produced while both selections are empty.
pub fn filter_titles(
    dataset: &Dataset,
    filter: &MultiFilter,
) -> Result<Option<FilteredTable>, DatasetError> {
    if filter.is_empty() {
        return Ok(None);
    }

    let genre = dataset.column(GENRE)?;
    let setting = dataset.column(SETTING)?;
    let selected = |values: &[String], value: Option<&str>| {
        value.is_some_and(|value| values.iter().any(|selected| selected == value))
    };

    let rows = dataset
        .rows()
        .iter()
        .filter(|row| {
            selected(&filter.genres, genre.text(row)) || selected(&filter.settings, setting.text(row))
        })
        .cloned()
        .collect();

    Ok(Some(FilteredTable {
        columns: dataset.columns().to_vec(),
        rows,
    }))
}
