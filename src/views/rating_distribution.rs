use crate::dataset::{Dataset, DatasetError, GENRE, RATING, SETTING, SUBGENRES, TITLE};
use serde::Serialize;

/// Sentinel offered first in every single-select, disables the filter.
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Widget value as sent by the page; absent, empty and "All" disable the filter.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") | Some(ALL) => Selection::All,
            Some(value) => Selection::Value(value.to_owned()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Value(value) => value,
        }
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(selected) => value == Some(selected.as_str()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingFilter {
    pub genre: Selection,
    pub setting: Selection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingPoint {
    pub title: String,
    pub genre: String,
    pub setting: String,
    pub subgenres: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub genres: Vec<String>,
    pub settings: Vec<String>,
}

pub fn filter_options(dataset: &Dataset) -> Result<FilterOptions, DatasetError> {
    Ok(FilterOptions {
        genres: dataset.distinct_values(GENRE)?,
        settings: dataset.distinct_values(SETTING)?,
    })
}

/// Rows matching every active selection, ready for the scatter plot.
pub fn rating_distribution(
    dataset: &Dataset,
    filter: &RatingFilter,
) -> Result<Vec<RatingPoint>, DatasetError> {
    let title = dataset.column(TITLE)?;
    let genre = dataset.column(GENRE)?;
    let setting = dataset.column(SETTING)?;
    let subgenres = dataset.column(SUBGENRES)?;
    let rating = dataset.column(RATING)?;

    let mut points = Vec::new();
    for (index, row) in dataset.rows().iter().enumerate() {
        if !filter.genre.matches(genre.text(row)) || !filter.setting.matches(setting.text(row)) {
            continue;
        }
        points.push(RatingPoint {
            title: title.text(row).unwrap_or_default().to_owned(),
            genre: genre.text(row).unwrap_or_default().to_owned(),
            setting: setting.text(row).unwrap_or_default().to_owned(),
            subgenres: subgenres.text(row).unwrap_or_default().to_owned(),
            rating: rating.number(row, index)?,
        });
    }
    Ok(points)
}
