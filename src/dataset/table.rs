use super::DatasetError;
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

/// The loaded table. Cells are kept as read, columns are resolved by name
/// when a view needs them, so a missing column only fails that view.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A resolved column of a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    index: usize,
}

impl Column {
    /// Categorical value of this column in `row`, `None` for empty cells.
    pub fn text<'a>(&self, row: &'a [String]) -> Option<&'a str> {
        row.get(self.index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Numeric value of this column in the row at `row_index`.
    /// Empty (and NaN) cells are missing values.
    pub fn number(&self, row: &[String], row_index: usize) -> Result<Option<f64>, DatasetError> {
        let Some(raw) = self.text(row) else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_nan() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(DatasetError::InvalidNumber {
                column: self.name.clone(),
                // header is line 1
                line: row_index + 2,
                value: raw.to_owned(),
            }),
        }
    }
}

impl Dataset {
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_owned).collect());
        }

        Ok(Dataset {
            source: source.into(),
            columns,
            rows,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Result<Column, DatasetError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .map(|index| Column {
                name: name.to_owned(),
                index,
            })
            .ok_or_else(|| DatasetError::MissingColumn(name.to_owned()))
    }

    /// Distinct non-empty values of a column, in order of first appearance.
    pub fn distinct_values(&self, name: &str) -> Result<Vec<String>, DatasetError> {
        let column = self.column(name)?;
        let mut seen = HashSet::new();
        Ok(self
            .rows
            .iter()
            .filter_map(|row| column.text(row))
            .filter(|value| seen.insert(*value))
            .map(str::to_owned)
            .collect())
    }
}
