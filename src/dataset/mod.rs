//! In-memory table of title records, loaded once from CSV.

mod error;
mod load;
mod table;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::DatasetError;
pub use load::load_dataset;
pub use table::{Column, Dataset};

pub const TITLE: &str = "Title";
pub const MAIN_STUDIO: &str = "Main_Studio";
pub const GENRE: &str = "Genre";
pub const SETTING: &str = "Setting";
pub const SUBGENRES: &str = "Subgenres";
pub const RATING: &str = "Rating";
pub const NUMBER_OF_EPISODES: &str = "Number_of_Episodes";
