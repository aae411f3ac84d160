//! Dashboard views. Each view reads the shared dataset and derives its own
//! aggregated or filtered copy; no view depends on another.

mod episode_rating;
mod genre_rating;
mod rating_distribution;
mod sidebar_filter;
mod studio_ranking;

pub use episode_rating::{mean_rating_by_episode_group, EpisodeGroup, EpisodeGroupRating};
pub use genre_rating::{mean_rating_by_genre, GenreRating};
pub use rating_distribution::{
    filter_options, rating_distribution, FilterOptions, RatingFilter, RatingPoint, Selection, ALL,
};
pub use sidebar_filter::{filter_titles, FilteredTable, MultiFilter};
pub use studio_ranking::{top_studios, StudioCount, StudioRanking, DEFAULT_TOP_STUDIOS};
