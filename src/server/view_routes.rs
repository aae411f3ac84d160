//! One JSON endpoint per dashboard view. A widget change on the page only
//! refetches the view it drives.

use crate::dataset::DatasetError;
use crate::figures::{self, Figure};
use crate::views::{
    self, EpisodeGroupRating, FilterOptions, FilteredTable, GenreRating, MultiFilter,
    RatingFilter, RatingPoint, Selection, StudioCount,
};

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::warn;

use super::http_cache;
use super::metrics::{record_view_error, record_view_render};
use super::state::{GuardedDataset, ServerState};

/// Widget values as carried by the query string. The multi-selects repeat
/// their key once per selected value.
#[derive(Deserialize, Debug, Default)]
pub struct WidgetQuery {
    pub genre: Option<String>,
    pub setting: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub settings: Vec<String>,
}

impl WidgetQuery {
    pub fn rating_filter(&self) -> RatingFilter {
        RatingFilter {
            genre: Selection::from_param(self.genre.as_deref()),
            setting: Selection::from_param(self.setting.as_deref()),
        }
    }

    pub fn multi_filter(&self) -> MultiFilter {
        let non_empty = |values: &[String]| {
            values
                .iter()
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
                .collect()
        };
        MultiFilter {
            genres: non_empty(&self.genres),
            settings: non_empty(&self.settings),
        }
    }
}

#[derive(Debug, Error)]
#[error("Could not render {view}: {source}")]
pub struct ViewError {
    pub view: &'static str,
    #[source]
    pub source: DatasetError,
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "view": self.view,
                "error": self.source.to_string(),
            })),
        )
            .into_response()
    }
}

/// Runs a view, recording how long it took and whether it failed.
pub fn run_view<T>(
    view: &'static str,
    compute: impl FnOnce() -> Result<T, DatasetError>,
) -> Result<T, ViewError> {
    let start = Instant::now();
    let result = compute();
    record_view_render(view, start.elapsed());
    result.map_err(|source| {
        warn!("View {} failed: {}", view, source);
        record_view_error(view);
        ViewError { view, source }
    })
}

#[derive(Serialize)]
struct TopStudiosResponse {
    studios: Vec<StudioCount>,
    pie: Figure,
    bar: Figure,
}

#[derive(Serialize)]
struct RatingDistributionResponse {
    genre: String,
    setting: String,
    points: Vec<RatingPoint>,
    figure: Figure,
}

#[derive(Serialize)]
struct GenreRatingsResponse {
    genres: Vec<GenreRating>,
    figure: Figure,
}

#[derive(Serialize)]
struct EpisodeRatingsResponse {
    groups: Vec<EpisodeGroupRating>,
    figure: Figure,
}

#[derive(Serialize)]
struct FilteredTitlesResponse {
    /// `None` while nothing is selected, the page then shows no table.
    table: Option<FilteredTable>,
}

async fn get_options(
    State(dataset): State<GuardedDataset>,
) -> Result<Json<FilterOptions>, ViewError> {
    run_view("options", || views::filter_options(&dataset)).map(Json)
}

async fn get_top_studios(State(state): State<ServerState>) -> Result<impl IntoResponse, ViewError> {
    let ranking = run_view("top-studios", || {
        views::top_studios(&state.dataset, state.config.top_studios)
    })?;
    Ok(Json(TopStudiosResponse {
        pie: figures::studio_pie(&ranking),
        bar: figures::studio_bar(&ranking),
        studios: ranking.studios,
    }))
}

async fn get_rating_distribution(
    State(dataset): State<GuardedDataset>,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, ViewError> {
    let filter = query.rating_filter();
    let points = run_view("rating-distribution", || {
        views::rating_distribution(&dataset, &filter)
    })?;
    Ok(Json(RatingDistributionResponse {
        genre: filter.genre.as_param().to_owned(),
        setting: filter.setting.as_param().to_owned(),
        figure: figures::rating_scatter(&points),
        points,
    }))
}

async fn get_genre_ratings(
    State(dataset): State<GuardedDataset>,
) -> Result<impl IntoResponse, ViewError> {
    let genres = run_view("genre-ratings", || views::mean_rating_by_genre(&dataset))?;
    Ok(Json(GenreRatingsResponse {
        figure: figures::genre_rating_bars(&genres),
        genres,
    }))
}

async fn get_episode_ratings(
    State(dataset): State<GuardedDataset>,
) -> Result<impl IntoResponse, ViewError> {
    let groups = run_view("episode-ratings", || {
        views::mean_rating_by_episode_group(&dataset)
    })?;
    Ok(Json(EpisodeRatingsResponse {
        figure: figures::episode_rating_bars(&groups),
        groups,
    }))
}

async fn get_filtered_titles(
    State(dataset): State<GuardedDataset>,
    Query(query): Query<WidgetQuery>,
) -> Result<impl IntoResponse, ViewError> {
    let filter = query.multi_filter();
    let table = run_view("filtered-titles", || views::filter_titles(&dataset, &filter))?;
    Ok(Json(FilteredTitlesResponse { table }))
}

pub fn make_view_routes(state: ServerState) -> Router {
    let cache_age_sec = state.config.content_cache_age_sec;
    Router::new()
        .route("/options", get(get_options))
        .route("/views/top-studios", get(get_top_studios))
        .route("/views/rating-distribution", get(get_rating_distribution))
        .route("/views/genre-ratings", get(get_genre_ratings))
        .route("/views/episode-ratings", get(get_episode_ratings))
        .route("/views/filtered-titles", get(get_filtered_titles))
        .layer(middleware::from_fn_with_state(cache_age_sec, http_cache))
        .with_state(state)
}
