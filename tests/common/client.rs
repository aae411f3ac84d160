//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all dashboard endpoints.
//!
//! When API routes or query formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Page
    // ========================================================================

    /// GET / with the given widget values
    pub async fn get_page(&self, query: &[(&str, &str)]) -> Response {
        self.get("/", query).await
    }

    // ========================================================================
    // JSON endpoints
    // ========================================================================

    /// GET /v1/status
    pub async fn get_status(&self) -> Response {
        self.get("/v1/status", &[]).await
    }

    /// GET /v1/options
    pub async fn get_options(&self) -> Response {
        self.get("/v1/options", &[]).await
    }

    /// GET /v1/views/top-studios
    pub async fn get_top_studios(&self) -> Response {
        self.get("/v1/views/top-studios", &[]).await
    }

    /// GET /v1/views/rating-distribution?genre=..&setting=..
    pub async fn get_rating_distribution(&self, genre: &str, setting: &str) -> Response {
        self.get(
            "/v1/views/rating-distribution",
            &[("genre", genre), ("setting", setting)],
        )
        .await
    }

    /// GET /v1/views/genre-ratings
    pub async fn get_genre_ratings(&self) -> Response {
        self.get("/v1/views/genre-ratings", &[]).await
    }

    /// GET /v1/views/episode-ratings
    pub async fn get_episode_ratings(&self) -> Response {
        self.get("/v1/views/episode-ratings", &[]).await
    }

    /// GET /v1/views/filtered-titles with one repeated key per selected value
    pub async fn get_filtered_titles(&self, genres: &[&str], settings: &[&str]) -> Response {
        let query: Vec<(&str, &str)> = genres
            .iter()
            .map(|genre| ("genres", *genre))
            .chain(settings.iter().map(|setting| ("settings", *setting)))
            .collect();
        self.get("/v1/views/filtered-titles", &query).await
    }
}
