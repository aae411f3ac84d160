//! End-to-end tests for the per-view JSON endpoints

mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::Value;

async fn json(response: reqwest::Response) -> Value {
    response.json().await.expect("Response is not JSON")
}

#[tokio::test]
async fn test_status_reports_dataset_shape() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_status().await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json(response).await;
    assert_eq!(body["rows"], FIXTURE_ROWS);
    assert_eq!(body["columns"].as_array().unwrap().len(), 7);
    assert!(body["uptime"].as_str().unwrap().starts_with("0d "));
}

#[tokio::test]
async fn test_options_list_distinct_values_in_order() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_options().await).await;

    assert_eq!(body["genres"], serde_json::json!(FIXTURE_GENRES));
    assert_eq!(body["settings"], serde_json::json!(FIXTURE_SETTINGS));
}

#[tokio::test]
async fn test_top_studios_pie_has_one_slice_per_studio() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_top_studios().await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;

    let pie = &body["pie"]["data"][0];
    assert_eq!(pie["type"], "pie");
    let labels: Vec<&str> = pie["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|label| label.as_str().unwrap())
        .collect();
    let values: Vec<u64> = pie["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_u64().unwrap())
        .collect();
    let expected_labels: Vec<&str> = FIXTURE_STUDIOS.iter().map(|(name, _)| *name).collect();
    let expected_values: Vec<u64> = FIXTURE_STUDIOS.iter().map(|(_, count)| *count).collect();
    assert_eq!(labels, expected_labels);
    assert_eq!(values, expected_values);

    let percent_total: f64 = body["studios"]
        .as_array()
        .unwrap()
        .iter()
        .map(|studio| studio["percent"].as_f64().unwrap())
        .sum();
    assert!((percent_total - 100.0).abs() < 1e-9);

    assert_eq!(body["bar"]["data"][0]["type"], "bar");
}

#[tokio::test]
async fn test_rating_distribution_filters_by_genre_and_setting() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_rating_distribution("Action", "Space").await).await;

    let titles: Vec<&str> = body["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ACTION_IN_SPACE);
    assert_eq!(body["genre"], "Action");
    assert_eq!(body["setting"], "Space");
    assert_eq!(body["figure"]["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rating_distribution_all_returns_every_title() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_rating_distribution("All", "All").await).await;

    assert_eq!(body["points"].as_array().unwrap().len(), FIXTURE_ROWS);
}

#[tokio::test]
async fn test_rating_distribution_unknown_genre_is_empty_not_error() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_rating_distribution("Western", "All").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json(response).await;
    assert!(body["points"].as_array().unwrap().is_empty());
    assert!(body["figure"]["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_genre_ratings_are_sorted_by_mean() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_genre_ratings().await).await;

    let genres = body["genres"].as_array().unwrap();
    assert_eq!(genres.len(), FIXTURE_GENRES.len());
    let means: Vec<f64> = genres
        .iter()
        .map(|genre| genre["mean"].as_f64().unwrap())
        .collect();
    assert!(means.windows(2).all(|pair| pair[0] >= pair[1]));

    let single = genres
        .iter()
        .find(|genre| genre["genre"] == SINGLE_TITLE_GENRE)
        .unwrap();
    assert_eq!(single["count"], 1);
    assert_eq!(single["mean"], 6.5);
    assert!(single["std_dev"].is_null());
}

#[tokio::test]
async fn test_episode_ratings_have_every_group() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_episode_ratings().await).await;

    let labels: Vec<&str> = body["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["1 (One-shot)", "2-12", "13-24", "25+"]);
}

#[tokio::test]
async fn test_filtered_titles_empty_selection_has_no_table() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_filtered_titles(&[], &[]).await).await;

    assert!(body["table"].is_null());
}

#[tokio::test]
async fn test_filtered_titles_union_of_genre_and_setting() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_filtered_titles(&["Action"], &["Space"]).await).await;

    let titles: Vec<&str> = body["table"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row[0].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        ["Starfall Drift", "Iron Halo", "Neon Courier", "Orbit Cafe"]
    );
    assert_eq!(body["table"]["columns"][0], "Title");
}

#[tokio::test]
async fn test_filtered_titles_several_genres() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = json(client.get_filtered_titles(&["Horror", "Fantasy"], &[]).await).await;

    assert_eq!(body["table"]["rows"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_views_are_cacheable() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_top_studios().await;

    assert_eq!(
        response.headers()[reqwest::header::CACHE_CONTROL],
        "max-age=3600"
    );
}

#[tokio::test]
async fn test_cache_header_can_be_disabled() {
    let server = TestServer::spawn_without_cache().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_top_studios().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(reqwest::header::CACHE_CONTROL)
        .is_none());
}
