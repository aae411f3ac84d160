//! Shared constants for end-to-end tests
//!
//! When the fixture dataset changes, update only this file and fixtures.rs.

// ============================================================================
// Fixture Dataset
// ============================================================================

/// Titles in the fixture dataset
pub const FIXTURE_ROWS: usize = 10;

/// Studios in ranking order with their title counts
pub const FIXTURE_STUDIOS: [(&str, u64); 3] =
    [("Sunrise", 5), ("Madhouse", 3), ("Kyoto Animation", 2)];

/// Genres in order of first appearance
pub const FIXTURE_GENRES: [&str; 5] = ["Action", "Slice of Life", "Drama", "Fantasy", "Horror"];

/// Settings in order of first appearance
pub const FIXTURE_SETTINGS: [&str; 6] =
    ["Space", "City", "Countryside", "Ocean", "School", "Medieval"];

/// Titles that are Action and set in Space
pub const ACTION_IN_SPACE: [&str; 2] = ["Starfall Drift", "Iron Halo"];

/// Genre with a single title
pub const SINGLE_TITLE_GENRE: &str = "Horror";

// ============================================================================
// Timeouts
// ============================================================================

/// Max time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Interval between readiness checks
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
