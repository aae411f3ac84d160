//! Plotly figure descriptions for the dashboard views.
//!
//! The server only describes charts (`{"data": [...], "layout": {...}}`),
//! drawing is left to Plotly.js in the page.

use crate::views::{EpisodeGroupRating, GenreRating, RatingPoint, StudioRanking};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Plotly's default qualitative palette, one color per setting.
const COLORS: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// One marker symbol per subgenre.
const SYMBOLS: [&str; 12] = [
    "circle",
    "diamond",
    "square",
    "x",
    "cross",
    "triangle-up",
    "pentagon",
    "hexagram",
    "star",
    "hourglass",
    "bowtie",
    "triangle-down",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

fn title_layout(title: &str) -> Value {
    json!({ "title": { "text": title } })
}

fn studios_title(ranking: &StudioRanking) -> String {
    format!("Top {} Studios", ranking.limit)
}

pub fn studio_pie(ranking: &StudioRanking) -> Figure {
    let labels: Vec<&str> = ranking.studios.iter().map(|s| s.studio.as_str()).collect();
    let values: Vec<usize> = ranking.studios.iter().map(|s| s.title_count).collect();
    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
            "textposition": "inside",
            "textinfo": "percent+label",
        })],
        layout: title_layout(&studios_title(ranking)),
    }
}

pub fn studio_bar(ranking: &StudioRanking) -> Figure {
    let studios: Vec<&str> = ranking.studios.iter().map(|s| s.studio.as_str()).collect();
    let counts: Vec<usize> = ranking.studios.iter().map(|s| s.title_count).collect();
    let mut layout = title_layout(&studios_title(ranking));
    layout["xaxis"] = json!({ "title": { "text": "studio" } });
    layout["yaxis"] = json!({ "title": { "text": "title_count" } });
    Figure {
        data: vec![json!({
            "type": "bar",
            "x": studios,
            "y": counts,
        })],
        layout,
    }
}

#[derive(Default)]
struct ScatterTrace<'a> {
    setting: &'a str,
    subgenres: &'a str,
    x: Vec<&'a str>,
    y: Vec<Option<f64>>,
    text: Vec<&'a str>,
}

/// Rating vs. genre, one trace per (setting, subgenres) pair so that color
/// follows the setting and the marker symbol follows the subgenre.
pub fn rating_scatter(points: &[RatingPoint]) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();
    let mut trace_positions: HashMap<(&str, &str), usize> = HashMap::new();
    let mut setting_colors: HashMap<&str, &str> = HashMap::new();
    let mut subgenre_symbols: HashMap<&str, &str> = HashMap::new();

    for point in points {
        let key = (point.setting.as_str(), point.subgenres.as_str());
        let position = *trace_positions.entry(key).or_insert_with(|| {
            traces.push(ScatterTrace {
                setting: key.0,
                subgenres: key.1,
                ..Default::default()
            });
            traces.len() - 1
        });
        let next_color = COLORS[setting_colors.len() % COLORS.len()];
        setting_colors.entry(key.0).or_insert(next_color);
        let next_symbol = SYMBOLS[subgenre_symbols.len() % SYMBOLS.len()];
        subgenre_symbols.entry(key.1).or_insert(next_symbol);

        let trace = &mut traces[position];
        trace.x.push(&point.genre);
        trace.y.push(point.rating);
        trace.text.push(&point.title);
    }

    let data = traces
        .iter()
        .map(|trace| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": format!("{}, {}", trace.setting, trace.subgenres),
                "legendgroup": trace.setting,
                "x": trace.x,
                "y": trace.y,
                "text": trace.text,
                "hovertemplate": "%{text}<br>Genre=%{x}<br>Rating=%{y}<extra></extra>",
                "marker": {
                    "color": setting_colors[trace.setting],
                    "symbol": subgenre_symbols[trace.subgenres],
                },
            })
        })
        .collect();

    let mut layout = title_layout("Rating Distribution by Genre, Setting, and Subgenres");
    layout["xaxis"] = json!({ "title": { "text": "Genre" } });
    layout["yaxis"] = json!({ "title": { "text": "Rating" } });
    layout["legend"] = json!({ "title": { "text": "Setting, Subgenres" } });
    Figure { data, layout }
}

/// Mean rating bars with the standard deviation as error bars. Genres without
/// a standard deviation get no error bar.
pub fn genre_rating_bars(ratings: &[GenreRating]) -> Figure {
    let genres: Vec<&str> = ratings.iter().map(|r| r.genre.as_str()).collect();
    let means: Vec<Option<f64>> = ratings.iter().map(|r| r.mean).collect();
    let deviations: Vec<Option<f64>> = ratings.iter().map(|r| r.std_dev).collect();

    let mut layout = title_layout("Mean Rating by Genre (with standard deviation)");
    layout["xaxis"] = json!({ "title": { "text": "Genre" } });
    layout["yaxis"] = json!({ "title": { "text": "Mean Rating" } });
    Figure {
        data: vec![json!({
            "type": "bar",
            "name": "Mean Rating",
            "x": genres,
            "y": means,
            "error_y": { "type": "data", "array": deviations, "visible": true },
        })],
        layout,
    }
}

pub fn episode_rating_bars(groups: &[EpisodeGroupRating]) -> Figure {
    let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
    let means: Vec<f64> = groups.iter().map(|g| g.mean_rating).collect();

    let mut layout = title_layout("Mean Rating by Episode Count");
    layout["xaxis"] = json!({ "title": { "text": "Episode count group" } });
    layout["yaxis"] = json!({ "title": { "text": "Mean Rating" } });
    Figure {
        data: vec![
            json!({ "type": "bar", "name": "Rating", "x": labels, "y": means }),
            json!({ "type": "scatter", "mode": "lines", "name": "Trend", "x": labels, "y": means }),
        ],
        layout,
    }
}
