//! Server-side rendering of the dashboard page.
//!
//! Sections render top to bottom from the current widget values. A section
//! whose view fails shows an error box, the other sections are unaffected.

mod assets;

use crate::dataset::{Dataset, DatasetError};
use crate::figures::{self, Figure};
use crate::server::{run_view, ViewError};
use crate::views::{
    filter_options, filter_titles, mean_rating_by_episode_group, mean_rating_by_genre,
    rating_distribution, top_studios, FilterOptions, FilteredTable, MultiFilter, RatingFilter,
    ALL,
};
use tracing::warn;

pub const PAGE_TITLE: &str = "Animation Production Dashboard";

#[derive(Debug, Clone)]
pub struct PageSettings {
    pub plotly_js_url: String,
    pub top_studios: usize,
    pub build_hash: String,
}

pub fn render_dashboard(
    dataset: &Dataset,
    settings: &PageSettings,
    rating_filter: &RatingFilter,
    multi_filter: &MultiFilter,
) -> String {
    let options = run_view("options", || filter_options(dataset));

    let sidebar = render_sidebar(dataset, options.as_ref(), multi_filter);
    let studios = render_top_studios(dataset, settings.top_studios);
    let ratings = render_rating_distribution(dataset, options.as_ref(), rating_filter);
    let genres = render_genre_ratings(dataset);
    let episodes = render_episode_ratings(dataset);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{plotly}"></script>
<style>{style}</style>
</head>
<body>
<form class="layout" method="get" action="/">
<aside>
<h2>Filter Data</h2>
{sidebar}
</aside>
<main>
<h1>{title}</h1>
{studios}
{ratings}
{genres}
{episodes}
<footer>{rows} titles from {source} &middot; build {hash}</footer>
</main>
</form>
<script>{script}</script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        plotly = escape_html(&settings.plotly_js_url),
        style = assets::STYLE,
        sidebar = sidebar,
        studios = studios,
        ratings = ratings,
        genres = genres,
        episodes = episodes,
        rows = dataset.len(),
        source = escape_html(&dataset.source().to_string_lossy()),
        hash = escape_html(&settings.build_hash),
        script = assets::SCRIPT,
    )
}

fn render_top_studios(dataset: &Dataset, limit: usize) -> String {
    let body = match run_view("top-studios", || top_studios(dataset, limit)) {
        Ok(ranking) => format!(
            r#"<div class="tab-group">
<div class="tabs">
<button type="button" class="active" data-panel="studios-pie-panel">Pie Chart</button>
<button type="button" data-panel="studios-bar-panel">Bar Chart</button>
</div>
<div id="studios-pie-panel" class="tab-panel active">{pie}</div>
<div id="studios-bar-panel" class="tab-panel">{bar}</div>
</div>"#,
            pie = chart_div("studios-pie", &figures::studio_pie(&ranking)),
            bar = chart_div("studios-bar", &figures::studio_bar(&ranking)),
        ),
        Err(err) => view_error("top studios", &err.source),
    };
    format!(
        "<section id=\"top-studios\">\n<h2>Top {} Studios based on the titles they worked on</h2>\n{}\n</section>",
        limit, body
    )
}

fn render_rating_distribution(
    dataset: &Dataset,
    options: Result<&FilterOptions, &ViewError>,
    filter: &RatingFilter,
) -> String {
    let points = run_view("rating-distribution", || rating_distribution(dataset, filter));
    let body = match (options, points) {
        (Ok(options), Ok(points)) => {
            let genre_choices = all_and(&options.genres);
            let setting_choices = all_and(&options.settings);
            format!(
                r#"<label for="genre">Select Genre</label>
{genre_select}
<label for="setting">Select Setting</label>
{setting_select}
<button type="submit" class="apply-filters">Apply</button>
<div id="rating-scatter-view">{chart}</div>"#,
                genre_select = select("genre", &genre_choices, false, |value| {
                    value == filter.genre.as_param()
                }),
                setting_select = select("setting", &setting_choices, false, |value| {
                    value == filter.setting.as_param()
                }),
                chart = chart_div("rating-scatter", &figures::rating_scatter(&points)),
            )
        }
        (Err(err), _) => view_error("rating distribution", &err.source),
        (_, Err(err)) => view_error("rating distribution", &err.source),
    };
    format!(
        "<section id=\"rating-distribution\">\n<h2>Rating Distribution Overview</h2>\n{}\n</section>",
        body
    )
}

fn render_genre_ratings(dataset: &Dataset) -> String {
    let body = match run_view("genre-ratings", || mean_rating_by_genre(dataset)) {
        Ok(ratings) => chart_div("genre-ratings-chart", &figures::genre_rating_bars(&ratings)),
        Err(err) => view_error("genre ratings", &err.source),
    };
    format!(
        "<section id=\"genre-ratings\">\n<h2>Mean Rating by Genre</h2>\n{}\n</section>",
        body
    )
}

fn render_episode_ratings(dataset: &Dataset) -> String {
    let body = match run_view("episode-ratings", || mean_rating_by_episode_group(dataset)) {
        Ok(groups) => chart_div("episode-ratings-chart", &figures::episode_rating_bars(&groups)),
        Err(err) => view_error("episode ratings", &err.source),
    };
    format!(
        "<section id=\"episode-ratings\">\n<h2>Mean Rating by Number of Episodes</h2>\n{}\n</section>",
        body
    )
}

fn render_sidebar(
    dataset: &Dataset,
    options: Result<&FilterOptions, &ViewError>,
    filter: &MultiFilter,
) -> String {
    let options = match options {
        Ok(options) => options,
        Err(err) => return view_error("filters", &err.source),
    };
    let table = match run_view("filtered-titles", || filter_titles(dataset, filter)) {
        Ok(Some(table)) => render_table(&table),
        Ok(None) => String::new(),
        Err(err) => view_error("filtered titles", &err.source),
    };
    format!(
        r#"<label for="genres">Select Genres</label>
{genres}
<label for="settings">Select Settings</label>
{settings}
<button type="submit" class="apply-filters">Apply</button>
<div id="filtered-titles-view">{table}</div>"#,
        genres = select("genres", &options.genres, true, |value| {
            filter.genres.iter().any(|selected| selected == value)
        }),
        settings = select("settings", &options.settings, true, |value| {
            filter.settings.iter().any(|selected| selected == value)
        }),
        table = table,
    )
}

fn render_table(table: &FilteredTable) -> String {
    let mut html = String::from("<h3>Filtered Data</h3>\n<table>\n<thead><tr>");
    for column in &table.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn all_and(values: &[String]) -> Vec<String> {
    std::iter::once(ALL.to_owned())
        .chain(values.iter().cloned())
        .collect()
}

fn select(
    name: &str,
    values: &[String],
    multiple: bool,
    is_selected: impl Fn(&str) -> bool,
) -> String {
    let mut html = format!(
        "<select id=\"{name}\" name=\"{name}\"{}>",
        if multiple { " multiple" } else { "" }
    );
    for value in values {
        let value_html = escape_html(value);
        html.push_str(&format!(
            "<option value=\"{value_html}\"{}>{value_html}</option>",
            if is_selected(value) { " selected" } else { "" }
        ));
    }
    html.push_str("</select>");
    html
}

fn chart_div(id: &str, figure: &Figure) -> String {
    let figure_json = match serde_json::to_string(figure) {
        Ok(json) => json,
        Err(err) => {
            warn!("Could not serialize figure {}: {}", id, err);
            return String::from("<div class=\"view-error\">Could not draw chart</div>");
        }
    };
    format!(
        "<div id=\"{}\" class=\"chart\" data-figure=\"{}\"></div>",
        id,
        escape_html(&figure_json)
    )
}

/// Error box in place of a section, the failure is already logged and counted.
fn view_error(view: &str, err: &DatasetError) -> String {
    format!(
        "<div class=\"view-error\">Could not render {}: {}</div>",
        view,
        escape_html(&err.to_string())
    )
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
