use super::genre_rating::RunningStats;
use crate::dataset::{Dataset, DatasetError, NUMBER_OF_EPISODES, RATING};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EpisodeGroup {
    OneShot,
    Short,
    Cour,
    Long,
}

impl EpisodeGroup {
    pub fn for_episodes(episodes: f64) -> Self {
        if episodes == 1.0 {
            EpisodeGroup::OneShot
        } else if episodes <= 12.0 {
            EpisodeGroup::Short
        } else if episodes <= 24.0 {
            EpisodeGroup::Cour
        } else {
            EpisodeGroup::Long
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EpisodeGroup::OneShot => "1 (One-shot)",
            EpisodeGroup::Short => "2-12",
            EpisodeGroup::Cour => "13-24",
            EpisodeGroup::Long => "25+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeGroupRating {
    pub group: EpisodeGroup,
    pub label: &'static str,
    pub mean_rating: f64,
}

/// Mean rating per episode-count group. Ratings are first averaged per
/// distinct episode count, the group value is the mean of those averages.
pub fn mean_rating_by_episode_group(
    dataset: &Dataset,
) -> Result<Vec<EpisodeGroupRating>, DatasetError> {
    let episodes_column = dataset.column(NUMBER_OF_EPISODES)?;
    let rating_column = dataset.column(RATING)?;

    // keyed by the raw bits, episode counts are whole numbers in practice
    let mut per_episode_count: BTreeMap<u64, (f64, RunningStats)> = BTreeMap::new();
    for (index, row) in dataset.rows().iter().enumerate() {
        let Some(episodes) = episodes_column.number(row, index)? else {
            continue;
        };
        let entry = per_episode_count
            .entry(episodes.to_bits())
            .or_insert_with(|| (episodes, RunningStats::default()));
        if let Some(rating) = rating_column.number(row, index)? {
            entry.1.push(rating);
        }
    }

    let mut per_group: BTreeMap<EpisodeGroup, RunningStats> = BTreeMap::new();
    for (episodes, stats) in per_episode_count.values() {
        if let Some(mean) = stats.mean() {
            per_group
                .entry(EpisodeGroup::for_episodes(*episodes))
                .or_default()
                .push(mean);
        }
    }

    Ok(per_group
        .into_iter()
        .filter_map(|(group, stats)| {
            stats.mean().map(|mean_rating| EpisodeGroupRating {
                group,
                label: group.label(),
                mean_rating,
            })
        })
        .collect())
}
