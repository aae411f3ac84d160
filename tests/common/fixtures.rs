//! Test fixture creation for datasets on disk

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 10 titles from 3 studios (5/3/2 titles).
pub const FIXTURE_CSV: &str = "\
Title,Main_Studio,Genre,Setting,Subgenres,Rating,Number_of_Episodes
Starfall Drift,Sunrise,Action,Space,Mecha,8.5,24
Iron Halo,Sunrise,Action,Space,Mecha,7.9,12
Neon Courier,Sunrise,Action,City,Cyberpunk,7.1,13
Quiet Orchard,Sunrise,Slice of Life,Countryside,Iyashikei,8.2,12
Paper Lanterns,Sunrise,Drama,City,Romance,6.8,1
Tidebound,Madhouse,Fantasy,Ocean,Adventure,8.9,25
Glass Vow,Madhouse,Drama,School,Romance,7.4,11
Ashen Crown,Madhouse,Fantasy,Medieval,Adventure,8.0,50
Orbit Cafe,Kyoto Animation,Slice of Life,Space,Comedy,7.6,12
Lantern Hill,Kyoto Animation,Horror,Countryside,Psychological,6.5,1
";

/// Same titles without the Rating column.
pub const NO_RATING_CSV: &str = "\
Title,Main_Studio,Genre,Setting,Subgenres,Number_of_Episodes
Starfall Drift,Sunrise,Action,Space,Mecha,24
Iron Halo,Sunrise,Action,Space,Mecha,12
Tidebound,Madhouse,Fantasy,Ocean,Adventure,25
";

/// Writes `csv` to a fresh temporary directory.
/// Returns (temp_dir, dataset_path)
pub fn create_test_dataset(csv: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("anime_dataset.csv");
    fs::write(&path, csv)?;
    Ok((dir, path))
}
