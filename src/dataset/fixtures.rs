//! Shared dataset fixtures for unit tests.

use super::Dataset;

/// 10 titles, 3 studios (5/3/2 titles), 5 genres, 6 settings.
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

pub fn dataset_from_str(csv: &str) -> Dataset {
    Dataset::from_reader(csv.as_bytes(), "inline.csv").unwrap()
}

pub fn fixture_dataset() -> Dataset {
    dataset_from_str(FIXTURE_CSV)
}

pub fn empty_dataset() -> Dataset {
    dataset_from_str(
        "Title,Main_Studio,Genre,Setting,Subgenres,Rating,Number_of_Episodes\n",
    )
}
