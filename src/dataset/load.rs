use super::{Dataset, DatasetError};
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = Dataset::from_reader(file, path)?;

    info!(
        "Dataset {:?} loaded in {}ms: {} rows, {} columns",
        path,
        start.elapsed().as_millis(),
        dataset.len(),
        dataset.columns().len()
    );
    Ok(dataset)
}
