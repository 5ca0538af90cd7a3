//! Dataset loading
//!
//! Thin layer over [`DatasetStore`]: validate the dataset coordinates, build
//! the file identifier, resolve it (downloading if necessary) and parse the
//! npz archive.

use super::error::{DataError, DataResult};
use super::types::{Kind, LbnDataset, Level, Sorting};
use crate::store::DatasetStore;

/// Loads LBN datasets through a [`DatasetStore`]
pub struct DatasetLoader {
    store: DatasetStore,
}

impl DatasetLoader {
    /// Create a loader over the given store
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }

    /// Load the dataset selected by `level`, `sorting` and `kind`.
    ///
    /// Builds the identifier `lbn/data/{level}_{sorting}_{kind}.npz`,
    /// resolves it through the store (which may download the file) and
    /// parses the npz archive into labels and features arrays.
    pub fn load(&self, level: Level, sorting: Sorting, kind: Kind) -> DataResult<LbnDataset> {
        let identifier = format!(
            "lbn/data/{}_{}_{}.npz",
            level.as_str(),
            sorting.as_str(),
            kind.as_str()
        );
        let local_path = self.store.resolve(&identifier)?;
        LbnDataset::from_npz(local_path)
    }

    /// Load a dataset from string coordinates.
    ///
    /// Fails with a descriptive error naming the offending value and the
    /// allowed set when any coordinate is not recognized.
    pub fn load_str(&self, level: &str, sorting: &str, kind: &str) -> DataResult<LbnDataset> {
        let level =
            Level::from_str(level).ok_or_else(|| DataError::UnknownLevel(level.to_string()))?;
        let sorting = Sorting::from_str(sorting)
            .ok_or_else(|| DataError::UnknownSorting(sorting.to_string()))?;
        let kind = Kind::from_str(kind).ok_or_else(|| DataError::UnknownKind(kind.to_string()))?;

        self.load(level, sorting, kind)
    }
}
