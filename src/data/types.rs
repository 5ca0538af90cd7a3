//! Core types for the LBN datasets
//!
//! A dataset file is selected by three coordinates:
//! - Level: which feature set the file contains (low, high, mixed)
//! - Sorting: particle ordering used when the file was produced (gen, pt)
//! - Kind: train or test split
//!
//! The file itself is an npz archive with two entries, `labels` and
//! `features`, loaded into [`LbnDataset`].

use super::error::DataResult;
use ndarray::ArrayD;
use ndarray_npy::NpzReader;
use std::fs::File;
use std::path::Path;

/// Feature level of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
    Mixed,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::High, Level::Mixed];

    /// Convert level to its identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::High => "high",
            Level::Mixed => "mixed",
        }
    }

    /// Parse level from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Level::Low),
            "high" => Some(Level::High),
            "mixed" => Some(Level::Mixed),
            _ => None,
        }
    }

    /// Comma-separated list of recognized level strings
    pub fn allowed() -> String {
        Level::ALL.map(|l| l.as_str()).join(", ")
    }
}

/// Particle sorting of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorting {
    Gen,
    Pt,
}

impl Sorting {
    pub const ALL: [Sorting; 2] = [Sorting::Gen, Sorting::Pt];

    /// Convert sorting to its identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::Gen => "gen",
            Sorting::Pt => "pt",
        }
    }

    /// Parse sorting from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gen" => Some(Sorting::Gen),
            "pt" => Some(Sorting::Pt),
            _ => None,
        }
    }

    /// Comma-separated list of recognized sorting strings
    pub fn allowed() -> String {
        Sorting::ALL.map(|s| s.as_str()).join(", ")
    }
}

/// Train/test split of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Train,
    Test,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Train, Kind::Test];

    /// Convert kind to its identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Train => "train",
            Kind::Test => "test",
        }
    }

    /// Parse kind from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "train" => Some(Kind::Train),
            "test" => Some(Kind::Test),
            _ => None,
        }
    }

    /// Comma-separated list of recognized kind strings
    pub fn allowed() -> String {
        Kind::ALL.map(|k| k.as_str()).join(", ")
    }
}

/// An LBN dataset loaded from an npz archive
///
/// The arrays are carried as-is; this library does not inspect shapes or
/// contents beyond what the archive format requires.
#[derive(Debug, Clone)]
pub struct LbnDataset {
    /// Target labels
    pub labels: ArrayD<f32>,
    /// Input features
    pub features: ArrayD<f32>,
}

impl LbnDataset {
    /// Read a dataset from an npz file with `labels` and `features` entries
    pub fn from_npz<P: AsRef<Path>>(path: P) -> DataResult<Self> {
        let file = File::open(path.as_ref())?;
        let mut npz = NpzReader::new(file)?;

        let labels: ArrayD<f32> = npz.by_name("labels")?;
        let features: ArrayD<f32> = npz.by_name("features")?;

        Ok(Self { labels, features })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_npy::NpzWriter;
    use tempfile::tempdir;

    #[test]
    fn test_level_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_str(level.as_str()), Some(level));
        }
        assert_eq!(Level::from_str("medium"), None);
    }

    #[test]
    fn test_sorting_round_trip() {
        for sorting in Sorting::ALL {
            assert_eq!(Sorting::from_str(sorting.as_str()), Some(sorting));
        }
        assert_eq!(Sorting::from_str("eta"), None);
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(Kind::from_str("validation"), None);
    }

    #[test]
    fn test_from_npz_reads_labels_and_features() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.npz");

        let labels = array![[1.0_f32], [0.0], [1.0]];
        let features = array![[0.1_f32, 0.2], [0.3, 0.4], [0.5, 0.6]];

        let mut npz = NpzWriter::new(File::create(&path).unwrap());
        npz.add_array("labels", &labels).unwrap();
        npz.add_array("features", &features).unwrap();
        npz.finish().unwrap();

        let dataset = LbnDataset::from_npz(&path).unwrap();
        assert_eq!(dataset.labels.shape(), &[3, 1]);
        assert_eq!(dataset.features.shape(), &[3, 2]);
        assert_eq!(dataset.features[[2, 1]], 0.6);
    }

    #[test]
    fn test_from_npz_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = LbnDataset::from_npz(dir.path().join("absent.npz"));
        assert!(matches!(result, Err(crate::data::DataError::Io(_))));
    }
}
