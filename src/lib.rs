//! # LBN Data - dataset access for the physics-inspired feature engineering tutorial
//!
//! This library resolves and loads the LBN datasets used in the tutorial.
//! Datasets live on a restricted EOS mount; when that mount is not
//! accessible, missing files are downloaded from CERNBox into a local data
//! directory and loaded from there:
//!
//! - Environment detection (is the EOS mount readable?)
//! - Local-first file resolution with CERNBox download fallback
//! - Loading npz dataset files into labels/features arrays
//!
//! # Example
//!
//! ```rust,no_run
//! use lbn_data::{DatasetLoader, DatasetStore, Environment, Kind, Level, Sorting};
//!
//! let store = DatasetStore::new(Environment::detect());
//! let loader = DatasetLoader::new(store);
//! let dataset = loader.load(Level::Low, Sorting::Gen, Kind::Train).unwrap();
//! println!("features: {:?}", dataset.features.shape());
//! ```

pub mod data;
pub mod env;
pub mod remote;
pub mod store;

pub use data::loader::DatasetLoader;
pub use data::types::{Kind, LbnDataset, Level, Sorting};
pub use data::DataError;
pub use env::Environment;
pub use remote::cernbox::{cernbox_url, Fetch, HttpFetcher};
pub use remote::FetchError;
pub use store::DatasetStore;
