//! Dataset types and loading

pub mod error;
pub mod loader;
pub mod types;

pub use error::DataError;
pub use loader::DatasetLoader;
pub use types::{Kind, LbnDataset, Level, Sorting};
