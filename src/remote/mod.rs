//! Remote access to the CERNBox storage endpoint

pub mod cernbox;
pub mod error;

pub use cernbox::{cernbox_url, Fetch, HttpFetcher};
pub use error::{FetchError, FetchResult};
