//! Local-first dataset file resolution
//!
//! A dataset identifier is a relative path like `lbn/data/low_gen_train.npz`.
//! When the EOS mount is readable the identifier resolves directly under the
//! mount root. Otherwise it resolves under the local data directory, and a
//! missing file is downloaded from CERNBox first.

use crate::env::Environment;
use crate::remote::cernbox::{cernbox_url, Fetch, HttpFetcher};
use crate::remote::FetchResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Resolves dataset identifiers to local filesystem paths
pub struct DatasetStore {
    env: Environment,
    fetcher: Box<dyn Fetch>,
}

impl DatasetStore {
    /// Create a store downloading over HTTP
    pub fn new(env: Environment) -> Self {
        Self::with_fetcher(env, Box::new(HttpFetcher::new()))
    }

    /// Create a store with a custom download implementation
    pub fn with_fetcher(env: Environment, fetcher: Box<dyn Fetch>) -> Self {
        Self { env, fetcher }
    }

    /// The environment this store resolves against
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Resolve a dataset identifier to a usable local path.
    ///
    /// With the EOS mount available this is a pure path join; the file is
    /// not checked for existence (the caller sees a not-found error when it
    /// opens the file). Without the mount, the identifier maps into the
    /// local data directory and a missing file is downloaded from CERNBox
    /// before the path is returned. Download and filesystem errors propagate
    /// unmodified.
    pub fn resolve(&self, identifier: &str) -> FetchResult<PathBuf> {
        let identifier = identifier.trim_start_matches('/');

        if self.env.eos_available() {
            return Ok(self.env.eos_dir().join(identifier));
        }

        let local_path = self.env.data_dir().join(identifier);
        if !local_path.exists() {
            if let Some(parent) = local_path.parent() {
                fs::create_dir_all(parent)?;
            }
            info!("downloading {} from CERNBox", identifier);
            self.fetcher.fetch(&cernbox_url(identifier), &local_path)?;
        }

        Ok(local_path)
    }
}
