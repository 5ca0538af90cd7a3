//! CERNBox download client
//!
//! The tutorial datasets are shared through a public CERNBox link. A file is
//! addressed by a directory component and a filename, both passed as query
//! parameters to the share's download endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use lbn_data::remote::cernbox::{cernbox_url, Fetch, HttpFetcher};
//!
//! let url = cernbox_url("lbn/data/low_gen_train.npz");
//! let fetcher = HttpFetcher::new();
//! fetcher.fetch(&url, "data/low_gen_train.npz".as_ref()).unwrap();
//! ```

use super::error::{FetchError, FetchResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// CERNBox share download URL pattern
const CERNBOX_URL_PATTERN: &str =
    "https://cernbox.cern.ch/index.php/s/xDYiSmbleT3rip4/download?path={}&files={}";

/// Characters escaped in query components; alphanumerics and `-`, `_`, `.`
/// pass through, everything else (notably `/`) is percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

/// Build the CERNBox download URL for a dataset identifier.
///
/// The identifier's directory part is normalized into an absolute-style path
/// (duplicate separators collapsed, `.` and `..` resolved), then the
/// directory and the filename are percent-encoded separately and substituted
/// into the share's URL pattern.
pub fn cernbox_url(identifier: &str) -> String {
    let identifier = identifier.trim_start_matches('/');
    let (dir, file) = match identifier.rsplit_once('/') {
        Some((dir, file)) => (dir, file),
        None => ("", identifier),
    };

    let path = utf8_percent_encode(&normalize_path(dir), QUERY_COMPONENT).to_string();
    let files = utf8_percent_encode(file, QUERY_COMPONENT).to_string();

    CERNBOX_URL_PATTERN
        .replacen("{}", &path, 1)
        .replacen("{}", &files, 1)
}

/// Normalize a relative directory string into an absolute-style path
fn normalize_path(dir: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in dir.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            p => parts.push(p),
        }
    }
    format!("/{}", parts.join("/"))
}

/// Single-file download capability
///
/// One method, one blocking call: fetch the resource at `url` into the file
/// at `dest`. Tests substitute a fake implementation to avoid the network.
pub trait Fetch {
    fn fetch(&self, url: &str, dest: &Path) -> FetchResult<()>;
}

/// Blocking HTTP implementation of [`Fetch`]
///
/// One GET per call, body streamed to the destination file. No resumption,
/// no retry, no integrity check; any error propagates to the caller.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with default client settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> FetchResult<()> {
        let mut response = self.client.get(url).send()?.error_for_status()?;

        // Download next to the destination and rename into place, so an
        // interrupted transfer never leaves a partial file at `dest`.
        let part = partial_path(dest);
        let result = File::create(&part)
            .map_err(FetchError::from)
            .and_then(|mut file| {
                response.copy_to(&mut file).map_err(FetchError::from)?;
                Ok(())
            });

        match result {
            Ok(()) => {
                fs::rename(&part, dest)?;
                Ok(())
            }
            Err(err) => {
                let _ = fs::remove_file(&part);
                Err(err)
            }
        }
    }
}

/// Sibling path the body is written to before the final rename
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_url_splits_directory_and_filename() {
        let url = cernbox_url("a/b/c.npz");
        assert_eq!(
            url,
            "https://cernbox.cern.ch/index.php/s/xDYiSmbleT3rip4/download\
             ?path=%2Fa%2Fb&files=c.npz"
        );
    }

    #[test]
    fn test_url_for_bare_filename() {
        let url = cernbox_url("c.npz");
        assert!(url.contains("path=%2F&files=c.npz"));
    }

    #[test]
    fn test_url_strips_leading_separators() {
        assert_eq!(cernbox_url("/a/b/c.npz"), cernbox_url("a/b/c.npz"));
    }

    #[test]
    fn test_url_encodes_special_characters() {
        let url = cernbox_url("dir name/file name.npz");
        assert!(url.contains("path=%2Fdir%20name"));
        assert!(url.contains("files=file%20name.npz"));
    }

    #[test]
    fn test_normalize_collapses_and_resolves_segments() {
        assert_eq!(normalize_path("a//b/./c"), "/a/b/c");
        assert_eq!(normalize_path("a/b/../c"), "/a/c");
        assert_eq!(normalize_path(".."), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_http_fetcher_writes_body_to_destination() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/file.npz")
            .with_status(200)
            .with_body(b"payload".as_slice())
            .create();

        let dir = tempdir().unwrap();
        let dest = dir.path().join("file.npz");

        let fetcher = HttpFetcher::new();
        fetcher
            .fetch(&format!("{}/file.npz", server.url()), &dest)
            .unwrap();

        mock.assert();
        assert_eq!(std::fs::read(&dest).unwrap(), b"payload");
        assert!(!dir.path().join("file.npz.part").exists());
    }

    #[test]
    fn test_http_fetcher_interrupted_download_leaves_no_file() {
        use std::io::Write;

        let mut server = mockito::Server::new();
        server
            .mock("GET", "/truncated.npz")
            .with_chunked_body(|writer| {
                writer.write_all(b"partial")?;
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "transfer interrupted",
                ))
            })
            .create();

        let dir = tempdir().unwrap();
        let dest = dir.path().join("truncated.npz");

        let fetcher = HttpFetcher::new();
        let result = fetcher.fetch(&format!("{}/truncated.npz", server.url()), &dest);

        assert!(result.is_err());
        assert!(!dest.exists());
        assert!(!dir.path().join("truncated.npz.part").exists());
    }

    #[test]
    fn test_http_fetcher_propagates_error_status() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/missing.npz")
            .with_status(404)
            .create();

        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing.npz");

        let fetcher = HttpFetcher::new();
        let result = fetcher.fetch(&format!("{}/missing.npz", server.url()), &dest);

        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
