//! Content Loader
//!
//! Retrieves every page fragment named by the manifest and turns it into a
//! [`MountedPage`]. Fetches are issued concurrently but the results are
//! applied in PageSpec order, so the mounted sequence always matches
//! reading order regardless of completion timing.
//!
//! A failed fetch is local to its page: the loader mounts a placeholder
//! carrying the failing locator and keeps going. The loader itself never
//! fails — after it returns, the caller opens the navigation gate.
//!
//! [`FragmentSource`] is the seam: HTTP and filesystem implementations
//! live here, tests supply mocks.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use futures::future;
use tracing::{debug, warn};

use crate::error::FragmentError;
use crate::pages::{MountedPage, PageSpec};

/// Per-fragment HTTP timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Async seam for retrieving one page fragment.
///
/// The contract is deliberately thin: a locator either resolves to markup
/// text or yields a retrieval error. The loader does not parse beyond
/// treating the result as raw injectable markup.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    /// Retrieve the fragment behind `locator`.
    async fn fetch(&self, locator: &str) -> Result<String, FragmentError>;
}

/// Fetches fragments over HTTP(S).
pub struct HttpFragmentSource {
    client: reqwest::Client,
}

impl HttpFragmentSource {
    /// Create a source with a shared client and a per-request timeout.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpFragmentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, locator: &str) -> Result<String, FragmentError> {
        let response = self.client.get(locator).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Fetches fragments from the filesystem, relative to a root directory.
pub struct FileFragmentSource {
    root: PathBuf,
}

impl FileFragmentSource {
    /// Create a source rooted at `root`; relative locators resolve under it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FragmentSource for FileFragmentSource {
    async fn fetch(&self, locator: &str) -> Result<String, FragmentError> {
        Ok(tokio::fs::read_to_string(self.root.join(locator)).await?)
    }
}

/// Dispatches by locator scheme: `http(s)://` to the HTTP source, plain
/// paths to the filesystem source. Any other scheme is rejected as
/// unsupported rather than misread as a file path.
pub struct LocatorSource {
    http: HttpFragmentSource,
    files: FileFragmentSource,
}

impl LocatorSource {
    /// Create a dispatcher with file locators rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            http: HttpFragmentSource::new(),
            files: FileFragmentSource::new(root),
        }
    }
}

#[async_trait]
impl FragmentSource for LocatorSource {
    async fn fetch(&self, locator: &str) -> Result<String, FragmentError> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            self.http.fetch(locator).await
        } else if locator.contains("://") {
            // Anything with a scheme we don't speak must not be treated as
            // a file path; the error names the locator instead of a
            // confusing not-found.
            Err(FragmentError::UnsupportedLocator(locator.to_string()))
        } else {
            self.files.fetch(locator).await
        }
    }
}

/// Load every fragment and mount the pages in PageSpec order.
///
/// Fetches run concurrently; failures mount as placeholders carrying the
/// failing locator. Always yields exactly one page per spec.
pub async fn load_all(specs: &[PageSpec], source: &dyn FragmentSource) -> Vec<MountedPage> {
    let fetches = specs.iter().map(|spec| source.fetch(&spec.source_locator));
    let results = future::join_all(fetches).await;

    specs
        .iter()
        .cloned()
        .zip(results)
        .map(|(spec, result)| match result {
            Ok(content) => {
                debug!(page = spec.index, locator = %spec.source_locator, "fragment mounted");
                MountedPage::mounted(spec, content)
            }
            Err(err) => {
                warn!(
                    page = spec.index,
                    locator = %spec.source_locator,
                    error = %err,
                    "fragment failed to load; mounting placeholder"
                );
                MountedPage::unavailable(spec, &err.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::PresentationState;
    use pretty_assertions::assert_eq;
    use std::io;

    /// Mock source: locators containing "missing" fail, the rest echo the
    /// locator back as content.
    struct EchoSource;

    #[async_trait]
    impl FragmentSource for EchoSource {
        async fn fetch(&self, locator: &str) -> Result<String, FragmentError> {
            if locator.contains("missing") {
                Err(FragmentError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "not found",
                )))
            } else {
                Ok(format!("<p>{locator}</p>"))
            }
        }
    }

    fn specs(locators: &[&str]) -> Vec<PageSpec> {
        locators
            .iter()
            .enumerate()
            .map(|(index, locator)| PageSpec {
                index,
                source_locator: locator.to_string(),
                title: format!("Page {index}"),
                style_class: None,
            })
            .collect()
    }

    #[tokio::test]
    async fn pages_mount_in_spec_order() {
        let specs = specs(&["a.html", "b.html", "c.html"]);
        let pages = load_all(&specs, &EchoSource).await;

        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.spec.index, i);
            assert!(page.content.contains(&page.spec.source_locator));
        }
        assert_eq!(pages[0].presentation, PresentationState::Active);
        assert_eq!(pages[1].presentation, PresentationState::Inactive);
    }

    #[tokio::test]
    async fn one_failure_does_not_abort_the_rest() {
        let specs = specs(&["a.html", "b.html", "missing.html", "d.html", "e.html"]);
        let pages = load_all(&specs, &EchoSource).await;

        assert_eq!(pages.len(), 5);
        assert!(pages[2].placeholder);
        assert!(pages[2].content.contains("missing.html"));
        for i in [0, 1, 3, 4] {
            assert!(!pages[i].placeholder);
        }
    }

    #[tokio::test]
    async fn unknown_scheme_is_rejected_not_misread_as_a_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocatorSource::new(dir.path());

        let err = source.fetch("ftp://host/page.html").await.unwrap_err();
        assert!(matches!(err, FragmentError::UnsupportedLocator(_)));
        assert!(err.to_string().contains("ftp://host/page.html"));

        // A placeholder mounted from it carries the same locator.
        let spec = specs(&["ftp://host/page.html"]).remove(0);
        let page = MountedPage::unavailable(spec, &err.to_string());
        assert!(page.placeholder);
        assert!(page.content.contains("ftp://host/page.html"));
    }

    #[tokio::test]
    async fn file_source_reads_relative_to_its_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), "<p>from disk</p>").unwrap();

        let source = FileFragmentSource::new(dir.path());
        let content = source.fetch("page.html").await.unwrap();
        assert_eq!(content, "<p>from disk</p>");

        let err = source.fetch("nope.html").await.unwrap_err();
        assert!(matches!(err, FragmentError::Io(_)));
    }
}
