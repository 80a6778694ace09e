//! Error Types
//!
//! Failures in this system are recoverable by design: a fragment that
//! fails to load becomes a placeholder page, an invalid navigation request
//! is dropped, and an unavailable fullscreen capability no-ops. The error
//! types below exist at the seams where a caller still needs to know what
//! went wrong (fetching one fragment, loading the manifest).

use thiserror::Error;

/// Failure to retrieve a single page fragment.
///
/// Always local to one page: the loader substitutes a placeholder and
/// keeps going.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// HTTP transport or status failure
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem read failure
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Locator scheme the source does not handle
    #[error("unsupported locator: {0}")]
    UnsupportedLocator(String),
}

/// Failure to load or validate the booklet manifest.
///
/// Unlike fragment failures these are fatal: without a valid page list
/// there is nothing to show.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("manifest read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest is not valid TOML
    #[error("manifest parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Manifest defines no pages
    #[error("manifest defines no pages")]
    NoPages,

    /// Chapter marker points outside the page range
    #[error("chapter '{label}' targets page {target} but only {total} pages exist")]
    ChapterOutOfRange {
        label: String,
        target: usize,
        total: usize,
    },

    /// Chapter markers are not sorted ascending by target page
    #[error("chapter '{label}' is out of order (targets page {target})")]
    ChaptersUnsorted { label: String, target: usize },

    /// Transition timing where the mark-active delay is not shorter than
    /// the total duration
    #[error("transition total ({total_ms}ms) must exceed mark-active delay ({delay_ms}ms)")]
    InvalidTiming { delay_ms: u64, total_ms: u64 },
}
