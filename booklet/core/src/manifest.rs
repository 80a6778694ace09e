//! Booklet Manifest
//!
//! Static configuration loaded once at startup: the ordered page list,
//! chapter jump targets, and optional timing/input overrides. Stored as a
//! TOML document:
//!
//! ```toml
//! title = "Digital Creativity"
//!
//! [[page]]
//! source = "pages/01-cover.html"
//! title = "Cover"
//! class = "cover-page"
//!
//! [[page]]
//! source = "pages/02-introduction.html"
//! title = "Introduction"
//!
//! [[chapter]]
//! page = 0
//! label = "Cover"
//!
//! [timing]
//! mark_active_ms = 50
//! total_ms = 500
//!
//! [input]
//! swipe_threshold = 6
//! ```
//!
//! Validation happens at parse time: at least one page, chapter targets in
//! range and sorted ascending, transition total longer than the mark-active
//! delay. Page indices are assigned from sequence position.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ManifestError;
use crate::pages::{ChapterMarker, PageSpec};
use crate::transition::TransitionTiming;

/// Default horizontal drag distance (in columns) treated as a swipe.
const DEFAULT_SWIPE_THRESHOLD: u16 = 6;

/// Validated booklet configuration.
#[derive(Clone, Debug)]
pub struct BookletManifest {
    /// Optional document title for the surface header
    pub title: Option<String>,
    /// Pages in reading order; `PageSpec::index` equals the position here
    pub pages: Vec<PageSpec>,
    /// Chapter markers, sorted ascending by target page
    pub chapters: Vec<ChapterMarker>,
    /// Transition timing (defaults unless overridden)
    pub timing: TransitionTiming,
    /// Swipe threshold in columns for the surface's drag gesture
    pub swipe_threshold: u16,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "page")]
    pages: Vec<RawPage>,
    #[serde(default, rename = "chapter")]
    chapters: Vec<RawChapter>,
    #[serde(default)]
    timing: Option<RawTiming>,
    #[serde(default)]
    input: Option<RawInput>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    source: String,
    title: String,
    #[serde(default)]
    class: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    page: usize,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawTiming {
    #[serde(default)]
    mark_active_ms: Option<u64>,
    #[serde(default)]
    total_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawInput {
    #[serde(default)]
    swipe_threshold: Option<u16>,
}

impl BookletManifest {
    /// Read and validate a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse and validate a manifest from TOML text.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = toml::from_str(text)?;

        if raw.pages.is_empty() {
            return Err(ManifestError::NoPages);
        }

        let pages: Vec<PageSpec> = raw
            .pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| PageSpec {
                index,
                source_locator: page.source,
                title: page.title,
                style_class: page.class,
            })
            .collect();

        let mut chapters = Vec::with_capacity(raw.chapters.len());
        let mut last_target: Option<usize> = None;
        for chapter in raw.chapters {
            if chapter.page >= pages.len() {
                return Err(ManifestError::ChapterOutOfRange {
                    label: chapter.label,
                    target: chapter.page,
                    total: pages.len(),
                });
            }
            if last_target.is_some_and(|prev| chapter.page <= prev) {
                return Err(ManifestError::ChaptersUnsorted {
                    label: chapter.label,
                    target: chapter.page,
                });
            }
            last_target = Some(chapter.page);
            chapters.push(ChapterMarker {
                target_page_index: chapter.page,
                label: chapter.label,
            });
        }

        let defaults = TransitionTiming::default();
        let timing = match raw.timing {
            Some(t) => TransitionTiming::new(
                Duration::from_millis(
                    t.mark_active_ms
                        .unwrap_or(defaults.mark_active_delay().as_millis() as u64),
                ),
                Duration::from_millis(t.total_ms.unwrap_or(defaults.total().as_millis() as u64)),
            )?,
            None => defaults,
        };

        let swipe_threshold = raw
            .input
            .and_then(|i| i.swipe_threshold)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD);

        debug!(
            pages = pages.len(),
            chapters = chapters.len(),
            "manifest loaded"
        );

        Ok(Self {
            title: raw.title,
            pages,
            chapters,
            timing,
            swipe_threshold,
        })
    }
}
