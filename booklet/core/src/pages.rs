//! Page Types
//!
//! Static page configuration ([`PageSpec`], [`ChapterMarker`]) and the
//! runtime page entity ([`MountedPage`]) created by the content loader.
//!
//! PageSpecs and ChapterMarkers are fixed at startup and never change.
//! MountedPages are created once, in PageSpec order, and live for the whole
//! session; only their presentation state is mutated afterwards, and only
//! by the transition animator.

use serde::{Deserialize, Serialize};

/// Static description of one document page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Position in reading order (unique, assigned by the manifest)
    pub index: usize,
    /// Where the fragment content comes from (file path or http(s) URL)
    pub source_locator: String,
    /// Page title (shown in the surface header)
    pub title: String,
    /// Optional presentation class (e.g. "cover-page"), interpreted by the
    /// surface; `None` means the default page style
    pub style_class: Option<String>,
}

/// A named jump target referencing a page index.
///
/// Markers are kept sorted ascending by `target_page_index`; the manifest
/// rejects unsorted sequences so that current-chapter resolution can scan
/// for the greatest marker at or before the current page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMarker {
    /// The page this marker jumps to
    pub target_page_index: usize,
    /// Short label shown on the chapter control
    pub label: String,
}

/// Presentation state of a mounted page.
///
/// At most one page is `Active` and at most one is `Previous` at any time.
/// During a transition the outgoing page is marked `Previous` immediately
/// and the incoming page `Active` after a short delay, so the surface can
/// overlap outgoing/incoming visual effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PresentationState {
    /// The page currently shown
    Active,
    /// The page being transitioned away from
    Previous,
    /// Everything else
    #[default]
    Inactive,
}

/// A page after its content has been loaded.
#[derive(Clone, Debug)]
pub struct MountedPage {
    /// The spec this page was mounted from
    pub spec: PageSpec,
    /// Raw fragment markup, or the placeholder text on load failure
    pub content: String,
    /// Current presentation state
    pub presentation: PresentationState,
    /// True when the fragment failed to load and `content` is a placeholder
    pub placeholder: bool,
}

impl MountedPage {
    /// Mount a successfully fetched fragment.
    ///
    /// Page 0 starts `Active`; every other page starts `Inactive`.
    pub fn mounted(spec: PageSpec, content: String) -> Self {
        let presentation = Self::initial_presentation(spec.index);
        Self {
            spec,
            content,
            presentation,
            placeholder: false,
        }
    }

    /// Mount a placeholder for a fragment that failed to load.
    ///
    /// The placeholder text always carries the failing locator so the
    /// reader can see which resource is missing.
    pub fn unavailable(spec: PageSpec, reason: &str) -> Self {
        let presentation = Self::initial_presentation(spec.index);
        let content = format!(
            "<h2>Page unavailable</h2>\
             <p>Could not load {}</p>\
             <p>{}</p>",
            spec.source_locator, reason
        );
        Self {
            spec,
            content,
            presentation,
            placeholder: true,
        }
    }

    fn initial_presentation(index: usize) -> PresentationState {
        if index == 0 {
            PresentationState::Active
        } else {
            PresentationState::Inactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(index: usize) -> PageSpec {
        PageSpec {
            index,
            source_locator: format!("pages/{index:02}.html"),
            title: format!("Page {index}"),
            style_class: None,
        }
    }

    #[test]
    fn first_page_mounts_active() {
        let page = MountedPage::mounted(spec(0), "<p>hi</p>".into());
        assert_eq!(page.presentation, PresentationState::Active);
    }

    #[test]
    fn later_pages_mount_inactive() {
        let page = MountedPage::mounted(spec(3), "<p>hi</p>".into());
        assert_eq!(page.presentation, PresentationState::Inactive);
    }

    #[test]
    fn placeholder_carries_the_locator() {
        let page = MountedPage::unavailable(spec(2), "connection refused");
        assert!(page.placeholder);
        assert!(page.content.contains("pages/02.html"));
        assert!(page.content.contains("connection refused"));
    }
}
