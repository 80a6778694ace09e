//! View Derivations
//!
//! Everything a surface shows besides the page body is derived state:
//! the 1-based page indicator, the progress fill, whether the prev/next
//! controls are enabled, and which chapter control is highlighted. The
//! derivations are pure functions of [`NavigationState`] plus the chapter
//! list — idempotent and safe to recompute every frame.

use crate::navigation::NavigationState;
use crate::pages::ChapterMarker;

/// Render-ready view of the current navigation state.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    /// Current page index (0-based)
    pub current_page: usize,
    /// Total page count
    pub total_pages: usize,
    /// "current / total", 1-based, for the page indicator
    pub page_indicator: String,
    /// Progress fill percentage; `None` for a single-page document, where
    /// the fill is left unchanged
    pub progress_percent: Option<f64>,
    /// Previous control enabled (disabled on the first page)
    pub prev_enabled: bool,
    /// Next control enabled (disabled on the last page)
    pub next_enabled: bool,
    /// Index into the chapter list of the highlighted marker; `None` only
    /// when no chapters exist
    pub active_chapter: Option<usize>,
    /// Initial load still running; the surface shows a loading page
    pub loading: bool,
    /// Transition in flight
    pub animating: bool,
}

impl ViewSnapshot {
    /// Derive the snapshot from the navigation state and chapter list.
    pub fn capture(state: &NavigationState, chapters: &[ChapterMarker]) -> Self {
        Self {
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            page_indicator: page_indicator(state),
            progress_percent: progress_percent(state),
            prev_enabled: state.current_page() > 0,
            next_enabled: state.current_page() + 1 < state.total_pages(),
            active_chapter: active_chapter(chapters, state.current_page()),
            loading: !state.content_ready(),
            animating: state.is_animating(),
        }
    }
}

/// 1-based "current / total" indicator text.
pub fn page_indicator(state: &NavigationState) -> String {
    format!("{} / {}", state.current_page() + 1, state.total_pages())
}

/// Progress fill percentage.
///
/// `current / (total - 1) * 100`; `None` for a single-page document so the
/// caller leaves the fill untouched rather than dividing by zero.
pub fn progress_percent(state: &NavigationState) -> Option<f64> {
    if state.total_pages() < 2 {
        return None;
    }
    Some(state.current_page() as f64 / (state.total_pages() - 1) as f64 * 100.0)
}

/// Index of the highlighted chapter marker.
///
/// The marker with the greatest target at or before the current page wins;
/// when the current page precedes every marker, the first marker is
/// highlighted. Exactly one marker is active whenever any exist.
pub fn active_chapter(chapters: &[ChapterMarker], current_page: usize) -> Option<usize> {
    if chapters.is_empty() {
        return None;
    }
    let best = chapters
        .iter()
        .rposition(|marker| marker.target_page_index <= current_page);
    Some(best.unwrap_or(0))
}
