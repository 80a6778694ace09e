//! Navigation State Machine
//!
//! [`Booklet`] is the single owner of all mutable viewer state: the current
//! page, the loaded flag, the animating flag, and the mounted page set.
//! Every mutation goes through the guarded operations here — there is no
//! other writer.
//!
//! # Guards
//!
//! Every navigation operation is a silent no-op when:
//! - content is not ready yet (initial load still running), or
//! - a transition is already in flight, or
//! - the target is out of range or equals the current page.
//!
//! A second request arriving mid-transition is dropped, not queued. The
//! system trades responsiveness for correctness: rapid inputs are lost, but
//! the final state is never ambiguous. At most one [`Transition`] exists at
//! any time, and exactly while `is_animating` is true.
//!
//! # Clock
//!
//! The transition clock is advanced by [`Booklet::tick`] from the surface's
//! frame loop. No timers or threads live in this crate.

use std::time::Duration;

use tracing::{debug, warn};

use crate::manifest::BookletManifest;
use crate::pages::{ChapterMarker, MountedPage, PageSpec, PresentationState};
use crate::transition::{Transition, TransitionPhase, TransitionTiming};
use crate::view::ViewSnapshot;

/// Navigation requests produced by a surface's input router.
///
/// The router does not interpret what an input means beyond mapping it to
/// one of these; the guarded operations decide whether anything happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavRequest {
    /// Advance one page
    Next,
    /// Go back one page
    Previous,
    /// Jump to an absolute page index
    GoTo(usize),
    /// Jump to the first page
    First,
    /// Jump to the last page
    Last,
}

/// The shared navigation state, read by view derivations.
#[derive(Clone, Copy, Debug)]
pub struct NavigationState {
    current_page: usize,
    total_pages: usize,
    is_animating: bool,
    content_ready: bool,
}

impl NavigationState {
    /// Current page index, in `[0, total_pages - 1]`.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total page count, fixed at load.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True while a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// True once the initial load has mounted every page.
    pub fn content_ready(&self) -> bool {
        self.content_ready
    }
}

/// The booklet: navigation state plus the mounted page set.
#[derive(Debug)]
pub struct Booklet {
    title: Option<String>,
    state: NavigationState,
    specs: Vec<PageSpec>,
    chapters: Vec<ChapterMarker>,
    pages: Vec<MountedPage>,
    timing: TransitionTiming,
    transition: Option<Transition>,
    swipe_threshold: u16,
}

impl Booklet {
    /// Create a booklet from a validated manifest.
    ///
    /// Starts at page 0 with content not yet ready; every navigation
    /// request is dropped until [`Booklet::mount`] is called.
    pub fn new(manifest: BookletManifest) -> Self {
        let total_pages = manifest.pages.len();
        Self {
            title: manifest.title,
            state: NavigationState {
                current_page: 0,
                total_pages,
                is_animating: false,
                content_ready: false,
            },
            specs: manifest.pages,
            chapters: manifest.chapters,
            pages: Vec::new(),
            timing: manifest.timing,
            transition: None,
            swipe_threshold: manifest.swipe_threshold,
        }
    }

    /// The page specs, in reading order (for the content loader).
    pub fn page_specs(&self) -> &[PageSpec] {
        &self.specs
    }

    /// The chapter markers, sorted ascending by target page.
    pub fn chapters(&self) -> &[ChapterMarker] {
        &self.chapters
    }

    /// The mounted pages (empty until [`Booklet::mount`]).
    pub fn pages(&self) -> &[MountedPage] {
        &self.pages
    }

    /// Document title from the manifest.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Read-only navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Transition timing in effect.
    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    /// Swipe threshold for the surface's drag gesture, in columns.
    pub fn swipe_threshold(&self) -> u16 {
        self.swipe_threshold
    }

    /// Attach the loaded page set and open the navigation gate.
    ///
    /// Called exactly once, after the loader has produced a page (real or
    /// placeholder) for every spec. A second call is ignored: the gate
    /// never reverts.
    pub fn mount(&mut self, pages: Vec<MountedPage>) {
        if self.state.content_ready {
            warn!("mount called twice; ignoring");
            return;
        }
        if pages.len() != self.specs.len() {
            warn!(
                mounted = pages.len(),
                expected = self.specs.len(),
                "mounted page count does not match the manifest"
            );
        }
        self.pages = pages;
        self.state.content_ready = true;
        debug!(pages = self.pages.len(), "content ready");
    }

    /// Dispatch a navigation request to the guarded operations.
    pub fn handle(&mut self, request: NavRequest) {
        match request {
            NavRequest::Next => self.next_page(),
            NavRequest::Previous => self.previous_page(),
            NavRequest::GoTo(n) => self.go_to_page(n),
            NavRequest::First => self.go_to_page(0),
            NavRequest::Last => self.go_to_page(self.state.total_pages.saturating_sub(1)),
        }
    }

    /// Go to an absolute page, starting a transition.
    ///
    /// Silently does nothing when the gate is closed, a transition is in
    /// flight, or `n` is out of range or already current.
    pub fn go_to_page(&mut self, n: usize) {
        if !self.state.content_ready {
            debug!(target = n, "navigation before content ready; dropped");
            return;
        }
        if self.state.is_animating {
            debug!(target = n, "navigation during transition; dropped");
            return;
        }
        if n >= self.state.total_pages || n == self.state.current_page {
            return;
        }

        let from = self.state.current_page;
        self.state.current_page = n;
        self.state.is_animating = true;
        self.begin_transition(from, n);
        debug!(from, to = n, "page transition started");
    }

    /// Advance one page, if not already on the last.
    pub fn next_page(&mut self) {
        if self.state.current_page + 1 < self.state.total_pages {
            self.go_to_page(self.state.current_page + 1);
        }
    }

    /// Go back one page, if not already on the first.
    pub fn previous_page(&mut self) {
        if self.state.current_page > 0 {
            self.go_to_page(self.state.current_page - 1);
        }
    }

    /// Advance the transition clock.
    ///
    /// Returns true when the visible state changed in a way that calls for
    /// a full UI refresh (incoming page marked active, or transition
    /// complete).
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        let phase = transition.advance(delta, &self.timing);
        let (from, to) = (transition.from(), transition.to());
        let mut refreshed = false;

        if phase >= TransitionPhase::ActiveMarked {
            if let Some(page) = self.pages.get_mut(to) {
                if page.presentation != PresentationState::Active {
                    page.presentation = PresentationState::Active;
                    refreshed = true;
                }
            }
        }

        if phase == TransitionPhase::Complete {
            self.transition = None;
            self.state.is_animating = false;
            refreshed = true;
            debug!(from, to, "page transition complete");
        }

        refreshed
    }

    /// Derive the render-ready view of the current state.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(&self.state, &self.chapters)
    }

    /// Mark the outgoing page and start the transition clock.
    ///
    /// All Active/Previous marks are cleared first; the outgoing page is
    /// marked Previous immediately so outgoing/incoming effects can
    /// overlap. The incoming page is marked Active later, from `tick`.
    fn begin_transition(&mut self, from: usize, to: usize) {
        for page in &mut self.pages {
            if page.presentation != PresentationState::Inactive {
                page.presentation = PresentationState::Inactive;
            }
        }
        if let Some(page) = self.pages.get_mut(from) {
            page.presentation = PresentationState::Previous;
        }
        self.transition = Some(Transition::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::BookletManifest;
    use crate::pages::MountedPage;
    use pretty_assertions::assert_eq;

    /// A booklet with `n` pages and one chapter per page, content mounted.
    fn ready_booklet(n: usize) -> Booklet {
        let mut booklet = unready_booklet(n);
        let pages = booklet
            .page_specs()
            .to_vec()
            .into_iter()
            .map(|spec| MountedPage::mounted(spec, "<p>body</p>".into()))
            .collect();
        booklet.mount(pages);
        booklet
    }

    fn unready_booklet(n: usize) -> Booklet {
        let mut text = String::new();
        for i in 0..n {
            text.push_str(&format!(
                "[[page]]\nsource = \"pages/{i:02}.html\"\ntitle = \"Page {i}\"\n\n"
            ));
        }
        for i in 0..n {
            text.push_str(&format!("[[chapter]]\npage = {i}\nlabel = \"Ch {i}\"\n\n"));
        }
        Booklet::new(BookletManifest::parse(&text).unwrap())
    }

    /// Run the clock past the total transition duration.
    fn finish_transition(booklet: &mut Booklet) {
        booklet.tick(booklet.timing().total());
    }

    #[test]
    fn navigation_before_content_ready_has_no_effect() {
        let mut booklet = unready_booklet(4);
        booklet.go_to_page(2);
        booklet.next_page();
        booklet.handle(NavRequest::Last);
        assert_eq!(booklet.state().current_page(), 0);
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn out_of_range_target_leaves_current_page_unchanged() {
        let mut booklet = ready_booklet(4);
        booklet.go_to_page(4);
        booklet.go_to_page(100);
        assert_eq!(booklet.state().current_page(), 0);
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn go_to_current_page_does_not_start_a_transition() {
        let mut booklet = ready_booklet(4);
        booklet.go_to_page(0);
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn double_next_advances_exactly_one_page() {
        let mut booklet = ready_booklet(8);
        booklet.next_page();
        booklet.next_page(); // dropped: transition in flight
        assert_eq!(booklet.state().current_page(), 1);

        finish_transition(&mut booklet);
        assert!(!booklet.state().is_animating());

        booklet.next_page();
        assert_eq!(booklet.state().current_page(), 2);
    }

    #[test]
    fn animating_flag_clears_after_the_total_duration() {
        let mut booklet = ready_booklet(3);
        booklet.next_page();
        assert!(booklet.state().is_animating());

        booklet.tick(Duration::from_millis(499));
        assert!(booklet.state().is_animating());

        booklet.tick(Duration::from_millis(1));
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn previous_page_stops_at_the_first_page() {
        let mut booklet = ready_booklet(3);
        booklet.previous_page();
        assert_eq!(booklet.state().current_page(), 0);
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn next_page_stops_at_the_last_page() {
        let mut booklet = ready_booklet(2);
        booklet.next_page();
        finish_transition(&mut booklet);
        assert_eq!(booklet.state().current_page(), 1);

        booklet.next_page();
        assert_eq!(booklet.state().current_page(), 1);
        assert!(!booklet.state().is_animating());
    }

    #[test]
    fn presentation_marks_follow_the_two_step_swap() {
        let mut booklet = ready_booklet(3);
        booklet.go_to_page(2);

        // Outgoing page marked immediately; incoming not yet active.
        assert_eq!(booklet.pages()[0].presentation, PresentationState::Previous);
        assert_eq!(booklet.pages()[2].presentation, PresentationState::Inactive);

        // Before the mark-active delay nothing changes.
        assert!(!booklet.tick(Duration::from_millis(49)));
        assert_eq!(booklet.pages()[2].presentation, PresentationState::Inactive);

        // Crossing the delay marks the incoming page active.
        assert!(booklet.tick(Duration::from_millis(1)));
        assert_eq!(booklet.pages()[2].presentation, PresentationState::Active);
        assert!(booklet.state().is_animating());

        // Completion clears the flag; the previous mark stays until the
        // next transition clears it.
        assert!(booklet.tick(Duration::from_millis(450)));
        assert!(!booklet.state().is_animating());
        assert_eq!(booklet.pages()[0].presentation, PresentationState::Previous);
    }

    #[test]
    fn jump_to_last_page_of_eight() {
        let mut booklet = ready_booklet(8);
        booklet.go_to_page(7);
        finish_transition(&mut booklet);

        assert_eq!(booklet.state().current_page(), 7);
        let view = booklet.snapshot();
        assert!(view.prev_enabled);
        assert!(!view.next_enabled);
        assert_eq!(view.progress_percent, Some(100.0));
    }

    #[test]
    fn one_to_one_chapters_highlight_the_current_page() {
        let mut booklet = ready_booklet(8);
        booklet.go_to_page(3);
        finish_transition(&mut booklet);
        assert_eq!(booklet.snapshot().active_chapter, Some(3));
    }

    #[test]
    fn mount_twice_is_ignored() {
        let mut booklet = ready_booklet(2);
        booklet.go_to_page(1);
        finish_transition(&mut booklet);

        booklet.mount(Vec::new());
        assert!(booklet.state().content_ready());
        assert_eq!(booklet.pages().len(), 2);
        assert_eq!(booklet.state().current_page(), 1);
    }

    #[test]
    fn home_and_end_requests_jump_to_the_ends() {
        let mut booklet = ready_booklet(5);
        booklet.handle(NavRequest::Last);
        finish_transition(&mut booklet);
        assert_eq!(booklet.state().current_page(), 4);

        booklet.handle(NavRequest::First);
        finish_transition(&mut booklet);
        assert_eq!(booklet.state().current_page(), 0);
    }
}
