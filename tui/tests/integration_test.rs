//! Integration Tests for the Booklet Viewer
//!
//! These tests drive the public core API end-to-end the way the TUI does:
//! parse a manifest, load fragments through a mock source, mount, then
//! navigate with the input router and a hand-cranked transition clock.
//!
//! # Test Coverage
//!
//! 1. **Load Flow**: manifest → loader → mount, including a failing
//!    fragment mounting as a placeholder
//! 2. **Navigation Flow**: router actions drive the guarded operations;
//!    rapid inputs mid-transition are dropped
//! 3. **Derived UI**: indicator, progress, button enablement, and chapter
//!    highlight stay consistent with the state machine

use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use pretty_assertions::assert_eq;

use booklet_core::{
    load_all, Booklet, BookletManifest, FragmentError, FragmentSource, NavRequest,
};
use booklet_tui::input::{Action, InputRouter};

const MANIFEST: &str = r#"
    title = "Digital Creativity"

    [[page]]
    source = "pages/01-cover.html"
    title = "Cover"
    class = "cover-page"

    [[page]]
    source = "pages/02-introduction.html"
    title = "Introduction"

    [[page]]
    source = "pages/03-problem.html"
    title = "Problem Statement"

    [[page]]
    source = "pages/04-technology.html"
    title = "Technology"

    [[page]]
    source = "pages/05-trends.html"
    title = "Future Trends"

    [[page]]
    source = "pages/06-management.html"
    title = "Project Management"

    [[page]]
    source = "pages/07-processes.html"
    title = "Processes"

    [[page]]
    source = "pages/08-conclusion.html"
    title = "Conclusion"

    [[chapter]]
    page = 0
    label = "Cover"

    [[chapter]]
    page = 2
    label = "Problem"

    [[chapter]]
    page = 5
    label = "Management"
"#;

/// Mock source: fails for locators listed in `broken`, otherwise returns a
/// small fragment naming the locator.
struct MockSource {
    broken: Vec<&'static str>,
}

#[async_trait]
impl FragmentSource for MockSource {
    async fn fetch(&self, locator: &str) -> Result<String, FragmentError> {
        if self.broken.contains(&locator) {
            Err(FragmentError::UnsupportedLocator(locator.to_string()))
        } else {
            Ok(format!("<h2>{locator}</h2><p>body text</p>"))
        }
    }
}

async fn loaded_booklet(broken: Vec<&'static str>) -> Booklet {
    let manifest = BookletManifest::parse(MANIFEST).unwrap();
    let mut booklet = Booklet::new(manifest);
    let pages = load_all(booklet.page_specs(), &MockSource { broken }).await;
    booklet.mount(pages);
    booklet
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Route a key through the router into the booklet, then run the
/// transition to completion.
fn key_nav(router: &mut InputRouter, booklet: &mut Booklet, code: KeyCode) {
    if let Some(Action::Nav(request)) = router.route_key(press(code)) {
        booklet.handle(request);
    }
    booklet.tick(booklet.timing().total());
}

#[tokio::test]
async fn full_load_and_navigation_flow() {
    let mut booklet = loaded_booklet(Vec::new()).await;
    assert!(booklet.state().content_ready());
    assert_eq!(booklet.pages().len(), 8);

    let mut router = InputRouter::new(booklet.swipe_threshold());

    key_nav(&mut router, &mut booklet, KeyCode::Right);
    key_nav(&mut router, &mut booklet, KeyCode::PageDown);
    assert_eq!(booklet.state().current_page(), 2);

    key_nav(&mut router, &mut booklet, KeyCode::Left);
    assert_eq!(booklet.state().current_page(), 1);

    key_nav(&mut router, &mut booklet, KeyCode::End);
    let view = booklet.snapshot();
    assert_eq!(view.current_page, 7);
    assert_eq!(view.page_indicator, "8 / 8");
    assert_eq!(view.progress_percent, Some(100.0));
    assert!(view.prev_enabled);
    assert!(!view.next_enabled);

    key_nav(&mut router, &mut booklet, KeyCode::Home);
    assert_eq!(booklet.state().current_page(), 0);
}

#[tokio::test]
async fn rapid_inputs_mid_transition_advance_exactly_once() {
    let mut booklet = loaded_booklet(Vec::new()).await;

    booklet.handle(NavRequest::Next);
    booklet.handle(NavRequest::Next);
    booklet.handle(NavRequest::GoTo(5));
    assert_eq!(booklet.state().current_page(), 1);

    // Partway through, still dropped.
    booklet.tick(Duration::from_millis(200));
    booklet.handle(NavRequest::Next);
    assert_eq!(booklet.state().current_page(), 1);

    booklet.tick(Duration::from_millis(300));
    assert!(!booklet.state().is_animating());

    booklet.handle(NavRequest::Next);
    assert_eq!(booklet.state().current_page(), 2);
}

#[tokio::test]
async fn broken_fragment_mounts_as_placeholder_and_gates_open() {
    let mut booklet = loaded_booklet(vec!["pages/03-problem.html"]).await;

    assert!(booklet.state().content_ready());
    assert_eq!(booklet.pages().len(), 8);

    let broken = &booklet.pages()[2];
    assert!(broken.placeholder);
    assert!(broken.content.contains("pages/03-problem.html"));

    for (i, page) in booklet.pages().iter().enumerate() {
        if i != 2 {
            assert!(!page.placeholder, "page {i} should have loaded");
        }
    }

    // The placeholder page is still navigable.
    booklet.handle(NavRequest::GoTo(2));
    booklet.tick(booklet.timing().total());
    assert_eq!(booklet.state().current_page(), 2);
}

#[tokio::test]
async fn chapter_highlight_follows_navigation() {
    let mut booklet = loaded_booklet(Vec::new()).await;

    // Chapters at pages 0, 2, 5.
    assert_eq!(booklet.snapshot().active_chapter, Some(0));

    booklet.handle(NavRequest::GoTo(4));
    booklet.tick(booklet.timing().total());
    assert_eq!(booklet.snapshot().active_chapter, Some(1));

    booklet.handle(NavRequest::GoTo(5));
    booklet.tick(booklet.timing().total());
    assert_eq!(booklet.snapshot().active_chapter, Some(2));
}

#[tokio::test]
async fn navigation_is_rejected_until_mount() {
    let manifest = BookletManifest::parse(MANIFEST).unwrap();
    let mut booklet = Booklet::new(manifest);

    booklet.handle(NavRequest::Next);
    booklet.handle(NavRequest::GoTo(7));
    assert_eq!(booklet.state().current_page(), 0);
    assert!(booklet.snapshot().loading);

    let pages = load_all(booklet.page_specs(), &MockSource { broken: Vec::new() }).await;
    booklet.mount(pages);
    assert!(!booklet.snapshot().loading);

    booklet.handle(NavRequest::GoTo(7));
    booklet.tick(booklet.timing().total());
    assert_eq!(booklet.state().current_page(), 7);
}
