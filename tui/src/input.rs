//! Input Router
//!
//! Maps terminal input to navigation requests. The router never decides
//! whether a request is valid — it only translates; the core's guarded
//! operations drop anything inapplicable.
//!
//! # Mappings
//!
//! - Right / Down / PageDown / Space → next page
//! - Left / Up / PageUp → previous page
//! - Home → first page, End → last page
//! - `g` opens the jump-to-page entry; while it is open every key feeds
//!   the entry and none reach navigation (the text-entry rule)
//! - `f` toggles fullscreen, `q` / Esc quits
//! - click on the prev/next controls, a chapter tab, or the fullscreen
//!   toggle acts on that control
//! - a horizontal drag whose column delta reaches the swipe threshold is a
//!   swipe: leftward → next page, rightward → previous; shorter drags are
//!   clicks or noise, never page turns

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use booklet_core::NavRequest;

/// What the surface should do in response to an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Forward to the core's guarded navigation operations
    Nav(NavRequest),
    /// Toggle the fullscreen capability
    ToggleFullscreen,
    /// Leave the viewer
    Quit,
}

/// Clickable regions computed by the renderer on each frame.
#[derive(Clone, Debug, Default)]
pub struct HitRegions {
    /// Previous-page control
    pub prev: Option<Rect>,
    /// Next-page control
    pub next: Option<Rect>,
    /// Fullscreen toggle control
    pub fullscreen: Option<Rect>,
    /// Chapter tabs paired with their target page index
    pub chapters: Vec<(Rect, usize)>,
}

impl HitRegions {
    fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        if self.prev.is_some_and(|r| contains(r, column, row)) {
            return Some(Action::Nav(NavRequest::Previous));
        }
        if self.next.is_some_and(|r| contains(r, column, row)) {
            return Some(Action::Nav(NavRequest::Next));
        }
        if self.fullscreen.is_some_and(|r| contains(r, column, row)) {
            return Some(Action::ToggleFullscreen);
        }
        for (rect, page) in &self.chapters {
            if contains(*rect, column, row) {
                return Some(Action::Nav(NavRequest::GoTo(*page)));
            }
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Translates key and mouse events into [`Action`]s.
pub struct InputRouter {
    swipe_threshold: u16,
    drag_start: Option<(u16, u16)>,
    jump_entry: Option<String>,
}

impl InputRouter {
    /// Create a router with the manifest's swipe threshold (in columns).
    pub fn new(swipe_threshold: u16) -> Self {
        Self {
            swipe_threshold: swipe_threshold.max(1),
            drag_start: None,
            jump_entry: None,
        }
    }

    /// The jump-to-page entry buffer, when open (for rendering).
    pub fn jump_entry(&self) -> Option<&str> {
        self.jump_entry.as_deref()
    }

    /// Route a key press.
    pub fn route_key(&mut self, key: KeyEvent) -> Option<Action> {
        // While the jump entry is open it owns the keyboard: navigation
        // keys must not turn pages out from under text entry.
        if self.jump_entry.is_some() {
            return self.route_jump_key(key);
        }

        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ') => {
                Some(Action::Nav(NavRequest::Next))
            }
            KeyCode::Left | KeyCode::Up | KeyCode::PageUp => {
                Some(Action::Nav(NavRequest::Previous))
            }
            KeyCode::Home => Some(Action::Nav(NavRequest::First)),
            KeyCode::End => Some(Action::Nav(NavRequest::Last)),
            KeyCode::Char('f') => Some(Action::ToggleFullscreen),
            KeyCode::Char('g') => {
                self.jump_entry = Some(String::new());
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            _ => None,
        }
    }

    fn route_jump_key(&mut self, key: KeyEvent) -> Option<Action> {
        let entry = self.jump_entry.as_mut()?;
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                entry.push(c);
                None
            }
            KeyCode::Backspace => {
                entry.pop();
                None
            }
            KeyCode::Enter => {
                let target = entry.parse::<usize>().ok();
                self.jump_entry = None;
                // Entry is 1-based like the page indicator.
                target
                    .and_then(|n| n.checked_sub(1))
                    .map(|n| Action::Nav(NavRequest::GoTo(n)))
            }
            KeyCode::Esc => {
                self.jump_entry = None;
                None
            }
            _ => None,
        }
    }

    /// Route a mouse event against the current frame's hit regions.
    ///
    /// Press records the drag origin; release decides between a swipe
    /// (column delta at or past the threshold) and a click.
    pub fn route_mouse(&mut self, mouse: MouseEvent, regions: &HitRegions) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.drag_start.take();
                if let Some((start_col, _)) = start {
                    let delta = i32::from(mouse.column) - i32::from(start_col);
                    if delta.unsigned_abs() >= u32::from(self.swipe_threshold) {
                        debug!(delta, "swipe");
                        return if delta < 0 {
                            Some(Action::Nav(NavRequest::Next))
                        } else {
                            Some(Action::Nav(NavRequest::Previous))
                        };
                    }
                }
                regions.action_at(mouse.column, mouse.row)
            }
            _ => None,
        }
    }
}
