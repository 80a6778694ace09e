//! Frame Rendering
//!
//! Draws one full frame from the core's [`ViewSnapshot`] plus the mounted
//! page set, and reports the clickable regions back to the input router.
//!
//! Chrome layout:
//!
//! ```text
//! ┌ title ──────────────────────────── [full] ┐  header
//! │  Cover │ Intro │ Problem │ ...            │  chapter tabs
//! │                                           │
//! │  page body                                │
//! │                                           │
//! │  ◀ Prev          3 / 8           Next ▶   │  footer
//! │  ██████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░   │  progress
//! └───────────────────────────────────────────┘
//! ```
//!
//! Every sub-render guards on its region's size and degrades alone: a
//! terminal too narrow for chapter tabs still turns pages, a one-row
//! terminal still shows the body. Nothing here panics on a tiny window.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use booklet_core::{Booklet, MountedPage, PresentationState, ViewSnapshot};

use crate::input::HitRegions;
use crate::markup;
use crate::theme;

/// Narrower than this and only the page body is drawn.
const MIN_CHROME_WIDTH: u16 = 24;

/// Shorter than this and only the page body is drawn.
const MIN_CHROME_HEIGHT: u16 = 7;

/// Draw a full frame; returns the clickable regions for the input router.
pub fn draw(
    frame: &mut Frame,
    booklet: &Booklet,
    view: &ViewSnapshot,
    fullscreen_available: bool,
    fullscreen_on: bool,
    jump_entry: Option<&str>,
) -> HitRegions {
    let area = frame.area();
    let mut regions = HitRegions::default();

    if view.loading {
        render_loading(frame, area);
        return regions;
    }

    if area.width < MIN_CHROME_WIDTH || area.height < MIN_CHROME_HEIGHT {
        render_body(frame, area, booklet, view);
        return regions;
    }

    let [header, chapters, body, footer, progress] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    regions.fullscreen = render_header(frame, header, booklet, fullscreen_available, fullscreen_on);
    regions.chapters = render_chapters(frame, chapters, booklet, view);
    render_body(frame, body, booklet, view);
    let (prev, next) = render_footer(frame, footer, view, jump_entry);
    regions.prev = prev;
    regions.next = next;
    render_progress(frame, progress, view);

    regions
}

fn render_loading(frame: &mut Frame, area: Rect) {
    if area.width < 12 || area.height < 1 {
        return;
    }
    let y = area.y + area.height / 2;
    let text = "loading pages...";
    let x = area.x + area.width.saturating_sub(text.width() as u16) / 2;
    frame
        .buffer_mut()
        .set_string(x, y, text, Style::default().fg(theme::STATUS));
}

/// Title on the left, fullscreen toggle affordance on the right.
fn render_header(
    frame: &mut Frame,
    area: Rect,
    booklet: &Booklet,
    fullscreen_available: bool,
    fullscreen_on: bool,
) -> Option<Rect> {
    if area.width < 10 || area.height < 1 {
        return None;
    }
    let buf = frame.buffer_mut();

    let title = booklet.title().unwrap_or("booklet");
    let max_title = area.width.saturating_sub(12) as usize;
    let shown: String = title.chars().take(max_title).collect();
    buf.set_string(
        area.x + 1,
        area.y,
        &shown,
        Style::default()
            .fg(theme::TITLE)
            .add_modifier(Modifier::BOLD),
    );

    // The toggle control only exists when the capability does; its label
    // mirrors the platform state on every frame.
    if !fullscreen_available {
        return None;
    }
    let label = if fullscreen_on { "[windowed]" } else { "[full]" };
    let width = label.width() as u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    buf.set_string(x, area.y, label, Style::default().fg(theme::CONTROL));
    Some(Rect::new(x, area.y, width, 1))
}

/// One tab per chapter marker; exactly one is highlighted.
fn render_chapters(
    frame: &mut Frame,
    area: Rect,
    booklet: &Booklet,
    view: &ViewSnapshot,
) -> Vec<(Rect, usize)> {
    if area.width < 8 || area.height < 1 || booklet.chapters().is_empty() {
        return Vec::new();
    }
    let buf = frame.buffer_mut();

    let mut tabs = Vec::new();
    let mut x = area.x + 1;
    for (i, marker) in booklet.chapters().iter().enumerate() {
        let width = marker.label.width() as u16;
        if x + width >= area.x + area.width {
            break;
        }
        let style = if view.active_chapter == Some(i) {
            Style::default()
                .fg(theme::CHAPTER_ACTIVE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme::CHAPTER_INACTIVE)
        };
        buf.set_string(x, area.y, &marker.label, style);
        tabs.push((Rect::new(x, area.y, width, 1), marker.target_page_index));
        x += width;

        if x + 3 < area.x + area.width && i + 1 < booklet.chapters().len() {
            buf.set_string(
                x + 1,
                area.y,
                "│",
                Style::default().fg(theme::CONTROL_DISABLED),
            );
        }
        x += 3;
    }
    tabs
}

/// The page body: the active page, or the outgoing page dimmed while the
/// incoming one has not been marked yet.
fn render_body(frame: &mut Frame, area: Rect, booklet: &Booklet, view: &ViewSnapshot) {
    if area.width < 4 || area.height < 1 {
        return;
    }

    let Some(page) = visible_page(booklet, view) else {
        return;
    };

    let dimmed = view.animating && page.presentation == PresentationState::Previous;
    let mut style = Style::default().fg(if page.placeholder {
        theme::PLACEHOLDER
    } else {
        theme::PAGE_TEXT
    });
    if dimmed {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = markup::flatten(&page.content);
    let mut paragraph = Paragraph::new(Text::from(text))
        .style(style)
        .wrap(Wrap { trim: false });

    if page.spec.style_class.as_deref() == Some("cover-page") {
        paragraph = paragraph
            .alignment(Alignment::Center)
            .style(style.fg(theme::COVER).add_modifier(Modifier::BOLD));
    }

    let inner = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    };
    frame.render_widget(paragraph, inner);
}

fn visible_page<'a>(booklet: &'a Booklet, view: &ViewSnapshot) -> Option<&'a MountedPage> {
    booklet
        .pages()
        .iter()
        .find(|p| p.presentation == PresentationState::Active)
        .or_else(|| {
            booklet
                .pages()
                .iter()
                .find(|p| p.presentation == PresentationState::Previous)
        })
        .or_else(|| booklet.pages().get(view.current_page))
}

/// Prev/next controls and the page indicator; the jump entry replaces the
/// indicator while open.
fn render_footer(
    frame: &mut Frame,
    area: Rect,
    view: &ViewSnapshot,
    jump_entry: Option<&str>,
) -> (Option<Rect>, Option<Rect>) {
    if area.width < 24 || area.height < 1 {
        return (None, None);
    }
    let buf = frame.buffer_mut();

    let enabled = Style::default().fg(theme::CONTROL);
    let disabled = Style::default().fg(theme::CONTROL_DISABLED);

    let prev_label = "◀ Prev";
    let prev_x = area.x + 1;
    buf.set_string(
        prev_x,
        area.y,
        prev_label,
        if view.prev_enabled { enabled } else { disabled },
    );
    let prev_rect = Rect::new(prev_x, area.y, prev_label.width() as u16, 1);

    let next_label = "Next ▶";
    let next_w = next_label.width() as u16;
    let next_x = area.x + area.width.saturating_sub(next_w + 1);
    buf.set_string(
        next_x,
        area.y,
        next_label,
        if view.next_enabled { enabled } else { disabled },
    );
    let next_rect = Rect::new(next_x, area.y, next_w, 1);

    let center = match jump_entry {
        Some(entry) => format!("go to page: {entry}_"),
        None => view.page_indicator.clone(),
    };
    let center_x = area.x + area.width.saturating_sub(center.width() as u16) / 2;
    buf.set_string(center_x, area.y, &center, Style::default().fg(theme::STATUS));

    (Some(prev_rect), Some(next_rect))
}

/// Progress fill; a single-page document leaves the row untouched.
fn render_progress(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    if area.width < 4 || area.height < 1 {
        return;
    }
    let Some(percent) = view.progress_percent else {
        return;
    };
    let buf = frame.buffer_mut();

    let track = area.width.saturating_sub(2);
    let filled = ((percent / 100.0) * f64::from(track)).round() as u16;
    let filled = filled.min(track);

    let fill = "█".repeat(filled as usize);
    let rest = "░".repeat((track - filled) as usize);
    buf.set_string(area.x + 1, area.y, &fill, Style::default().fg(theme::PROGRESS_FILL));
    buf.set_string(
        area.x + 1 + filled,
        area.y,
        &rest,
        Style::default().fg(theme::PROGRESS_TRACK),
    );
}
