//! Theme and Colors
//!
//! Muted paper-and-ink palette for reading in a terminal.

use ratatui::style::Color;

// ============================================================================
// Page
// ============================================================================

/// Body text
pub const PAGE_TEXT: Color = Color::Rgb(220, 215, 205);

/// Page and chapter titles
pub const TITLE: Color = Color::Rgb(255, 200, 120);

/// Cover page accent
pub const COVER: Color = Color::Rgb(150, 190, 255);

/// Placeholder (failed fragment) text
pub const PLACEHOLDER: Color = Color::Rgb(255, 110, 110);

// ============================================================================
// Chrome
// ============================================================================

/// Enabled prev/next controls
pub const CONTROL: Color = Color::Rgb(130, 220, 130);

/// Disabled controls and dim chrome
pub const CONTROL_DISABLED: Color = Color::Rgb(100, 100, 100);

/// Active chapter tab
pub const CHAPTER_ACTIVE: Color = Color::Rgb(255, 200, 120);

/// Inactive chapter tabs
pub const CHAPTER_INACTIVE: Color = Color::Rgb(140, 140, 140);

/// Progress bar fill
pub const PROGRESS_FILL: Color = Color::Rgb(150, 190, 255);

/// Progress bar track
pub const PROGRESS_TRACK: Color = Color::Rgb(70, 70, 70);

/// Status / loading text
pub const STATUS: Color = Color::Rgb(160, 160, 160);
