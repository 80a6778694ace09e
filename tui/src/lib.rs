//! Booklet TUI - Terminal surface for the booklet viewer
//!
//! This crate renders a booklet (an ordered set of HTML page fragments)
//! as flippable terminal pages with navigation controls.
//!
//! # Architecture
//!
//! - **App**: frame loop wiring terminal events to the core state machine
//! - **Input**: maps keys, clicks, and horizontal drags to navigation
//!   requests; a drag past the swipe threshold turns the page
//! - **Render**: page body plus derived chrome (indicator, progress bar,
//!   chapter tabs, prev/next controls), every region independently guarded
//! - **Markup**: flattens HTML fragments to styled terminal text
//! - **Fullscreen**: xterm window-ops port behind the core capability trait

pub mod app;
pub mod fullscreen;
pub mod input;
pub mod markup;
pub mod render;
pub mod theme;

pub use app::App;
