//! Booklet Core - Headless Paginated Document Viewer
//!
//! This crate provides the core logic for booklet, completely independent
//! of any UI framework. It can drive a TUI, web UI, native GUI, or run
//! headless for testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       UI Surfaces                            │
//! │   ┌─────────┐   ┌─────────┐   ┌──────────────────────────┐  │
//! │   │   TUI   │   │  WebUI  │   │   Headless (tests)       │  │
//! │   │         │   │         │   │                          │  │
//! │   └────┬────┘   └────┬────┘   └───────────┬──────────────┘  │
//! │        │             │                    │                  │
//! │        └─────────────┴────────────────────┘                  │
//! │                      │                                       │
//! │                NavRequest (up)                               │
//! │                ViewSnapshot (down)                           │
//! └──────────────────────┼───────────────────────────────────────┘
//!                        │
//! ┌──────────────────────┼───────────────────────────────────────┐
//! │                  BOOKLET CORE                                │
//! │  ┌───────────────────┴────────────────────────────────────┐  │
//! │  │                     Booklet                             │  │
//! │  │  ┌──────────┐ ┌────────────┐ ┌─────────┐ ┌──────────┐  │  │
//! │  │  │Navigation│ │ Transition │ │ Content │ │   View   │  │  │
//! │  │  │  State   │ │  Animator  │ │ Loader  │ │ Snapshot │  │  │
//! │  │  └──────────┘ └────────────┘ └─────────┘ └──────────┘  │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Booklet`]: the single owner of navigation state; all mutation goes
//!   through its guarded operations
//! - [`NavRequest`]: navigation requests sent by a surface's input router
//! - [`ViewSnapshot`]: derived, render-ready view of the current state
//! - [`PageSpec`] / [`MountedPage`]: static page configuration and its
//!   loaded runtime counterpart
//! - [`FragmentSource`]: async seam for retrieving page fragments
//! - [`FullscreenPort`]: platform fullscreen capability seam
//!
//! # Quick Start
//!
//! ```ignore
//! use booklet_core::{Booklet, BookletManifest, LocatorSource, NavRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let manifest = BookletManifest::from_path("booklet.toml").unwrap();
//!     let mut booklet = Booklet::new(manifest);
//!
//!     // Load every page fragment; failures mount as placeholders.
//!     let source = LocatorSource::new(".");
//!     let pages = booklet_core::load_all(booklet.page_specs(), &source).await;
//!     booklet.mount(pages);
//!
//!     // Navigate and drive the transition clock from a frame loop.
//!     booklet.handle(NavRequest::Next);
//!     booklet.tick(Duration::from_millis(16));
//!     let view = booklet.snapshot();
//! }
//! ```

pub mod error;
pub mod fullscreen;
pub mod loader;
pub mod manifest;
pub mod navigation;
pub mod pages;
pub mod transition;
pub mod view;

pub use error::{FragmentError, ManifestError};
pub use fullscreen::{FullscreenController, FullscreenPort, NoopFullscreen};
pub use loader::{load_all, FileFragmentSource, FragmentSource, HttpFragmentSource, LocatorSource};
pub use manifest::BookletManifest;
pub use navigation::{Booklet, NavRequest, NavigationState};
pub use pages::{ChapterMarker, MountedPage, PageSpec, PresentationState};
pub use transition::{Transition, TransitionPhase, TransitionTiming};
pub use view::ViewSnapshot;
