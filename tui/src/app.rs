//! Main Application
//!
//! The App owns the booklet state machine and wires it to the terminal:
//!
//! 1. terminal events are routed to [`InputRouter`] and become guarded
//!    navigation requests
//! 2. a frame tick advances the transition clock via `Booklet::tick`
//! 3. every frame renders from a fresh [`ViewSnapshot`]
//!
//! The initial page load runs as a background task so the UI stays
//! responsive while fragments are fetched; the core drops every
//! navigation request until the load completes and the pages mount.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::task::JoinHandle;
use tracing::warn;

use booklet_core::{
    load_all, Booklet, BookletManifest, FullscreenController, FullscreenPort, LocatorSource,
    MountedPage,
};

use crate::input::{Action, HitRegions, InputRouter};
use crate::render;

/// Frame budget (~30 FPS is plenty for page turns).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Idle poll interval for the frame tick arm of the select.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Main application state.
pub struct App {
    /// The core state machine; single owner of navigation state
    booklet: Booklet,
    /// Fullscreen toggle over the probed platform port
    fullscreen: FullscreenController,
    /// Key/mouse to navigation-request translation
    input: InputRouter,
    /// Clickable regions from the last rendered frame
    regions: HitRegions,
    /// Background fragment load; `None` once mounted
    load_task: Option<JoinHandle<Vec<MountedPage>>>,
    /// Is the app still running?
    running: bool,
    /// Last frame time (for the transition clock)
    last_frame: Instant,
}

impl App {
    /// Create the app and start loading fragments in the background.
    ///
    /// Relative locators resolve under `fragment_root` (the manifest's
    /// directory); `http(s)://` locators are fetched over the network.
    pub fn new(
        manifest: BookletManifest,
        fragment_root: PathBuf,
        port: Box<dyn FullscreenPort>,
    ) -> Self {
        let booklet = Booklet::new(manifest);
        let input = InputRouter::new(booklet.swipe_threshold());

        let specs = booklet.page_specs().to_vec();
        let load_task = tokio::spawn(async move {
            let source = LocatorSource::new(fragment_root);
            load_all(&specs, &source).await
        });

        Self {
            booklet,
            fullscreen: FullscreenController::new(port),
            input,
            regions: HitRegions::default(),
            load_task: Some(load_task),
            running: true,
            last_frame: Instant::now(),
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();

        // First frame immediately so the loading screen shows.
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key)
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            // Layout is recomputed every frame; a resize
                            // just falls through to the next render.
                            _ => {}
                        }
                    }
                }

                _ = tokio::time::sleep(TICK_INTERVAL) => {}
            }

            self.poll_load().await;
            self.advance_clock();
            self.render(terminal)?;

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DURATION {
                tokio::time::sleep(FRAME_DURATION - elapsed).await;
            }
        }

        Ok(())
    }

    /// Mount pages once the background load finishes.
    ///
    /// A panicked load task still opens the gate, with every page a
    /// placeholder, rather than leaving the viewer locked forever.
    async fn poll_load(&mut self) {
        if !self.load_task.as_ref().is_some_and(|t| t.is_finished()) {
            return;
        }
        let Some(task) = self.load_task.take() else {
            return;
        };
        match task.await {
            Ok(pages) => self.booklet.mount(pages),
            Err(err) => {
                warn!(error = %err, "load task failed; mounting placeholders");
                let pages = self
                    .booklet
                    .page_specs()
                    .to_vec()
                    .into_iter()
                    .map(|spec| MountedPage::unavailable(spec, "loader failed"))
                    .collect();
                self.booklet.mount(pages);
            }
        }
    }

    /// Advance the transition clock by the time since the last frame.
    fn advance_clock(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.booklet.tick(delta);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.input.route_key(key) {
            self.apply(action);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(action) = self.input.route_mouse(mouse, &self.regions) {
            self.apply(action);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Nav(request) => self.booklet.handle(request),
            Action::ToggleFullscreen => self.fullscreen.toggle(),
            Action::Quit => self.running = false,
        }
    }

    /// Render the UI and remember the frame's clickable regions.
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let view = self.booklet.snapshot();
        let mut regions = HitRegions::default();

        terminal.draw(|frame| {
            regions = render::draw(
                frame,
                &self.booklet,
                &view,
                self.fullscreen.is_available(),
                self.fullscreen.is_fullscreen(),
                self.input.jump_entry(),
            );
        })?;

        self.regions = regions;
        Ok(())
    }
}
