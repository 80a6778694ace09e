//! Terminal Fullscreen Port
//!
//! Implements the core fullscreen capability on top of xterm's window
//! manipulation escapes (XTWINOPS): `CSI 10;1 t` enters fullscreen,
//! `CSI 10;0 t` leaves it. Probing happens once at startup; terminals that
//! do not advertise xterm compatibility get the no-op port, so the toggle
//! degrades silently instead of spraying escapes at a terminal that would
//! print them.

use std::io::{self, Write};

use tracing::{debug, warn};

use booklet_core::{FullscreenPort, NoopFullscreen};

/// Enter fullscreen (XTWINOPS).
const ENTER: &[u8] = b"\x1b[10;1t";

/// Leave fullscreen (XTWINOPS).
const EXIT: &[u8] = b"\x1b[10;0t";

/// Fullscreen via xterm window-manipulation escapes.
///
/// xterm offers no change notifications over this channel, so the port
/// mirrors the last state it commanded; the controller still queries the
/// port on every toggle rather than keeping its own copy.
pub struct XtermWinOps {
    engaged: bool,
}

impl XtermWinOps {
    /// Probe the terminal environment for XTWINOPS support.
    pub fn probe() -> Option<Self> {
        let term = std::env::var("TERM").unwrap_or_default();
        let supported = term.contains("xterm")
            || term.contains("alacritty")
            || term.contains("kitty")
            || std::env::var("WT_SESSION").is_ok();
        if supported {
            debug!(%term, "fullscreen: using xterm window ops");
            Some(Self { engaged: false })
        } else {
            debug!(%term, "fullscreen: no supported terminal detected");
            None
        }
    }

    fn send(&self, sequence: &[u8]) {
        let mut stdout = io::stdout();
        if stdout
            .write_all(sequence)
            .and_then(|()| stdout.flush())
            .is_err()
        {
            warn!("fullscreen escape could not be written");
        }
    }
}

impl FullscreenPort for XtermWinOps {
    fn is_available(&self) -> bool {
        true
    }

    fn is_fullscreen(&self) -> bool {
        self.engaged
    }

    fn request(&mut self) {
        self.send(ENTER);
        self.engaged = true;
    }

    fn exit(&mut self) {
        self.send(EXIT);
        self.engaged = false;
    }
}

/// Select the first available fullscreen variant, falling back to no-op.
pub fn probe_port() -> Box<dyn FullscreenPort> {
    match XtermWinOps::probe() {
        Some(port) => Box::new(port),
        None => Box::new(NoopFullscreen),
    }
}
