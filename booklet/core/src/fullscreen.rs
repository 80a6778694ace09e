//! Fullscreen Capability
//!
//! The booklet never tracks its own fullscreen flag. [`FullscreenPort`] is
//! the platform seam — whichever variant the host offers is probed once at
//! startup by the surface and handed in — and the controller queries the
//! port's actual state on every decision. That keeps the toggle correct
//! when fullscreen is exited by a platform-level gesture outside this
//! system's control.
//!
//! A platform with no usable capability degrades to [`NoopFullscreen`]:
//! toggling does nothing and never errors.

use tracing::debug;

/// Platform fullscreen capability.
///
/// One implementation per platform variant; the surface probes and selects
/// the first available one at startup. The rest of the system depends only
/// on this trait.
pub trait FullscreenPort: Send {
    /// Whether the capability exists on this platform.
    fn is_available(&self) -> bool;

    /// The platform's actual fullscreen state right now.
    fn is_fullscreen(&self) -> bool;

    /// Ask the platform to enter fullscreen.
    fn request(&mut self);

    /// Ask the platform to leave fullscreen.
    fn exit(&mut self);
}

/// Fallback for platforms without a fullscreen capability.
#[derive(Debug, Default)]
pub struct NoopFullscreen;

impl FullscreenPort for NoopFullscreen {
    fn is_available(&self) -> bool {
        false
    }

    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request(&mut self) {}

    fn exit(&mut self) {}
}

/// Toggles the platform capability and reports its state for the UI
/// affordance.
pub struct FullscreenController {
    port: Box<dyn FullscreenPort>,
}

impl FullscreenController {
    /// Wrap the probed platform port.
    pub fn new(port: Box<dyn FullscreenPort>) -> Self {
        if !port.is_available() {
            debug!("fullscreen capability unavailable; toggle will no-op");
        }
        Self { port }
    }

    /// Toggle fullscreen based on the platform's current state.
    ///
    /// No-ops when the capability is unavailable.
    pub fn toggle(&mut self) {
        if !self.port.is_available() {
            return;
        }
        if self.port.is_fullscreen() {
            self.port.exit();
        } else {
            self.port.request();
        }
    }

    /// Current platform state, for the toggle control's icon/label.
    pub fn is_fullscreen(&self) -> bool {
        self.port.is_fullscreen()
    }

    /// Whether toggling can have any effect.
    pub fn is_available(&self) -> bool {
        self.port.is_available()
    }
}
