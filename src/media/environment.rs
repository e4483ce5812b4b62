//! Viewport environment and the initial-measurement probe.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The media type a viewport reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Matches any viewport.
    All,
    /// An interactive screen, the type every real viewport reports here.
    Screen,
    /// Paged output.
    Print,
}

/// A snapshot of the viewport: the screen-type tag plus the current width in
/// pixels. Breakpoint descriptors are matched against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    pub media_type: MediaType,
    pub width: u32,
}

impl Environment {
    /// A screen environment at the given width.
    pub fn screen(width: u32) -> Self {
        Self {
            media_type: MediaType::Screen,
            width,
        }
    }
}

/// Width assumed before the host supplies a real measurement.
pub const DEFAULT_WIDTH: u32 = 1200;

type ViewportProbe = fn() -> Environment;

static VIEWPORT_PROBE: Lazy<Mutex<ViewportProbe>> = Lazy::new(|| Mutex::new(default_probe));

/// Overrides the probe used for the initial viewport measurement.
///
/// The host platform installs its real measurement here; tests use it to pin
/// the environment.
pub fn set_viewport_probe(probe: ViewportProbe) {
    let mut guard = VIEWPORT_PROBE.lock().unwrap();
    *guard = probe;
}

pub(crate) fn probe_viewport() -> Environment {
    let probe = VIEWPORT_PROBE.lock().unwrap();
    (*probe)()
}

fn default_probe() -> Environment {
    Environment::screen(DEFAULT_WIDTH)
}
