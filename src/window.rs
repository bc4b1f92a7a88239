//! Fullscreen state machine over a narrow windowing capability trait
//!
//! [`RenderWindow`] owns the windowed/borderless bookkeeping (saved rectangle
//! plus current mode) and drives transitions through [`WindowingBackend`], a
//! trait small enough to fake in tests. The Win32 implementation lives in
//! `platform::win32`; the state machine itself has no OS dependencies.

use crate::geometry::Rect;

/// Window style the backend can apply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStyle {
    /// Standard overlapped window: caption, frame, resize box
    Overlapped,
    /// No decorations; client area fills the whole window
    Borderless,
}

/// Z-order placement for a repositioned window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZOrder {
    /// Above all other windows
    Top,
    /// Above all non-topmost windows, behind topmost ones
    NonTopmost,
}

/// Show state for a window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowMode {
    Normal,
    Maximized,
}

/// Capability interface over the host windowing system
///
/// One method per platform call the fullscreen transition needs. All calls
/// must come from the thread that owns the window.
pub trait WindowingBackend {
    /// Current outer rectangle of the window in screen coordinates
    fn window_rect(&self) -> Rect;

    /// Bounds of the monitor the window currently overlaps most
    fn nearest_monitor_bounds(&self) -> Rect;

    /// Apply a window style (frame change deferred until the next placement)
    fn set_style(&mut self, style: WindowStyle);

    /// Move and resize the window without stealing input focus
    fn set_placement(&mut self, rect: Rect, z_order: ZOrder);

    /// Change the show state of the window
    fn show(&mut self, mode: ShowMode);
}

/// A window with a windowed / borderless-fullscreen toggle
///
/// Starts in windowed mode. Toggling to the current mode is a no-op and
/// performs no backend calls, so redundant requests cause no visible
/// style or geometry churn.
pub struct RenderWindow<B: WindowingBackend> {
    backend: B,
    saved_rect: Rect,
    fullscreen: bool,
}

impl<B: WindowingBackend> RenderWindow<B> {
    /// Wrap a backend; records the current rectangle for later restore
    pub fn new(backend: B) -> Self {
        let saved_rect = backend.window_rect();
        Self {
            backend,
            saved_rect,
            fullscreen: false,
        }
    }

    /// Whether the window is currently borderless fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// The rectangle that will be restored when leaving fullscreen
    pub fn saved_rect(&self) -> Rect {
        self.saved_rect
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Switch between windowed and borderless fullscreen
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.fullscreen == fullscreen {
            return;
        }
        self.fullscreen = fullscreen;

        if fullscreen {
            // Store the current window dimensions so they can be restored
            // when switching out of the fullscreen state.
            self.saved_rect = self.backend.window_rect();
            log!("entering borderless fullscreen, saved {:?}", self.saved_rect);

            self.backend.set_style(WindowStyle::Borderless);

            let monitor = self.backend.nearest_monitor_bounds();
            self.backend.set_placement(monitor, ZOrder::Top);
            self.backend.show(ShowMode::Maximized);
        } else {
            log!("leaving fullscreen, restoring {:?}", self.saved_rect);

            self.backend.set_style(WindowStyle::Overlapped);
            self.backend.set_placement(self.saved_rect, ZOrder::NonTopmost);
            self.backend.show(ShowMode::Normal);
        }
    }

    /// Flip the fullscreen state
    pub fn toggle_fullscreen(&mut self) {
        self.set_fullscreen(!self.fullscreen);
    }
}
