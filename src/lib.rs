//! Casement - a Win32 render window and DXGI swap chain helper
//!
//! Creates an overlapped window centered on the primary display, builds a
//! flip-model swap chain against a Direct3D 12 command queue, and toggles the
//! window between windowed and borderless-fullscreen modes. The host
//! application owns the message loop and the render loop.
//!
//! The fullscreen state machine and the placement math live in portable
//! modules behind the [`window::WindowingBackend`] trait, so they build and
//! test without Windows dependencies; everything that touches the OS sits in
//! [`platform::win32`].

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod error;
pub mod geometry;
pub mod present;
pub mod window;

pub mod platform;

pub use error::Error;
pub use geometry::Rect;
pub use present::PresentParams;
pub use window::{RenderWindow, ShowMode, WindowStyle, WindowingBackend, ZOrder};
