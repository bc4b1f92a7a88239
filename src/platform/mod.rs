//! Platform abstraction layer
//!
//! Currently only Windows (win32) is supported. The portable state machine
//! in [`crate::window`] compiles everywhere; this module holds the code that
//! actually talks to the OS.

#[cfg(target_os = "windows")]
pub mod win32;
