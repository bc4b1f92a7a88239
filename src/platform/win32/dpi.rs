//! DPI awareness utilities for Windows

use windows::Win32::UI::HiDpi::*;

/// Enable per-monitor DPI awareness (call early in main)
pub fn enable_dpi_awareness() -> Result<(), windows::core::Error> {
    unsafe {
        // Try V2 first (Windows 10 1703+)
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() {
            return Ok(());
        }
        // Fall back to V1
        SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE)
    }
}
