//! Win32 window creation and management
//!
//! Class registration happens at most once per process, gated by an explicit
//! flag; `unregister_window_class` is the matching teardown. The window
//! procedure forwards every message to a host-installed callback first, so
//! message handling stays with the application while this module only owns
//! the plumbing.

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};

use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromWindow, HBRUSH, MONITORINFO, MONITOR_DEFAULTTONEAREST,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::error::Error;
use crate::geometry::{centered_origin, ChromeInsets, Rect};
use crate::window::{ShowMode, WindowStyle, WindowingBackend, ZOrder};

const WINDOW_CLASS_NAME: PCWSTR = w!("CasementRenderWindowClass");

/// Process-wide "class already registered" flag
static CLASS_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Thread-local storage for window procedure callback data
thread_local! {
    static WINDOW_CALLBACK: RefCell<Option<Box<dyn FnMut(HWND, u32, WPARAM, LPARAM) -> Option<LRESULT>>>> = RefCell::new(None);
}

/// Set the window procedure callback
pub fn set_window_callback<F>(callback: F)
where
    F: FnMut(HWND, u32, WPARAM, LPARAM) -> Option<LRESULT> + 'static,
{
    WINDOW_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(Box::new(callback));
    });
}

/// Clear the window procedure callback
pub fn clear_window_callback() {
    WINDOW_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Window procedure: host callback first, then default handling
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let result = WINDOW_CALLBACK.with(|cb| {
        if let Some(ref mut callback) = *cb.borrow_mut() {
            callback(hwnd, msg, wparam, lparam)
        } else {
            None
        }
    });

    if let Some(r) = result {
        return r;
    }

    match msg {
        WM_DESTROY => {
            log!("WM_DESTROY received - posting quit message");
            PostQuitMessage(0);
            LRESULT(0)
        }
        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Register the render-window class (call once at startup)
///
/// Idempotent: repeat calls return `Ok` without touching the OS. The flag is
/// only set once registration has succeeded, so a failed attempt leaves the
/// process free to retry, though registration failure is normally fatal.
pub fn register_window_class() -> Result<(), Error> {
    if CLASS_REGISTERED.load(Ordering::SeqCst) {
        return Ok(());
    }

    if let Err(e) = register_class_with_os() {
        log!("FATAL: window class registration failed: {:?}", e);
        return Err(Error::ClassRegistration(e.to_string()));
    }

    // Published only after RegisterClassExW succeeded, so an observer never
    // sees "registered" while no class exists.
    CLASS_REGISTERED.store(true, Ordering::SeqCst);
    log!("window class registered");
    Ok(())
}

fn register_class_with_os() -> Result<(), windows::core::Error> {
    unsafe {
        let hinstance = GetModuleHandleW(None)?;

        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: hinstance.into(),
            hIcon: HICON::default(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            // Standard system color; the value 1 must be added.
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut core::ffi::c_void),
            lpszMenuName: PCWSTR::null(),
            lpszClassName: WINDOW_CLASS_NAME,
            hIconSm: HICON::default(),
        };

        let atom = RegisterClassExW(&wc);
        if atom == 0 {
            return Err(windows::core::Error::from_win32());
        }
        Ok(())
    }
}

/// Unregister the window class (call at shutdown)
pub fn unregister_window_class() {
    if !CLASS_REGISTERED.swap(false, Ordering::SeqCst) {
        return;
    }
    unsafe {
        let _ = GetModuleHandleW(None).map(|h| {
            let _ = UnregisterClassW(WINDOW_CLASS_NAME, h);
        });
    }
}

/// Create the render window, centered on the primary display
///
/// `width` and `height` are client-area pixels; the outer rectangle is
/// expanded by the overlapped-window chrome before centering, and the
/// top-left corner is clamped to (0, 0) so the window never starts
/// off-screen. The window is created hidden; call [`show_window`] once the
/// host is ready to paint.
pub fn create_app_window(title: &str, width: i32, height: i32) -> Result<HWND, Error> {
    if width <= 0 || height <= 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    unsafe {
        let hinstance =
            GetModuleHandleW(None).map_err(|e| Error::WindowCreation(e.to_string()))?;

        let screen_width = GetSystemMetrics(SM_CXSCREEN);
        let screen_height = GetSystemMetrics(SM_CYSCREEN);

        // Outer rectangle for the requested client size.
        let mut window_rect = RECT {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        };
        AdjustWindowRect(&mut window_rect, WS_OVERLAPPEDWINDOW, false)
            .map_err(|e| Error::WindowCreation(e.to_string()))?;

        let insets = ChromeInsets::from_adjusted_rect(to_rect(window_rect), width, height);
        let (window_width, window_height) = insets.outer_size(width, height);

        let (window_x, window_y) =
            centered_origin(screen_width, screen_height, window_width, window_height);

        log!(
            "creating window '{}': client {}x{}, outer {}x{} at ({}, {})",
            title,
            width,
            height,
            window_width,
            window_height,
            window_x,
            window_y
        );

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            WINDOW_CLASS_NAME,
            &HSTRING::from(title),
            WS_OVERLAPPEDWINDOW,
            window_x,
            window_y,
            window_width,
            window_height,
            None,
            None,
            hinstance,
            None,
        )
        .map_err(|e| Error::WindowCreation(e.to_string()))?;

        Ok(hwnd)
    }
}

/// Show the window
pub fn show_window(hwnd: HWND) {
    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
    }
}

/// Destroy the window
pub fn destroy_window(hwnd: HWND) {
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}

/// Get window client area size
pub fn get_client_size(hwnd: HWND) -> (i32, i32) {
    unsafe {
        let mut rect = RECT::default();
        let _ = GetClientRect(hwnd, &mut rect);
        (rect.right - rect.left, rect.bottom - rect.top)
    }
}

fn to_rect(r: RECT) -> Rect {
    Rect::new(r.left, r.top, r.right, r.bottom)
}

/// Borderless style: overlapped with every decoration bit stripped
const BORDERLESS_STYLE: WINDOW_STYLE = WINDOW_STYLE(
    WS_OVERLAPPEDWINDOW.0
        & !(WS_CAPTION.0 | WS_SYSMENU.0 | WS_THICKFRAME.0 | WS_MINIMIZEBOX.0 | WS_MAXIMIZEBOX.0),
);

/// [`WindowingBackend`] over a real HWND
///
/// All methods must be called from the thread that owns the window.
pub struct Win32Backend {
    hwnd: HWND,
}

impl Win32Backend {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }
}

impl WindowingBackend for Win32Backend {
    fn window_rect(&self) -> Rect {
        unsafe {
            let mut rect = RECT::default();
            let _ = GetWindowRect(self.hwnd, &mut rect);
            to_rect(rect)
        }
    }

    fn nearest_monitor_bounds(&self) -> Rect {
        unsafe {
            // The monitor the window overlaps most; queried fresh on every
            // transition so monitor hot-plug is picked up.
            let monitor = MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST);
            let mut monitor_info = MONITORINFO {
                cbSize: std::mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            let _ = GetMonitorInfoW(monitor, &mut monitor_info);
            to_rect(monitor_info.rcMonitor)
        }
    }

    fn set_style(&mut self, style: WindowStyle) {
        let bits = match style {
            WindowStyle::Overlapped => WS_OVERLAPPEDWINDOW,
            WindowStyle::Borderless => BORDERLESS_STYLE,
        };
        unsafe {
            SetWindowLongW(self.hwnd, GWL_STYLE, bits.0 as i32);
        }
    }

    fn set_placement(&mut self, rect: Rect, z_order: ZOrder) {
        let insert_after = match z_order {
            ZOrder::Top => HWND_TOP,
            ZOrder::NonTopmost => HWND_NOTOPMOST,
        };
        unsafe {
            // SWP_FRAMECHANGED applies the style set via SetWindowLongW;
            // SWP_NOACTIVATE keeps input focus where it is.
            let _ = SetWindowPos(
                self.hwnd,
                insert_after,
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                SWP_FRAMECHANGED | SWP_NOACTIVATE,
            );
        }
    }

    fn show(&mut self, mode: ShowMode) {
        let cmd = match mode {
            ShowMode::Normal => SW_NORMAL,
            ShowMode::Maximized => SW_MAXIMIZE,
        };
        unsafe {
            let _ = ShowWindow(self.hwnd, cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_window_class_is_idempotent() {
        register_window_class().unwrap();
        register_window_class().unwrap();

        unregister_window_class();
        // Second teardown is a no-op.
        unregister_window_class();

        // Teardown re-arms registration; the flag tracks the class itself.
        register_window_class().unwrap();
        unregister_window_class();
    }
}
