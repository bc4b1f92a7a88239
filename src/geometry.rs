//! Screen-space geometry for window placement
//!
//! Integer rectangles in screen coordinates, plus the pure placement math
//! used when creating a window: expanding a client area by the window chrome
//! and centering the result on the primary display. Kept free of platform
//! types so it can be tested without a display.

/// A rectangle defined by its bounds, in screen pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Get width
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Get height
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Check if rectangle is empty (zero or negative area)
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Window chrome insets (caption, borders) around a client area
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChromeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ChromeInsets {
    /// Insets of an adjusted outer rectangle around the client rect
    /// `(0, 0, client_width, client_height)`, as reported by the platform.
    pub fn from_adjusted_rect(adjusted: Rect, client_width: i32, client_height: i32) -> Self {
        Self {
            left: -adjusted.left,
            top: -adjusted.top,
            right: adjusted.right - client_width,
            bottom: adjusted.bottom - client_height,
        }
    }

    /// Outer window size for a given client-area size
    pub fn outer_size(&self, client_width: i32, client_height: i32) -> (i32, i32) {
        (
            client_width + self.left + self.right,
            client_height + self.top + self.bottom,
        )
    }
}

/// Top-left corner that centers a window of `(width, height)` on a screen of
/// `(screen_width, screen_height)`, clamped so the window is never pushed
/// off-screen to the top or left.
pub fn centered_origin(
    screen_width: i32,
    screen_height: i32,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let x = ((screen_width - width) / 2).max(0);
    let y = ((screen_height - height) / 2).max(0);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(10, 20, 110, 70);

        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_rect_from_pos_size() {
        let r = Rect::from_pos_size(10, 20, 100, 50);

        assert_eq!(r.left, 10);
        assert_eq!(r.top, 20);
        assert_eq!(r.right, 110);
        assert_eq!(r.bottom, 70);
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::new(0, 0, 0, 100).is_empty());
        assert!(Rect::new(10, 10, 5, 20).is_empty());
    }

    #[test]
    fn test_chrome_insets_round_trip() {
        // AdjustWindowRect on (0, 0, 1280, 720) typically yields something
        // like (-8, -31, 1288, 728) for an overlapped window.
        let adjusted = Rect::new(-8, -31, 1288, 728);
        let insets = ChromeInsets::from_adjusted_rect(adjusted, 1280, 720);

        assert_eq!(insets.left, 8);
        assert_eq!(insets.top, 31);
        assert_eq!(insets.right, 8);
        assert_eq!(insets.bottom, 8);

        // Outer size minus insets gives back the requested client size.
        let (outer_w, outer_h) = insets.outer_size(1280, 720);
        assert_eq!(outer_w, adjusted.width());
        assert_eq!(outer_h, adjusted.height());
        assert_eq!(outer_w - insets.left - insets.right, 1280);
        assert_eq!(outer_h - insets.top - insets.bottom, 720);
    }

    #[test]
    fn test_window_placement_pipeline() {
        // The same sequence create_app_window runs: platform-adjusted rect
        // to insets, insets to outer size, outer size to centered origin.
        let adjusted = Rect::new(-8, -31, 1288, 728);
        let insets = ChromeInsets::from_adjusted_rect(adjusted, 1280, 720);
        let (outer_w, outer_h) = insets.outer_size(1280, 720);
        let (x, y) = centered_origin(1920, 1080, outer_w, outer_h);

        assert_eq!((outer_w, outer_h), (1296, 759));
        assert_eq!((x, y), (312, 160));
    }

    #[test]
    fn test_centered_origin() {
        let (x, y) = centered_origin(1920, 1080, 1296, 759);
        assert_eq!(x, (1920 - 1296) / 2);
        assert_eq!(y, (1080 - 759) / 2);
    }

    #[test]
    fn test_centered_origin_clamps_to_zero() {
        // Window larger than the screen must not land off-screen.
        let (x, y) = centered_origin(1280, 720, 2000, 1500);
        assert_eq!((x, y), (0, 0));

        // Mixed case: wider but shorter.
        let (x, y) = centered_origin(1280, 720, 2000, 300);
        assert_eq!(x, 0);
        assert_eq!(y, (720 - 300) / 2);
    }
}
