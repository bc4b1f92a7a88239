//! Presentation-surface parameters
//!
//! Describes the swap chain the host wants before any platform call is made.
//! The pixel format is fixed (8-bit RGBA, unsigned normalized) and the swap
//! effect is always flip-discard, so the only knobs are the extent and the
//! buffer count.

use crate::error::Error;

/// Parameters for creating a presentation surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentParams {
    /// Surface width in pixels (the window's client width)
    pub width: u32,
    /// Surface height in pixels (the window's client height)
    pub height: u32,
    /// Number of buffers in the swap chain; flip model requires at least 2
    pub buffer_count: u32,
}

impl Default for PresentParams {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            buffer_count: 3,
        }
    }
}

impl PresentParams {
    pub fn new(width: u32, height: u32, buffer_count: u32) -> Self {
        Self {
            width,
            height,
            buffer_count,
        }
    }

    /// Validate parameters before handing them to the graphics driver
    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidExtent {
                width: self.width,
                height: self.height,
            });
        }
        if self.buffer_count < 2 {
            return Err(Error::InvalidBufferCount(self.buffer_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PresentParams::default().validate().is_ok());
    }

    #[test]
    fn test_single_buffer_rejected() {
        let params = PresentParams::new(1280, 720, 1);
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidBufferCount(1))
        ));
    }

    #[test]
    fn test_double_buffering_accepted() {
        assert!(PresentParams::new(1280, 720, 2).validate().is_ok());
    }

    #[test]
    fn test_zero_extent_rejected() {
        let params = PresentParams::new(0, 720, 2);
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidExtent { width: 0, .. })
        ));
    }

    #[test]
    fn test_extent_diagnostic_keeps_unsigned_values() {
        // A width past i32::MAX must not display as negative.
        let params = PresentParams::new(u32::MAX, 0, 2);
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), format!("invalid surface extent: {}x0", u32::MAX));
    }
}
