//! Error types for window and swap chain setup
//!
//! Construction failures (class registration, window creation, swap chain
//! creation) are fatal for the caller and surface as errors here. Capability
//! probes (tearing support) never error; absence is just `false`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The window class could not be registered with the OS
    #[error("window class registration failed: {0}")]
    ClassRegistration(String),

    /// CreateWindowExW failed
    #[error("window creation failed: {0}")]
    WindowCreation(String),

    /// A DXGI call failed while building the swap chain
    #[error("swap chain creation failed: {0}")]
    SwapChain(String),

    /// Client-area dimensions must be positive
    #[error("invalid window dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Presentation-surface extent must be non-zero
    #[error("invalid surface extent: {width}x{height}")]
    InvalidExtent { width: u32, height: u32 },

    /// Flip-model presentation requires at least two buffers
    #[error("invalid buffer count: {0} (flip model requires at least 2)")]
    InvalidBufferCount(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::InvalidBufferCount(1);
        assert_eq!(
            e.to_string(),
            "invalid buffer count: 1 (flip model requires at least 2)"
        );

        let e = Error::InvalidDimensions {
            width: 0,
            height: 720,
        };
        assert_eq!(e.to_string(), "invalid window dimensions: 0x720");
    }
}
