//! DXGI swap chain creation and tearing support
//!
//! Flip-discard presentation against a Direct3D 12 command queue. The
//! newest-ready frame always takes presentation priority; a stale pending
//! frame is discarded rather than queued. Fullscreen transitions are handled
//! by the window itself (borderless, see [`crate::window`]), so the DXGI
//! Alt+Enter exclusive-fullscreen toggle is disabled on the window.

use core::ffi::c_void;

use windows::core::Interface;
use windows::Win32::Foundation::{BOOL, HWND};
use windows::Win32::Graphics::Direct3D12::ID3D12CommandQueue;
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_ALPHA_MODE_UNSPECIFIED, DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    CreateDXGIFactory1, CreateDXGIFactory2, IDXGIFactory4, IDXGIFactory5, IDXGISwapChain1,
    IDXGISwapChain4, DXGI_CREATE_FACTORY_DEBUG, DXGI_CREATE_FACTORY_FLAGS,
    DXGI_FEATURE_PRESENT_ALLOW_TEARING, DXGI_MWA_NO_ALT_ENTER, DXGI_SCALING_STRETCH,
    DXGI_SWAP_CHAIN_DESC1, DXGI_SWAP_CHAIN_FLAG_ALLOW_TEARING, DXGI_SWAP_EFFECT_FLIP_DISCARD,
    DXGI_USAGE_RENDER_TARGET_OUTPUT,
};

use crate::error::Error;
use crate::present::PresentParams;

/// Whether the driver allows tearing (vsync-off) with flip-model presents
///
/// Variable refresh rate displays (G-Sync, FreeSync) require tearing to be
/// enabled on the swap chain to function. The capability is optional: if any
/// interface in the query chain is unavailable this returns `false`, never
/// an error.
pub fn tearing_supported() -> bool {
    unsafe {
        // Create the 1.4 factory and query for 1.5 rather than creating the
        // 1.5 interface directly; graphics debugging tools only support the
        // older factory.
        let Ok(factory4) = CreateDXGIFactory1::<IDXGIFactory4>() else {
            return false;
        };
        let Ok(factory5) = factory4.cast::<IDXGIFactory5>() else {
            return false;
        };

        let mut allow_tearing = BOOL::default();
        let supported = factory5
            .CheckFeatureSupport(
                DXGI_FEATURE_PRESENT_ALLOW_TEARING,
                &mut allow_tearing as *mut BOOL as *mut c_void,
                std::mem::size_of::<BOOL>() as u32,
            )
            .is_ok();

        supported && allow_tearing.as_bool()
    }
}

/// Create a flip-discard swap chain for `hwnd` on a D3D12 command queue
///
/// The format is fixed at `R8G8B8A8_UNORM` with no multisampling (flip-model
/// swap chains require a `{1, 0}` sample desc). Tearing is enabled whenever
/// the driver supports it. The caller owns the returned swap chain and must
/// resize or recreate it when the window's client area changes.
pub fn create_swap_chain(
    command_queue: &ID3D12CommandQueue,
    hwnd: HWND,
    params: &PresentParams,
) -> Result<IDXGISwapChain4, Error> {
    params.validate()?;

    let allow_tearing = tearing_supported();
    log!(
        "creating swap chain: {}x{}, {} buffers, tearing={}",
        params.width,
        params.height,
        params.buffer_count,
        allow_tearing
    );

    let factory_flags = if cfg!(debug_assertions) {
        DXGI_CREATE_FACTORY_DEBUG
    } else {
        DXGI_CREATE_FACTORY_FLAGS(0)
    };

    unsafe {
        let factory: IDXGIFactory4 = CreateDXGIFactory2(factory_flags)
            .map_err(|e| Error::SwapChain(e.to_string()))?;

        let desc = DXGI_SWAP_CHAIN_DESC1 {
            Width: params.width,
            Height: params.height,
            Format: DXGI_FORMAT_R8G8B8A8_UNORM,
            Stereo: false.into(),
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: 1,
                Quality: 0,
            },
            BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
            BufferCount: params.buffer_count,
            Scaling: DXGI_SCALING_STRETCH,
            SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
            AlphaMode: DXGI_ALPHA_MODE_UNSPECIFIED,
            Flags: if allow_tearing {
                DXGI_SWAP_CHAIN_FLAG_ALLOW_TEARING.0 as u32
            } else {
                0
            },
        };

        let swap_chain: IDXGISwapChain1 = factory
            .CreateSwapChainForHwnd(command_queue, hwnd, &desc, None, None)
            .map_err(|e| Error::SwapChain(e.to_string()))?;

        // Alt+Enter would switch to exclusive fullscreen behind our back;
        // the borderless toggle owns all fullscreen transitions.
        factory
            .MakeWindowAssociation(hwnd, DXGI_MWA_NO_ALT_ENTER)
            .map_err(|e| Error::SwapChain(e.to_string()))?;

        swap_chain
            .cast::<IDXGISwapChain4>()
            .map_err(|e| Error::SwapChain(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tearing_probe_never_panics() {
        // Capability gap, not an error: the probe must return a plain bool
        // whatever the driver situation.
        let _ = tearing_supported();
    }
}
