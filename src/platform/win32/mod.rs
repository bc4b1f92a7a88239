//! Win32 platform implementation

pub mod dpi;
pub mod swapchain;
pub mod window;

pub use dpi::enable_dpi_awareness;
pub use swapchain::{create_swap_chain, tearing_supported};
pub use window::{
    clear_window_callback, create_app_window, destroy_window, get_client_size,
    register_window_class, set_window_callback, show_window, unregister_window_class,
    Win32Backend,
};
