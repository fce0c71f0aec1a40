pub mod components;
pub mod layouts;
pub mod pages;
pub mod styles;

// Re-exports for convenience
pub use components::{error_page, shoe_card, ShoeCardVm};
pub use layouts::desktop::desktop_layout;
