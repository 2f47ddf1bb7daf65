// Gateway module for TUI - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod calc_app;
mod gallery_app;
mod render;
mod screen;
mod theme;
mod ui;

// Public re-exports - the ONLY way to access TUI functionality
pub use calc_app::CalcApp;
pub use gallery_app::GalleryApp;
pub use screen::Screen;
pub use theme::{ColorValue, Theme, ThemeColors};
pub use ui::run_ui;
