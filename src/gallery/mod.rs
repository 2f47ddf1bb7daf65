// Gateway module for the gallery - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod command;
mod controller;
mod item;
mod manifest;

// Public re-exports - the ONLY way to access gallery functionality
pub use command::{Direction, GalleryCommand};
pub use controller::{Gallery, LightboxView};
pub use item::{Filter, GalleryItem, ItemId};
pub use manifest::{load_manifest, parse_manifest, sample_items};
