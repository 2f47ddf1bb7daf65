pub mod app;
pub mod calculator;
pub mod cli;
pub mod constants;
pub mod gallery;
pub mod runtime;
pub mod timer;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use calculator::{CalcCommand, Calculator};
pub use gallery::{Gallery, GalleryCommand};
pub use tui::run_ui;
pub use utils::BenchtopError;
