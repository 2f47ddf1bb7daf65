/// Constants module to avoid magic numbers in the codebase

// Calculator
pub const CALC_MAX_ENTRY_LEN: usize = 12;
pub const CALC_DECIMAL_PLACES: u32 = 8;
pub const CALC_ERROR_CLEAR_MS: u64 = 2000;
pub const CALC_DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

// Gallery
pub const GALLERY_CROSSFADE_MS: u64 = 100;
pub const GALLERY_FILTER_ALL: &str = "all";

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const UI_DEFAULT_THEME: &str = "dark";
pub const UI_GRID_COLUMNS: usize = 3;

// Config locations
pub const CONFIG_APP_NAME: &str = "benchtop";
pub const CONFIG_ENV_PREFIX: &str = "BENCHTOP_";
pub const LOCAL_CONFIG_PATH: &str = ".benchtop/config.toml";
