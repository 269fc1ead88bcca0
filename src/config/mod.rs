//! Configuration loading and resolution.
//!
//! - [`schema`] - The `.venv-checker.yml` file format
//! - [`loader`] - Discovery, parsing, and merging with CLI overrides

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config_file, parse_config, Overrides, Settings, CONFIG_FILE_NAME,
};
pub use schema::{CheckerConfig, DEFAULT_LOG_FILE, DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR};
