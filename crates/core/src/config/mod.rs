//! Configuration management for quickcd

mod settings;

pub use settings::{
    CONFIG_ENV_VAR, CONFIG_FILE_NAMES, DEFAULT_SERVICE_ADDRESS, DEFAULT_SOURCE_PREFIX,
    DEFAULT_TERMINAL_INIT, Settings,
};
