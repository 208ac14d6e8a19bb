//! Configuration for the jyoti engine.
//!
//! This crate provides:
//! - [`JyotiConfig`]: the `jyoti.toml` document, every field defaulted
//! - layered loading (defaults, file, `JYOTI_*` environment overrides)
//! - validation and conversion into the option structs of `jyoti_search`

pub mod error;
pub mod loader;
pub mod schema;

pub use error::ConfigError;
pub use loader::{
    DEFAULT_FILE_NAME, ENV_AYANAMSHA, ENV_CONFIG_PATH, ENV_DASHA_DEPTH, ENV_HOUSE_SYSTEM,
    ENV_NODE_MODE,
};
pub use schema::{
    ChartSection, DashaSection, DoshaSection, JyotiConfig, LocationSection, MuhuratSection,
};
