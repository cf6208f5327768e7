pub mod config;
pub mod types;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use types::{
    Coordinates, LocationInput, NormalizedProperty, ParsedListing, ResolvedLocation,
};
