//! Configuration for CineMax
//!
//! Settings live in `<config_dir>/cinemax/config.toml` unless a path is
//! given on the command line. The service URL can also be overridden with
//! `CINEMAX_API_URL` or `--api-url`.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, resolve_settings,
    API_URL_ENV_VAR,
};
pub use types::*;
