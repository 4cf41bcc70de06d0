//! Environment configuration.
//!
//! Values come from the process environment, after an optional `.env`
//! file has been loaded by `main`.
//!
//! | Variable            | Used by  | Default          |
//! |---------------------|----------|------------------|
//! | `SUPABASE_URL`      | `submit` | required         |
//! | `SUPABASE_ANON_KEY` | `submit` | required         |
//! | `PORTAL_PORT`       | `serve`  | `8080`           |
//! | `PORTAL_DIST_DIR`   | `serve`  | `frontend/dist`  |

use std::env;
use std::path::PathBuf;

use portal_core::SupabaseConfig;
use tracing::info;

use crate::error::{ConfigError, ConfigResult};

/// Default port for `portal serve`.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the trunk build output.
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";

/// Settings for the static host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl ServeConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let port = match lookup("PORTAL_PORT") {
            Some(value) => value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidVar {
                    key: "PORTAL_PORT",
                    value: value.clone(),
                    message: e.to_string(),
                }
            })?,
            None => {
                info!("PORTAL_PORT not set, using default: {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let dist_dir = lookup("PORTAL_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Ok(Self { port, dist_dir })
    }
}

/// Supabase project settings for the `submit` command.
pub fn supabase_from_env() -> ConfigResult<SupabaseConfig> {
    supabase_from_lookup(|key| env::var(key).ok())
}

pub fn supabase_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<SupabaseConfig> {
    let url = required(&lookup, "SUPABASE_URL")?;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ConfigError::InvalidVar {
            key: "SUPABASE_URL",
            value: url,
            message: "expected an http(s) URL".to_string(),
        });
    }
    let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;
    Ok(SupabaseConfig::new(url, anon_key))
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> ConfigResult<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}
