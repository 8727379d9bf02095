//! Server configuration from the Leptos config and environment variables.
//!
//! `cargo leptos` exports the `[[workspace.metadata.leptos]]` settings as
//! `LEPTOS_*` variables; `get_configuration(None)` reads them. `PORT`, when
//! set, overrides the port of the configured site address. `PAGE_CONFIG`,
//! when set, is a JSON object overriding page behavior fields, for example
//! `{"mobile_breakpoint_px": 600, "sections": {"tags": false}}`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::SocketAddr;
use std::path::PathBuf;

use blog_client::config::PageConfig;
use leptos::prelude::{LeptosOptions, get_configuration};

/// Errors produced while assembling server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `PAGE_CONFIG` is set but is not a valid page config object.
    #[error("invalid PAGE_CONFIG: {0}")]
    InvalidPageConfig(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub options: LeptosOptions,
    pub addr: SocketAddr,
    pub page: PageConfig,
}

impl ServerConfig {
    /// Build config from the Leptos environment plus optional `PORT` and
    /// `PAGE_CONFIG`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded, `PORT`
    /// is not a valid port number, or `PAGE_CONFIG` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let options = conf.leptos_options;
        let addr = apply_port_override(options.site_addr, std::env::var("PORT").ok().as_deref())?;
        let page = load_page_config(std::env::var("PAGE_CONFIG").ok().as_deref())?;
        Ok(Self { options, addr, page })
    }

    /// Directory holding the compiled site (`pkg/` and static files).
    pub fn site_root(&self) -> PathBuf {
        PathBuf::from(self.options.site_root.as_ref())
    }
}

/// Replace the port of `addr` with `raw` when present.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `raw` is not a `u16`.
pub fn apply_port_override(mut addr: SocketAddr, raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(addr);
    };
    let port = raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?;
    addr.set_port(port);
    Ok(addr)
}

/// Parse the `PAGE_CONFIG` override, or the defaults when unset or blank.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPageConfig`] when `raw` is not a valid
/// page config object.
pub fn load_page_config(raw: Option<&str>) -> Result<PageConfig, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(PageConfig::default());
    };
    PageConfig::from_json(raw).map_err(|e| ConfigError::InvalidPageConfig(e.to_string()))
}
