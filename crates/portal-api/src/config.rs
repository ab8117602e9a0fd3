use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use leptos::prelude::LeptosOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Mounted at `/static` when the directory exists.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Leptos site root: compiled WASM, JS and CSS live under `site_pkg_dir`.
    #[serde(default = "default_site_root")]
    pub site_root: String,
    #[serde(default = "default_site_pkg_dir")]
    pub site_pkg_dir: String,
    /// File stem of the generated CSS/JS/WASM bundle.
    #[serde(default = "default_output_name")]
    pub output_name: String,

    /// `"*"` mirrors any request origin (credentials allowed).
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_site_root() -> String {
    "target/site".into()
}

fn default_site_pkg_dir() -> String {
    "pkg".into()
}

fn default_output_name() -> String {
    "portal-web".into()
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

impl Default for PortalConfig {
    fn default() -> Self {
        toml::from_str("").expect("every PortalConfig field has a default")
    }
}

impl PortalConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Like [`PortalConfig::load`], but a missing file yields the defaults.
    /// Any other read error (permissions, not a file) is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config from {}", path.display())),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {addr}"))
    }

    pub fn leptos_options(&self) -> Result<LeptosOptions> {
        Ok(LeptosOptions::builder()
            .output_name(self.output_name.as_str())
            .site_root(self.site_root.as_str())
            .site_pkg_dir(self.site_pkg_dir.as_str())
            .site_addr(self.listen_addr()?)
            .build())
    }
}
