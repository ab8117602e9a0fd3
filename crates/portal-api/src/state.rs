use std::sync::Arc;

use anyhow::Result;
use leptos::prelude::LeptosOptions;

use crate::config::PortalConfig;

/// Shared state for the router.
/// The manual `FromRef` impl lets Leptos extract `LeptosOptions` from it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let leptos_options = config.leptos_options()?;
        Ok(Self {
            config: Arc::new(config),
            leptos_options,
        })
    }
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
