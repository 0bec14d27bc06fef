//! Backend layer
//!
//! Owns the async runtime and the users API client. The update layer awaits
//! backend calls through [`Backend::block_on`], so every store mutation still
//! happens on the UI thread.

mod config_service;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;
use user_form_core::{HttpUserApi, UserApi};

pub use config_service::{AppConfig, ConfigService, LocalConfigService, API_URL_ENV};

/// Runtime plus API client
pub struct Backend {
    runtime: Runtime,
    api: Arc<dyn UserApi>,
}

impl Backend {
    pub fn new(api: Arc<dyn UserApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, api })
    }

    /// HTTP backend as described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api = match config.request_timeout_secs {
            Some(secs) => {
                HttpUserApi::with_timeout(&config.api_base_url, Duration::from_secs(secs))?
            }
            None => HttpUserApi::new(&config.api_base_url),
        };
        log::info!("Users backend at {}", api.base_url());
        Self::new(Arc::new(api))
    }

    pub fn api(&self) -> Arc<dyn UserApi> {
        Arc::clone(&self.api)
    }

    /// Run a backend call to completion on the UI thread
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
