//! User Form TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: runtime, API client and config (`backend/`)
//!
//! Startup:
//!
//!     init_logging()              // file sink, filter from USER_FORM_LOG
//!     LocalConfigService::load()  // config.json, USER_FORM_API_URL override
//!     Backend::from_config()      // runtime + HTTP client
//!     init_terminal()
//!     Navigate("/")               // load the users list
//!     app::run()                  // main loop
//!     restore_terminal()          // always, even on error
//!

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use user_form_core::form::LIST_ROUTE;

use backend::{Backend, ConfigService, LocalConfigService, API_URL_ENV};
use message::AppMessage;
use util::{init_logging, init_terminal, restore_terminal, LOG_FILTER_ENV};

fn main() -> Result<()> {
    // 1. Logging first, the terminal is about to be taken over
    let log_path = init_logging()?;

    // 2. Config; write defaults on first run so there is a file to edit
    let config_service = LocalConfigService::new();
    if !config_service.path().exists() {
        config_service.save(&Default::default())?;
        log::info!("Wrote default config to {}", config_service.path().display());
    }
    let config = config_service.load()?;

    log::info!(
        "Starting User Form TUI v{} (backend {}, log {}, override with {API_URL_ENV} / {LOG_FILTER_ENV})",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url,
        log_path.display(),
    );

    // 3. Backend
    let backend = Backend::from_config(&config)?;

    // 4. Terminal
    let mut terminal = init_terminal()?;

    // 5. Initial route
    let mut app = model::App::new();
    update::update(&mut app, &backend, AppMessage::Navigate(LIST_ROUTE.to_string()));

    // 6. Main loop
    let result = app::run(&mut terminal, &mut app, &backend);

    // 7. Restore the terminal whatever happened
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
