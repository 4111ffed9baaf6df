#![deny(unused_must_use)]
#![deny(clippy::all)]

//! A thin web client over a remote follow-graph collection: two forms,
//! one in-memory list snapshot, and a four-way conditional renderer.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use log::info;
use parking_lot::Mutex;
use remote::{RemoteClient, UserDirectory};

use crate::{config::AppConfig, store::AppState};

pub mod config;
pub mod forms;
pub mod server;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_support;

/// Explicitly constructed application context. Handlers receive it through
/// `web::Data` rather than a process-wide singleton.
pub struct AppContext {
    pub state: Mutex<AppState>,
    pub directory: Arc<dyn UserDirectory>,
}

impl AppContext {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            state: Mutex::new(AppState::new()),
            directory,
        }
    }
}

pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let directory =
        RemoteClient::new(config.base_url, config.api_token).map_err(std::io::Error::other)?;
    let context = web::Data::new(AppContext::new(Arc::new(directory)));

    info!("listening on {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            .configure(server::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
