use std::{path::PathBuf, sync::Arc};

use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{web, App, HttpServer};
use log::{error, info};
use todo_client::{FileTokenProvider, TodoService, TodoServiceTrait, TokenProvider};
use todo_core::Config;

use crate::controllers::todo_controller;
use crate::error;
use crate::middleware::request_id::RequestIdMiddleware;
use crate::views::{HtmlRenderer, ViewRenderer};

pub struct AppState {
    pub todo_service: Arc<dyn TodoServiceTrait>,
    pub renderer: Arc<dyn ViewRenderer>,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(todo_controller::config);
}

pub async fn run(app_data_dir: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting todo web app...");

    let config = Config::new();
    let token_provider: Arc<dyn TokenProvider> = Arc::new(FileTokenProvider::new(app_data_dir));
    let todo_service: Arc<dyn TodoServiceTrait> = Arc::new(TodoService::new(
        token_provider,
        reqwest::Client::new(),
        &config,
    ));

    let app_state = web::Data::new(AppState {
        todo_service,
        renderer: Arc::new(HtmlRenderer),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(ErrorHandlers::new().handler(
                StatusCode::INTERNAL_SERVER_ERROR,
                error::render_error_page,
            ))
            .wrap(RequestIdMiddleware)
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Todo web app listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
