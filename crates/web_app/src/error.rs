use actix_web::{
    dev::ServiceResponse,
    http::{header, StatusCode},
    middleware::ErrorHandlerResponse,
    HttpResponse, ResponseError,
};
use log::error;
use thiserror::Error;

use crate::middleware::request_id::extract_request_id;
use crate::server::AppState;
use crate::views::View;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Record not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::InternalError(source) = self {
            error!("Request failed: {source:#}");
        }
        HttpResponse::build(self.status_code()).finish()
    }
}

/// Rewrites 500 responses into the generic error page carrying the request id.
/// Registered as an `ErrorHandlers` hook on the app.
pub fn render_error_page<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let request_id = extract_request_id(res.request()).unwrap_or_default();
    let html = res
        .request()
        .app_data::<actix_web::web::Data<AppState>>()
        .and_then(|state| state.renderer.render(&View::Error { request_id }).ok());

    let Some(html) = html else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let (req, res) = res.into_parts();
    let mut res = res.set_body(html);
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );
    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
