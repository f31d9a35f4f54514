use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use log::info;
use serde::Deserialize;

use todo_core::ToDo;

use crate::error::{AppError, Result};
use crate::server::AppState;
use crate::views::View;

/// Configure todo routes
///
/// `/todo/create` registers ahead of `/todo/{id}` so the literal segment wins
/// over the id match.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(create_form)
        .service(create)
        .service(details)
        .service(edit_form)
        .service(edit)
        .service(delete_form)
        .service(delete);
}

#[derive(Deserialize)]
struct CreateTodoForm {
    content: String,
}

#[derive(Deserialize)]
struct EditTodoForm {
    id: i64,
    content: String,
}

fn html_page(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET / - List all todos
#[get("/")]
pub async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let todos = app_state.todo_service.list().await?;
    let html = app_state.renderer.render(&View::Index { todos })?;
    Ok(html_page(html))
}

/// GET /todo/create - Blank form for a new todo
#[get("/todo/create")]
pub async fn create_form(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let html = app_state.renderer.render(&View::Create)?;
    Ok(html_page(html))
}

/// POST /todo/create - Persist a new todo, then back to the list
#[post("/todo/create")]
pub async fn create(
    app_state: web::Data<AppState>,
    form: web::Form<CreateTodoForm>,
) -> Result<HttpResponse> {
    let todo = ToDo::new(form.into_inner().content);
    let saved = app_state.todo_service.add(todo).await?;
    info!("Created todo {}", saved.id);
    Ok(redirect_to_index())
}

/// GET /todo/{id} - Details for one todo
#[get("/todo/{id}")]
pub async fn details(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    match app_state.todo_service.get(id).await? {
        Some(todo) => Ok(html_page(
            app_state.renderer.render(&View::Details { todo })?,
        )),
        None => Err(AppError::NotFound),
    }
}

/// GET /todo/{id}/edit - Form prefilled with the current record
#[get("/todo/{id}/edit")]
pub async fn edit_form(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match app_state.todo_service.get(id).await? {
        Some(todo) => Ok(html_page(app_state.renderer.render(&View::Edit { todo })?)),
        None => Err(AppError::NotFound),
    }
}

/// POST /todo/{id}/edit - Save the submitted content, then back to the list
#[post("/todo/{id}/edit")]
pub async fn edit(
    app_state: web::Data<AppState>,
    form: web::Form<EditTodoForm>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    // Only id and content bind from the form; other fields stay at defaults
    let todo = ToDo::with_id(form.id, form.content);
    app_state.todo_service.edit(todo).await?;
    Ok(redirect_to_index())
}

/// GET /todo/{id}/delete - Confirmation page before removal
#[get("/todo/{id}/delete")]
pub async fn delete_form(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    match app_state.todo_service.get(id).await? {
        Some(todo) => Ok(html_page(
            app_state.renderer.render(&View::Delete { todo })?,
        )),
        None => Err(AppError::NotFound),
    }
}

/// POST /todo/{id}/delete - Remove the record, then back to the list
#[post("/todo/{id}/delete")]
pub async fn delete(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();
    app_state.todo_service.delete(id).await?;
    info!("Deleted todo {id}");
    Ok(redirect_to_index())
}
