//! Server-rendered pages and the rendering seam.

use chrono::{DateTime, Utc};

use todo_core::ToDo;

/// Model for each page the app renders.
#[derive(Debug, Clone)]
pub enum View {
    Index { todos: Vec<ToDo> },
    Details { todo: ToDo },
    Create,
    Edit { todo: ToDo },
    Delete { todo: ToDo },
    Error { request_id: String },
}

/// Renders a page from its model.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &View) -> anyhow::Result<String>;
}

/// Renderer producing plain server-generated HTML.
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: &View) -> anyhow::Result<String> {
        let page = match view {
            View::Index { todos } => layout("Todo List", &index_body(todos)),
            View::Details { todo } => layout("Details", &details_body(todo)),
            View::Create => layout("Create", &create_body()),
            View::Edit { todo } => layout("Edit", &edit_body(todo)),
            View::Delete { todo } => layout("Delete", &delete_body(todo)),
            View::Error { request_id } => layout("Error", &error_body(request_id)),
        };
        Ok(page)
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{} - ToDo</title>\n</head>\n<body>\n<header><a href=\"/\">ToDo</a></header>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn index_body(todos: &[ToDo]) -> String {
    let mut rows = String::new();
    for todo in todos {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><a href=\"/todo/{id}\">Details</a> | <a href=\"/todo/{id}/edit\">Edit</a> | <a href=\"/todo/{id}/delete\">Delete</a></td></tr>\n",
            escape(&todo.content),
            completed_label(todo),
            id = todo.id
        ));
    }
    format!(
        "<h1>Todo List</h1>\n<p><a href=\"/todo/create\">Create New</a></p>\n<table>\n<thead><tr><th>Content</th><th>Completed</th><th></th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    )
}

fn details_body(todo: &ToDo) -> String {
    format!(
        "<h1>Details</h1>\n<dl>\n<dt>Content</dt><dd>{}</dd>\n<dt>Completed</dt><dd>{}</dd>\n<dt>Created by</dt><dd>{}</dd>\n<dt>Created on</dt><dd>{}</dd>\n<dt>Modified by</dt><dd>{}</dd>\n<dt>Modified on</dt><dd>{}</dd>\n</dl>\n<p><a href=\"/todo/{}/edit\">Edit</a> | <a href=\"/\">Back to List</a></p>",
        escape(&todo.content),
        completed_label(todo),
        escape(todo.created_by.as_deref().unwrap_or("")),
        format_timestamp(todo.created_on),
        escape(todo.modified_by.as_deref().unwrap_or("")),
        format_timestamp(todo.modified_on),
        todo.id
    )
}

fn create_body() -> String {
    "<h1>Create</h1>\n<form method=\"post\" action=\"/todo/create\">\n<label for=\"content\">Content</label>\n<input type=\"text\" id=\"content\" name=\"content\" value=\"\">\n<button type=\"submit\">Create</button>\n</form>\n<p><a href=\"/\">Back to List</a></p>"
        .to_string()
}

fn edit_body(todo: &ToDo) -> String {
    format!(
        "<h1>Edit</h1>\n<form method=\"post\" action=\"/todo/{id}/edit\">\n<input type=\"hidden\" name=\"id\" value=\"{id}\">\n<label for=\"content\">Content</label>\n<input type=\"text\" id=\"content\" name=\"content\" value=\"{content}\">\n<button type=\"submit\">Save</button>\n</form>\n<p><a href=\"/\">Back to List</a></p>",
        id = todo.id,
        content = escape(&todo.content)
    )
}

fn delete_body(todo: &ToDo) -> String {
    format!(
        "<h1>Delete</h1>\n<h3>Are you sure you want to delete this?</h3>\n<dl>\n<dt>Content</dt><dd>{}</dd>\n<dt>Completed</dt><dd>{}</dd>\n</dl>\n<form method=\"post\" action=\"/todo/{}/delete\">\n<button type=\"submit\">Delete</button>\n</form>\n<p><a href=\"/\">Back to List</a></p>",
        escape(&todo.content),
        completed_label(todo),
        todo.id
    )
}

fn error_body(request_id: &str) -> String {
    let mut body = String::from(
        "<h1>Error</h1>\n<h2>An error occurred while processing your request.</h2>\n",
    );
    if !request_id.is_empty() {
        body.push_str(&format!(
            "<p>Request ID: <code>{}</code></p>\n",
            escape(request_id)
        ));
    }
    body
}

fn completed_label(todo: &ToDo) -> &'static str {
    if todo.is_completed {
        "Yes"
    } else {
        "No"
    }
}

fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Escapes text for placement in HTML element or attribute content.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(view: &View) -> String {
        HtmlRenderer.render(view).expect("render")
    }

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape("<b>\"milk\" & 'eggs'</b>"),
            "&lt;b&gt;&quot;milk&quot; &amp; &#39;eggs&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn index_lists_every_todo_with_action_links() {
        let todos = vec![ToDo::with_id(1, "buy milk"), ToDo::with_id(2, "call mom")];

        let html = render(&View::Index { todos });

        assert!(html.contains("buy milk"));
        assert!(html.contains("call mom"));
        assert!(html.contains("href=\"/todo/1\""));
        assert!(html.contains("href=\"/todo/2/edit\""));
        assert!(html.contains("href=\"/todo/2/delete\""));
        assert!(html.contains("href=\"/todo/create\""));
    }

    #[test]
    fn index_escapes_todo_content() {
        let todos = vec![ToDo::with_id(1, "<script>alert(1)</script>")];

        let html = render(&View::Index { todos });

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_form_prefills_id_and_content() {
        let html = render(&View::Edit {
            todo: ToDo::with_id(5, "water the plants"),
        });

        assert!(html.contains("action=\"/todo/5/edit\""));
        assert!(html.contains("name=\"id\" value=\"5\""));
        assert!(html.contains("value=\"water the plants\""));
    }

    #[test]
    fn details_shows_audit_fields_when_present() {
        let todo = ToDo {
            created_by: Some("alice".to_string()),
            created_on: "2024-05-01T08:30:00Z".parse().ok(),
            ..ToDo::with_id(3, "buy milk")
        };

        let html = render(&View::Details { todo });

        assert!(html.contains("alice"));
        assert!(html.contains("2024-05-01 08:30:00"));
    }

    #[test]
    fn delete_page_asks_for_confirmation() {
        let html = render(&View::Delete {
            todo: ToDo::with_id(4, "buy milk"),
        });

        assert!(html.contains("Are you sure you want to delete this?"));
        assert!(html.contains("action=\"/todo/4/delete\""));
    }

    #[test]
    fn error_page_shows_the_request_id() {
        let html = render(&View::Error {
            request_id: "abc-123".to_string(),
        });

        assert!(html.contains("An error occurred while processing your request."));
        assert!(html.contains("Request ID: <code>abc-123</code>"));
    }

    #[test]
    fn error_page_omits_request_id_line_when_unknown() {
        let html = render(&View::Error {
            request_id: String::new(),
        });

        assert!(html.contains("An error occurred while processing your request."));
        assert!(!html.contains("Request ID:"));
    }
}
