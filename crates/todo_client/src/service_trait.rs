use anyhow::Result;
use async_trait::async_trait;

use todo_core::ToDo;

/// Contract for the remote todo API, one method per endpoint.
#[async_trait]
pub trait TodoServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<ToDo>>;

    /// Fetch a single todo. `None` when no record exists for the id.
    async fn get(&self, id: i64) -> Result<Option<ToDo>>;

    async fn add(&self, todo: ToDo) -> Result<ToDo>;

    async fn edit(&self, todo: ToDo) -> Result<ToDo>;

    async fn delete(&self, id: i64) -> Result<()>;
}
