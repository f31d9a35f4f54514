use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::error;
use reqwest::{Client, Method, StatusCode};

use todo_core::{Config, ToDo};

use crate::auth::token_provider::TokenProvider;
use crate::error::RemoteCallFailed;
use crate::service_trait::TodoServiceTrait;
use crate::utils::http_utils::execute_request;

/// Pass-through client for the remote todo API.
///
/// Collaborators arrive through the constructor: a configured
/// `reqwest::Client` and a `TokenProvider`. Every operation acquires a fresh
/// bearer token, performs exactly one HTTP attempt and accepts exactly one
/// status, 200 OK. Any other status becomes `RemoteCallFailed`; transport and
/// deserialization failures propagate unchanged.
pub struct TodoService {
    http_client: Client,
    token_provider: Arc<dyn TokenProvider>,
    base_address: String,
    scope: String,
}

impl TodoService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        http_client: Client,
        config: &Config,
    ) -> Self {
        TodoService {
            http_client,
            token_provider,
            base_address: config.base_address.trim_end_matches('/').to_string(),
            scope: config.scope.clone(),
        }
    }

    /// Bearer authorization for one call. Runs at the start of every operation.
    async fn prepare_authorization(&self) -> Result<String> {
        let token = self.token_provider.acquire_token(&self.scope).await?;
        Ok(format!("Bearer {token}"))
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todo", self.base_address)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/todo/{}", self.base_address, id)
    }

    fn ensure_ok(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status != StatusCode::OK {
            error!("Remote todo API answered {} for {}", status, response.url());
            return Err(anyhow!(RemoteCallFailed { status }));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoServiceTrait for TodoService {
    async fn list(&self) -> Result<Vec<ToDo>> {
        let authorization = self.prepare_authorization().await?;
        let response = execute_request::<()>(
            &self.http_client,
            Method::GET,
            self.collection_url(),
            &authorization,
            None,
        )
        .await?;
        Self::ensure_ok(&response)?;
        Ok(response.json::<Vec<ToDo>>().await?)
    }

    async fn get(&self, id: i64) -> Result<Option<ToDo>> {
        let authorization = self.prepare_authorization().await?;
        let response = execute_request::<()>(
            &self.http_client,
            Method::GET,
            self.item_url(id),
            &authorization,
            None,
        )
        .await?;
        Self::ensure_ok(&response)?;

        // 200 with an empty or `null` body means no record behind this id
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<ToDo>>(&body)?)
    }

    async fn add(&self, todo: ToDo) -> Result<ToDo> {
        let authorization = self.prepare_authorization().await?;
        let response = execute_request(
            &self.http_client,
            Method::POST,
            self.collection_url(),
            &authorization,
            Some(&todo),
        )
        .await?;
        Self::ensure_ok(&response)?;
        Ok(response.json::<ToDo>().await?)
    }

    async fn edit(&self, todo: ToDo) -> Result<ToDo> {
        let authorization = self.prepare_authorization().await?;
        let response = execute_request(
            &self.http_client,
            Method::PUT,
            self.item_url(todo.id),
            &authorization,
            Some(&todo),
        )
        .await?;
        Self::ensure_ok(&response)?;
        Ok(response.json::<ToDo>().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let authorization = self.prepare_authorization().await?;
        let response = execute_request::<()>(
            &self.http_client,
            Method::DELETE,
            self.item_url(id),
            &authorization,
            None,
        )
        .await?;
        Self::ensure_ok(&response)?;
        Ok(())
    }
}
