use std::path::PathBuf;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;

/// Produces a bearer token for an authorization scope on behalf of the
/// current user.
///
/// Token lifetime and caching are the provider's concern. `TodoService`
/// acquires a token at the start of every remote call and never stores the
/// result, so each acquisition sees the provider's current state.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn acquire_token(&self, scope: &str) -> Result<String>;
}

/// Provider that hands out one fixed token for every scope.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn acquire_token(&self, _scope: &str) -> Result<String> {
        Ok(self.token.clone())
    }
}

/// Provider backed by a `.token` file under the app data directory.
///
/// The file is re-read on every acquisition, so replacing its contents takes
/// effect on the next remote call.
pub struct FileTokenProvider {
    token_path: PathBuf,
}

impl FileTokenProvider {
    pub fn new(app_data_dir: PathBuf) -> Self {
        Self {
            token_path: app_data_dir.join(".token"),
        }
    }

    fn read_token(token_path: &PathBuf) -> Option<String> {
        if !token_path.exists() {
            return None;
        }
        let token = std::fs::read_to_string(token_path).ok()?;
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[async_trait]
impl TokenProvider for FileTokenProvider {
    async fn acquire_token(&self, scope: &str) -> Result<String> {
        info!("Acquiring bearer token for scope {scope}");
        Self::read_token(&self.token_path)
            .ok_or_else(|| anyhow!("no bearer token at {}", self.token_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn static_provider_returns_its_token() {
        let provider = StaticTokenProvider::new("fixed-token");

        let token = provider.acquire_token("api://todo-api/.default").await;

        assert_eq!(token.unwrap(), "fixed-token");
    }

    #[test]
    fn read_token_trims_whitespace() {
        let dir = tempdir().expect("tempdir");
        let token_path = dir.path().join(".token");
        std::fs::write(&token_path, "  token-value \n").expect("write token");

        let token = FileTokenProvider::read_token(&token_path);
        assert_eq!(token.as_deref(), Some("token-value"));
    }

    #[tokio::test]
    async fn file_provider_fails_when_file_is_missing() {
        let dir = tempdir().expect("tempdir");
        let provider = FileTokenProvider::new(dir.path().to_path_buf());

        assert!(provider.acquire_token("any-scope").await.is_err());
    }

    #[tokio::test]
    async fn file_provider_rejects_blank_token_file() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join(".token"), "   \n").expect("write token");
        let provider = FileTokenProvider::new(dir.path().to_path_buf());

        assert!(provider.acquire_token("any-scope").await.is_err());
    }

    #[tokio::test]
    async fn file_provider_sees_replaced_token_on_next_acquisition() {
        let dir = tempdir().expect("tempdir");
        let token_path = dir.path().join(".token");
        std::fs::write(&token_path, "first-token").expect("write token");
        let provider = FileTokenProvider::new(dir.path().to_path_buf());

        assert_eq!(provider.acquire_token("s").await.unwrap(), "first-token");

        std::fs::write(&token_path, "second-token").expect("rewrite token");
        assert_eq!(provider.acquire_token("s").await.unwrap(), "second-token");
    }
}
