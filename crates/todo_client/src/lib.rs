pub mod api;
pub mod auth;
pub mod error;
pub mod service_trait;
pub mod utils;

pub use api::service::TodoService;
pub use auth::token_provider::{FileTokenProvider, StaticTokenProvider, TokenProvider};
pub use error::RemoteCallFailed;
pub use service_trait::TodoServiceTrait;
pub use todo_core::Config;
