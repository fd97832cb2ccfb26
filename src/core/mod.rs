pub mod handler;
pub mod prompt;

pub use crate::domain::ports::{CompletionGateway, ConfigProvider, IdentityEndpoint};
pub use crate::utils::error::Result;
