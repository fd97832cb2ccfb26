pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LambdaConfig, TomlConfig};

pub use adapters::{HttpGateway, RemoteEndpoint};
pub use app::{FormController, LocalEndpoint, Showcase, Transcript};
pub use crate::core::handler::BrandHandler;
pub use domain::http::{HttpRequest, HttpResponse};
pub use domain::model::{BrandIdentity, ErrorResponse, GenerationRequest};
pub use utils::error::{BrandError, Result};
