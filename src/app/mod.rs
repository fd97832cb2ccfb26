pub mod form;
pub mod render;
pub mod transcript;

pub use form::{FormController, LocalEndpoint};
pub use render::Showcase;
pub use transcript::Transcript;
