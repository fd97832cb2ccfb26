// Adapters layer: concrete implementations for external systems (AI gateway, deployed endpoint).

pub mod gateway;
pub mod remote;

pub use gateway::HttpGateway;
pub use remote::RemoteEndpoint;
