// Domain layer: request/identity models, wire formats and ports. No I/O here.

pub mod completion;
pub mod http;
pub mod model;
pub mod ports;
