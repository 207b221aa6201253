// Middleware module - contains CORS, rate limiting and tracing setup

pub mod cors;
pub mod observability;
pub mod rate_limit;

pub use cors::create_cors_layer;
pub use rate_limit::{create_rate_limiter, rate_limit_middleware};
