pub mod constants;
mod allow_origins;
mod context;
mod cors;
mod header_builder;
mod header_list;
mod headers;
mod options;

pub use allow_origins::{AllowOrigins, OriginDecision};
#[cfg(feature = "http")]
pub use context::HttpExchange;
pub use context::{CorsContext, Exchange};
pub use cors::Cors;
pub use header_list::HeaderList;
pub use headers::{CorsHeader, Headers, ResponseHeaders, StaticHeaders};
pub use options::{ConfigError, CorsOptions};
