pub mod headers;
pub mod logger;
pub mod traits;

pub use headers::{HeadersConfig, HeadersMiddleware};
pub use logger::{RequestLogger, REQUEST_ID_KEY};
pub use traits::Middleware;
