pub mod security_config;
pub mod security_headers;

pub use security_config::SecurityHeadersConfig;
pub use security_headers::security_headers_middleware;
