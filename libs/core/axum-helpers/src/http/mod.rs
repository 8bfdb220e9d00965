//! HTTP middleware: CORS and security headers.

mod cors;
mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
