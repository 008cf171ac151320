//! Middleware for the CashBook API
//!
//! Request tracing and security headers, applied to the whole router.

mod security;
mod tracing;

pub use security::security_headers;
pub use tracing::request_tracing;
