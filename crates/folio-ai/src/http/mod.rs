//! HTTP completion gateway.
//!
//! Posts `{ "messages": [...] }` as JSON to the configured endpoint and
//! expects `{ "content": "..." }` back.

mod api;
mod client;
mod config;


pub use client::HttpGateway;
pub use config::HttpGatewayConfig;
