//! # EPO OPS MCP server library
//!
//! Exposes the European Patent Office Open Patent Services REST API as MCP
//! tools. Every tool call goes through one authenticated GET helper, which in
//! turn draws its bearer token from a single-slot OAuth2 token cache.
//!
//! Modules:
//! - `config` — settings file, credentials lookup
//! - `cache` — the access token slot
//! - `sources` — token exchange and authenticated fetch
//! - `tools` — the seven OPS tools
//! - `server` — JSON-RPC over stdio

pub mod config;
pub mod cache;
pub mod error;
pub mod sources;
pub mod tools;
pub mod server;
pub mod helpers;
pub mod utils;
#[cfg(test)]
pub mod tests;


pub use crate::config::settings::ServiceConfig;
pub use crate::error::OpsError;
pub use crate::sources::fetch::OpsClient;
