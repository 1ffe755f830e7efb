//! MCP server module
//!
//! Exposes the calculator tools over the Model Context Protocol.

pub mod server;

pub use server::BrewService;
