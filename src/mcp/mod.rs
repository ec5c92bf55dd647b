//! MCP server module.
//!
//! Registers the price lookup as a callable tool for MCP clients.

pub mod server;

pub use server::CryptoPriceServer;
