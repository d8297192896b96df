//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes mocklint checks to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and tool handlers
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{MocklintMcpServer, run_server};
