//! Product catalog MCP server: a fixed, in-memory product catalog exposed to
//! agent callers as two tools, `getProducts` and `getProduct`.

pub mod api;
pub mod cli;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
