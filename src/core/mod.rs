//! Core contracts: tool trait and JSON-RPC wire types, domain-agnostic.

pub mod mcp;
pub mod tool;
