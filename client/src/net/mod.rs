//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `upload` runs the presigned-URL document
//! handshake, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
pub mod upload;
