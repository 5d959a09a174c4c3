//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and pure form/table rules from page
//! and component rendering to improve reuse and testability.

pub mod auth;
pub mod format;
pub mod inventory;
pub mod scoring;
pub mod session;
pub mod tags;
pub mod users_table;
