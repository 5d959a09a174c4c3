//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, per-page `loadable` fetches) so
//! components depend on small focused models.

pub mod auth;
pub mod loadable;
pub mod ui;
