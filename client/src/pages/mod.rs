//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetches and delegates rendering details
//! to `components`.

pub mod application_detail;
pub mod applications;
pub mod apply;
pub mod faq;
pub mod home;
pub mod inventory;
pub mod lodgements;
pub mod login;
pub mod manage_application_detail;
pub mod manage_applications;
pub mod users;
