//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and browse building blocks while
//! reading/writing shared state from Leptos context providers.

pub mod lodgement_card;
pub mod nav_header;
pub mod page_status;
pub mod require_access;
pub mod tag_filter;
pub mod toast;
