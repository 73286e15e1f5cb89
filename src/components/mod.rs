//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from context (`SessionContext`, `Gateway`)
//! and take per-instance data as props. Pages compose them.

pub mod article_form;
pub mod confirm_dialog;
pub mod layout;
pub mod loader;
pub mod password_input;
pub mod session_gate;
pub mod toaster;
