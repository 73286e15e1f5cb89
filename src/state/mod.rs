//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notices`, `articles`) so individual
//! components can depend on small focused models. All of it is plain data;
//! the reactive wrappers live with the code that provides them.

pub mod articles;
pub mod notices;
pub mod session;
