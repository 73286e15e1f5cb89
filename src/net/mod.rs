//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single HTTP chokepoint and error normalizer, `api` maps
//! endpoints onto it, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;
