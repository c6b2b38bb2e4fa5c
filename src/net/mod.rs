//! Networking modules for the record REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `csrf` resolves the authenticity token the
//! backend expects on every mutation, and `types` defines the wire schema.

pub mod api;
pub mod csrf;
pub mod types;
