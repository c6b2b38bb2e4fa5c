//! Client-side state for the record pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data and pure transitions. Components keep these
//! values in Leptos signals and perform the network or DOM side effects;
//! tests drive the same transitions with fake backends and widgets.

pub mod crop;
pub mod editor;
pub mod form;
pub mod modal;
pub mod notice;
pub mod records;
