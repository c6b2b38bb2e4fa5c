//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the record modals and page overlays on top of the
//! server-rendered record pages, reading and writing state signals owned by
//! the app shell.

pub mod case_image;
pub mod confirm_dialog;
pub mod image_viewer;
pub mod notice_tray;
pub mod record_modal;
