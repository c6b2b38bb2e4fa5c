//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic so the latter stays testable off the browser.

pub mod browser;
pub mod cropper;
