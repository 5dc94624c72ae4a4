//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (icons, toasts, service tabs) while pages
//! own the screen-level flows.

pub mod icon;
pub mod service_tabs;
pub mod toaster;
