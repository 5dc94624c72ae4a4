//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `services`, `toast`, `form`) so each
//! screen depends only on the small models it renders.

pub mod form;
pub mod services;
pub mod session;
pub mod toast;
