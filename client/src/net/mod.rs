//! Networking modules for the remote auth/profile API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls behind the `AuthApi` seam, `types` defines
//! the wire schema and `error` the request failure taxonomy.

pub mod api;
pub mod error;
#[cfg(test)]
pub(crate) mod fake_api;
pub mod types;
