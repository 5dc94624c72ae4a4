//! Shared session guard for routes that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior: no stored token means
//! the user is sent to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::form::LOGIN_ROUTE;
use crate::state::session::Session;
use crate::util::session_store::{BrowserStore, SessionStore};

/// True when `store` holds no usable session token.
pub fn requires_login<S: SessionStore + ?Sized>(store: &S) -> bool {
    Session::load(store).is_none()
}

/// Redirect to `/login` on mount when the browser has no session.
pub fn install_session_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if requires_login(&BrowserStore) {
            log::info!("no session token; redirecting to {LOGIN_ROUTE}");
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}
