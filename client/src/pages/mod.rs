//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submit flows are plain async functions over `AuthApi` and
//! `SessionStore`, so the component only wires signals to them.

pub mod index;
pub mod login;
pub mod profile;
pub mod register;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toaster::notify;
use crate::net::api::{AuthApi, interpret_session_reply};
use crate::net::types::AuthRequest;
use crate::state::form::{FormError, FormOutcome};
use crate::state::session::{Session, SessionState};
use crate::state::toast::ToastState;
use crate::util::session_store::{BrowserStore, SessionStore};

/// Send a login/register request and persist the issued session.
pub(crate) async fn open_session<A, S>(api: &A, store: &S, request: AuthRequest) -> Result<Session, FormError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let action = request.action();
    let reply = api.send(&request, None).await?;
    let session = interpret_session_reply(action, reply)?;
    session.persist(store);
    log::info!("{} succeeded for {}", action.as_str(), session.email);
    Ok(session)
}

/// Shared signals every screen reports into.
#[derive(Clone, Copy)]
pub(crate) struct ScreenContext {
    toasts: RwSignal<ToastState>,
    session: RwSignal<SessionState>,
}

impl ScreenContext {
    pub(crate) fn expect() -> Self {
        Self { toasts: expect_context::<RwSignal<ToastState>>(), session: expect_context::<RwSignal<SessionState>>() }
    }

    pub(crate) fn toasts(self) -> RwSignal<ToastState> {
        self.toasts
    }

    pub(crate) fn session(self) -> RwSignal<SessionState> {
        self.session
    }

    /// Show the outcome's notice, refresh session state and follow the
    /// redirect, if any.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    pub(crate) fn finish<N>(self, outcome: FormOutcome, navigate: &N)
    where
        N: Fn(&str, NavigateOptions),
    {
        notify(self.toasts, outcome.notice);
        self.session.set(SessionState::load(&BrowserStore));
        if let Some(route) = outcome.redirect {
            navigate(route, NavigateOptions::default());
        }
    }
}
