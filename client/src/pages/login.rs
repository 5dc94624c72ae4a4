//! Login page: email + password against the auth API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::{ScreenContext, open_session};
use crate::components::icon::Icon;
use crate::net::api::AuthApi;
use crate::net::types::AuthRequest;
use crate::state::form::{FormError, FormOutcome, HOME_ROUTE};
use crate::state::toast::Notice;
use crate::util::scope::ScreenScope;
use crate::util::session_store::SessionStore;
use crate::util::validation::validate_login;

async fn login<A, S>(api: &A, store: &S, email: &str, password: &str) -> Result<Notice, FormError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let creds = validate_login(email, password)?;
    let request = AuthRequest::Login { email: creds.email, password: creds.password };
    let session = open_session(api, store, request).await?;
    Ok(Notice::info("Signed in", format!("Welcome, {}", session.email)))
}

/// Validate, call the API, persist the session. Redirects home on success.
pub async fn submit_login<A, S>(api: &A, store: &S, email: &str, password: &str) -> FormOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    FormOutcome::from_result(login(api, store, email, password).await, HOME_ROUTE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = ScreenContext::expect();
    let scope = ScreenScope::for_owner();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            scope.spawn(async move {
                let api = crate::net::api::HttpAuthApi::new(crate::config::ApiConfig::from_build_env());
                let outcome =
                    submit_login(&api, &crate::util::session_store::BrowserStore, &email_value, &password_value).await;
                busy.set(false);
                ctx.finish(outcome, &navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&scope, &navigate, ctx, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-card__header">
                    <Icon name="LogIn" class="auth-card__badge"/>
                    <h1>"Sign in"</h1>
                    <p class="muted">"Sign in to your account"</p>
                </div>
                <form class="form" on:submit=on_submit>
                    <input
                        class="input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                        <Show when=move || !busy.get()>
                            <Icon name="ArrowRight"/>
                        </Show>
                    </button>
                </form>
                <p class="auth-card__footer muted">
                    "No account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
