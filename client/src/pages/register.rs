//! Registration page: email + password with confirmation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

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
use crate::util::validation::validate_registration;

/// Input of the registration form as typed.
#[derive(Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

async fn register<A, S>(api: &A, store: &S, form: &RegistrationForm) -> Result<Notice, FormError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let creds = validate_registration(&form.email, &form.password, &form.confirm_password)?;
    let request = AuthRequest::Register { email: creds.email, password: creds.password };
    open_session(api, store, request).await?;
    Ok(Notice::info("Registration complete", "Welcome!"))
}

/// Local checks run before any request; on success the session is stored
/// and the user is sent home.
pub async fn submit_registration<A, S>(api: &A, store: &S, form: &RegistrationForm) -> FormOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    FormOutcome::from_result(register(api, store, form).await, HOME_ROUTE)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = ScreenContext::expect();
    let scope = ScreenScope::for_owner();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegistrationForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            scope.spawn(async move {
                let api = crate::net::api::HttpAuthApi::new(crate::config::ApiConfig::from_build_env());
                let outcome = submit_registration(&api, &crate::util::session_store::BrowserStore, &form).await;
                busy.set(false);
                ctx.finish(outcome, &navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&scope, &navigate, ctx, form);
        }
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-card__header">
                    <Icon name="UserPlus" class="auth-card__badge auth-card__badge--secondary"/>
                    <h1>"Register"</h1>
                    <p class="muted">"Create a new account"</p>
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
                        placeholder="Password (at least 6 characters)"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Repeat password"
                        required
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--secondary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                        <Show when=move || !busy.get()>
                            <Icon name="ArrowRight"/>
                        </Show>
                    </button>
                </form>
                <p class="auth-card__footer muted">
                    "Already have an account? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
