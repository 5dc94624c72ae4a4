//! Landing page: session header plus the four service tabs.

use leptos::prelude::*;
use leptos_router::components::A;

use super::ScreenContext;
use crate::components::service_tabs::{ServicePanel, ServiceTabs};
use crate::components::toaster::notify;
use crate::state::services::TabState;
use crate::state::session::{SessionState, sign_out};
use crate::state::toast::Notice;
use crate::util::session_store::BrowserStore;

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = ScreenContext::expect();
    let session = ctx.session();
    let tabs = RwSignal::new(TabState::default());

    let on_sign_out = move |_| {
        sign_out(&BrowserStore);
        session.set(SessionState::default());
        notify(ctx.toasts(), Notice::info("Signed out", "Your session was cleared"));
    };

    view! {
        <div class="landing">
            <header class="landing__session">
                <Show
                    when=move || session.get().is_signed_in()
                    fallback=|| {
                        view! {
                            <A href="/login">"Sign in"</A>
                            <A href="/register">"Register"</A>
                        }
                    }
                >
                    <span class="landing__identity">
                        {move || session.get().display_name().unwrap_or_default()}
                    </span>
                    <A href="/profile">"Edit profile"</A>
                    <button class="btn btn--ghost" type="button" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </Show>
            </header>

            <div class="landing__hero">
                <h1 class="landing__title">"Roblox Services"</h1>
                <p class="muted">"Free services for your Roblox experience"</p>
            </div>

            <ServiceTabs tabs/>
            {move || view! { <ServicePanel service=tabs.get().active()/> }}
        </div>
    }
}
