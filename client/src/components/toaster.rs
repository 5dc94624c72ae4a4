//! Toast viewport and the `notify` helper used by every screen.

use leptos::prelude::*;

use crate::state::toast::{Notice, Toast, ToastState, ToastVariant};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;

/// Queue a notice; in the browser it expires after `TOAST_DURATION_MS`.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|state| state.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toasts.try_update(|state| state.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.notice.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <li class=class on:click=move |_| toasts.update(|s| s.dismiss(id))>
                            <p class="toast__title">{toast.notice.title}</p>
                            <p class="toast__description">{toast.notice.description}</p>
                        </li>
                    }
                }
            />
        </ol>
    }
}
