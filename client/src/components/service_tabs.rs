//! Landing-page tab triggers and the active service panel.

use leptos::prelude::*;

use super::icon::Icon;
use crate::state::services::{SERVICES, ServiceDescriptor, TabState};

#[component]
pub fn ServiceTabs(tabs: RwSignal<TabState>) -> impl IntoView {
    view! {
        <div class="tabs__list" role="tablist">
            {SERVICES
                .iter()
                .map(|service| {
                    let id = service.id;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tabs__trigger"
                            class:tabs__trigger--active=move || tabs.get().is_selected(id)
                            aria-selected=move || tabs.get().is_selected(id).to_string()
                            on:click=move |_| tabs.update(|t| t.select(id))
                        >
                            <Icon name=service.icon/>
                            <span class="tabs__label">{service.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Content card for one service. The message form is local only.
#[component]
pub fn ServicePanel(service: &'static ServiceDescriptor) -> impl IntoView {
    let message = RwSignal::new(String::new());

    view! {
        <section class="card service-panel" role="tabpanel" data-service=service.id.as_str()>
            <div class="service-panel__heading">
                <Icon name=service.icon class="service-panel__icon"/>
                <h2>{service.title}</h2>
            </div>
            <p class="muted">"Follow the video instructions below"</p>
            <div class="service-panel__video">
                <Icon name="Video"/>
                <p class="muted">"Video guide"</p>
            </div>
            <div class="service-panel__form-block">
                <h3>"Paste it here"</h3>
                <form class="form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <textarea
                        class="input input--textarea"
                        placeholder="Your message"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit">
                        "Send"
                        <Icon name="Send"/>
                    </button>
                </form>
            </div>
        </section>
    }
}
