//! Profile setup page: nickname and optional avatar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable only with a stored session token. An avatar is uploaded before
//! the profile update; an upload failure stops the submission unless the
//! preview fallback is configured.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::ScreenContext;
use crate::components::icon::Icon;
use crate::net::api::{AuthApi, interpret_profile_reply};
use crate::net::types::AuthRequest;
use crate::state::form::{FormError, FormOutcome, HOME_ROUTE};
use crate::state::session::{Profile, Session};
use crate::state::toast::Notice;
use crate::util::auth::install_session_guard;
use crate::util::avatar::{AvatarSelection, resolve_avatar_url};
use crate::util::scope::ScreenScope;
use crate::util::session_store::SessionStore;
use crate::util::validation::{MAX_NICKNAME_LEN, cap_nickname_input, validate_nickname};

/// Input of the profile form.
pub struct ProfileForm<F> {
    pub nickname: String,
    pub avatar: Option<AvatarSelection<F>>,
}

async fn upload_selected<A>(
    api: &A,
    avatar: Option<&AvatarSelection<A::Upload>>,
    preview_fallback: bool,
) -> Result<Option<String>, FormError>
where
    A: AuthApi + ?Sized,
{
    let Some(selection) = avatar else {
        return Ok(None);
    };
    match api.upload_avatar(&selection.file).await {
        Ok(url) => Ok(Some(url)),
        Err(err) if preview_fallback && selection.preview_url.is_some() => {
            log::warn!("avatar upload failed, sending preview instead: {}", err.detail());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn update_profile<A, S>(
    api: &A,
    store: &S,
    preview_fallback: bool,
    form: ProfileForm<A::Upload>,
) -> Result<Notice, FormError>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let session = Session::load(store).ok_or(FormError::SignedOut)?;
    validate_nickname(&form.nickname)?;

    let uploaded = upload_selected(api, form.avatar.as_ref(), preview_fallback).await?;
    let preview = form.avatar.as_ref().and_then(|a| a.preview_url.as_deref());
    let previous = Profile::load(store).avatar_url;
    let avatar_url = resolve_avatar_url(uploaded.as_deref(), preview, previous.as_deref());

    let request = AuthRequest::UpdateProfile { nickname: form.nickname.clone(), avatar_url: avatar_url.clone() };
    let reply = api.send(&request, Some(&session.token)).await?;
    interpret_profile_reply(reply)?;

    Profile { nickname: Some(form.nickname), avatar_url: Some(avatar_url).filter(|u| !u.is_empty()) }.persist(store);
    Ok(Notice::info("Profile updated", "Your profile is all set"))
}

/// Upload the avatar if one was chosen, then post `update_profile` with the
/// stored session token.
pub async fn submit_profile<A, S>(
    api: &A,
    store: &S,
    preview_fallback: bool,
    form: ProfileForm<A::Upload>,
) -> FormOutcome
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
{
    FormOutcome::from_result(update_profile(api, store, preview_fallback, form).await, HOME_ROUTE)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = ScreenContext::expect();
    let scope = ScreenScope::for_owner();
    let navigate = use_navigate();
    install_session_guard(navigate.clone());

    let nickname = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);
    let picked = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let picker = StoredValue::new_local(crate::util::avatar::AvatarPicker::<web_sys::File>::new());

    // Once a file is picked only its own preview is shown.
    let shown_avatar = move || {
        if picked.get() { preview.get() } else { ctx.session().get().profile.avatar_url }
    };

    let file_scope = scope.clone();
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toaster::notify;
            use crate::util::avatar::{read_data_url, selected_file};

            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = selected_file(&input) else {
                return;
            };
            let size = file.size();
            let accepted = picker.try_update_value(|p| p.accept(file.clone(), size));
            let generation = match accepted {
                Some(Ok(generation)) => generation,
                Some(Err(err)) => {
                    notify(ctx.toasts(), FormError::from(err).notice());
                    input.set_value("");
                    return;
                }
                None => return,
            };
            preview.set(None);
            picked.set(true);
            file_scope.spawn(async move {
                match read_data_url(&file).await {
                    Ok(url) => {
                        let applied = picker.try_update_value(|p| p.complete_preview(generation, url.clone()));
                        if applied == Some(true) {
                            preview.set(Some(url));
                        } else {
                            log::debug!("stale avatar preview discarded");
                        }
                    }
                    Err(e) => log::warn!("avatar preview failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &file_scope);
        }
    };

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let nickname_value = nickname.get_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let avatar = picker.with_value(|p| p.selection().cloned());
            let navigate = submit_navigate.clone();
            scope.spawn(async move {
                let api = crate::net::api::HttpAuthApi::new(crate::config::ApiConfig::from_build_env());
                let fallback = api.config().avatar_preview_fallback;
                let form = ProfileForm { nickname: nickname_value, avatar };
                let outcome = submit_profile(&api, &crate::util::session_store::BrowserStore, fallback, form).await;
                busy.set(false);
                ctx.finish(outcome, &navigate);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&scope, &submit_navigate, nickname_value);
        }
    };

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_skip = move |_| navigate(HOME_ROUTE, NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <div class="auth-card__header">
                    <h1>"Set up your profile"</h1>
                    <p class="muted">"Pick an avatar and a nickname"</p>
                </div>
                <form class="form form--profile" on:submit=on_submit>
                    <div class="avatar-picker">
                        <div class="avatar">
                            {move || match shown_avatar() {
                                Some(src) => view! { <img class="avatar__image" src=src alt="Avatar"/> }.into_any(),
                                None => view! { <Icon name="User" class="avatar__fallback"/> }.into_any(),
                            }}
                        </div>
                        <input
                            class="hidden"
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                        <button class="btn btn--outline" type="button" on:click=on_pick>
                            <Icon name="Upload"/>
                            "Upload photo"
                        </button>
                    </div>
                    <div>
                        <input
                            class="input input--center"
                            placeholder="Enter your nickname"
                            required
                            maxlength=MAX_NICKNAME_LEN.to_string()
                            prop:value=move || nickname.get()
                            on:input=move |ev| nickname.set(cap_nickname_input(&event_target_value(&ev)))
                        />
                        <p class="hint">"3 to 20 characters"</p>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save profile" }}
                        <Show when=move || !busy.get()>
                            <Icon name="Check"/>
                        </Show>
                    </button>
                    <button class="btn btn--ghost" type="button" on:click=on_skip>
                        "Skip"
                    </button>
                </form>
            </div>
        </div>
    }
}
