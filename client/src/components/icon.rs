//! Named icons rendered as text glyphs.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

/// Glyph for an icon name; unknown names render a neutral dot.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "Mic" => "🎙",
        "Copy" => "⧉",
        "Users" => "👥",
        "UserPlus" => "➕",
        "User" => "👤",
        "LogIn" => "↪",
        "ArrowRight" => "→",
        "Video" => "▶",
        "Send" => "➤",
        "Upload" => "⇪",
        "Check" => "✓",
        _ => "•",
    }
}

#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("icon {class}") data-icon=name aria-hidden="true">
            {glyph(name)}
        </span>
    }
}
