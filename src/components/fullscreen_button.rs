// src/components/fullscreen_button.rs
use leptos::*;

#[component]
fn MaximizeIcon() -> impl IntoView {
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <polyline points="15 3 21 3 21 9"/>
            <polyline points="9 21 3 21 3 15"/>
            <line x1="21" y1="3" x2="14" y2="10"/>
            <line x1="3" y1="21" x2="10" y2="14"/>
        </svg>
    }
}

#[component]
fn MinimizeIcon() -> impl IntoView {
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <polyline points="4 14 10 14 10 20"/>
            <polyline points="20 10 14 10 14 4"/>
            <line x1="14" y1="10" x2="21" y2="3"/>
            <line x1="3" y1="21" x2="10" y2="14"/>
        </svg>
    }
}

/// Round overlay button that toggles fullscreen for the stage.
/// Purely presentational: the stage owns the hook and the target element.
#[component]
pub fn FullscreenButton(
    /// Tracked fullscreen state; picks which icon shows
    #[prop(into)]
    is_fullscreen: Signal<bool>,
    /// Fired on click
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="text-white hover:text-gray-200 hover:bg-white/10 rounded-full p-2 transition-colors"
            title="Toggle fullscreen"
            on:click=move |_| on_click.call(())
        >
            {move || if is_fullscreen.get() {
                view! { <MinimizeIcon /> }.into_view()
            } else {
                view! { <MaximizeIcon /> }.into_view()
            }}
        </button>
    }
}
