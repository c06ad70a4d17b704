use crate::components::FullscreenButton;
use crate::hooks::{use_fullscreen, use_overlay_visibility};
use leptos::html::Div;
use leptos::*;

/// Demo stage: a full-viewport panel that can be sent fullscreen from the
/// overlay controls, with live state text driven by the hook's signal.
#[component]
pub fn App() -> impl IntoView {
    let stage_ref = create_node_ref::<Div>();
    let fullscreen = use_fullscreen(stage_ref);
    let overlay = use_overlay_visibility();

    let state_label = move || {
        if fullscreen.is_fullscreen.get() {
            "Fullscreen (Esc or the button leaves)"
        } else {
            "Windowed"
        }
    };

    let opacity_class = move || {
        if overlay.is_visible.get() {
            "opacity-100"
        } else {
            "opacity-0"
        }
    };

    view! {
        <div
            node_ref=stage_ref
            class="relative w-screen h-screen overflow-hidden bg-black text-white"
        >
            <div class="h-full flex flex-col items-center justify-center gap-2">
                <h1 class="text-2xl font-semibold">"Stage"</h1>
                <p class="text-sm text-gray-400">{state_label}</p>
            </div>
            <div
                class=move || format!(
                    "absolute inset-x-0 bottom-0 flex justify-end bg-black/50 backdrop-blur-sm px-4 py-3 transition-opacity duration-300 {}",
                    opacity_class()
                )
                on:mouseenter=move |_| overlay.set_is_hovering.set(true)
                on:mouseleave=move |_| overlay.set_is_hovering.set(false)
            >
                <FullscreenButton
                    is_fullscreen=fullscreen.is_fullscreen
                    on_click=fullscreen.toggle
                />
            </div>
        </div>
    }
}
