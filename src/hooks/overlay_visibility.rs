// src/hooks/overlay_visibility.rs
use leptos::*;

const OVERLAY_HIDE_DELAY_MS: f64 = 2500.0;

/// Overlay visibility state returned by [`use_overlay_visibility`].
#[derive(Debug, Clone, Copy)]
pub struct OverlayVisibility {
    pub is_visible: ReadSignal<bool>,
    pub set_is_hovering: WriteSignal<bool>,
}

/// Keeps stage overlay controls visible only while the pointer is active.
/// - Starts visible
/// - Hides after a short idle delay (unless the pointer is over the controls)
/// - Reappears on any pointer movement
///
/// Matters most in fullscreen, where a parked cursor and idle controls are
/// both unwelcome.
pub fn use_overlay_visibility() -> OverlayVisibility {
    let (is_visible, set_is_visible) = create_signal(true);
    let (is_hovering, set_is_hovering) = create_signal(false);

    let timeout_fn = leptos_use::use_timeout_fn(
        move |_: ()| {
            // Never hide controls out from under the pointer.
            if !is_hovering.get_untracked() {
                set_is_visible.set(false);
            }
        },
        OVERLAY_HIDE_DELAY_MS,
    );

    // Arm the idle timer immediately.
    (timeout_fn.start)(());

    let _ = leptos_use::use_event_listener(
        leptos_use::use_window(),
        leptos::ev::pointermove,
        move |_| {
            set_is_visible.set(true);
            (timeout_fn.stop)();
            (timeout_fn.start)(());
        },
    );

    OverlayVisibility {
        is_visible,
        set_is_hovering,
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Both tests wait out the idle timer so it fires while the runtime is
    // still alive.

    #[wasm_bindgen_test]
    async fn overlay_hides_after_the_idle_delay() {
        let runtime = create_runtime();
        let overlay = use_overlay_visibility();
        assert!(overlay.is_visible.get_untracked());

        TimeoutFuture::new(OVERLAY_HIDE_DELAY_MS as u32 + 200).await;

        assert!(!overlay.is_visible.get_untracked());
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn hovering_blocks_the_idle_hide() {
        let runtime = create_runtime();
        let overlay = use_overlay_visibility();
        overlay.set_is_hovering.set(true);

        TimeoutFuture::new(OVERLAY_HIDE_DELAY_MS as u32 + 200).await;

        assert!(overlay.is_visible.get_untracked());
        runtime.dispose();
    }
}
