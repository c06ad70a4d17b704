// src/hooks/fullscreen.rs
//!
//! Fullscreen control for a single stage element.
//!
//! Browsers ship the Fullscreen API under four spellings (standard, webkit,
//! moz, ms). This hook probes for the first available spelling at call time,
//! drives it, and keeps one boolean signal aligned with what the document
//! reports, including exits this code never initiated (Escape key, browser
//! chrome, another component).

use leptos::html::Div;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Document;

/// Element methods that request fullscreen, in probe order.
const REQUEST_FULLSCREEN_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

/// Document methods that exit fullscreen, in probe order.
const EXIT_FULLSCREEN_METHODS: [&str; 4] = [
    "exitFullscreen",
    "webkitExitFullscreen",
    "mozCancelFullScreen",
    "msExitFullscreen",
];

/// Document properties holding the current fullscreen element, in probe order.
const FULLSCREEN_ELEMENT_PROPS: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

/// Document events fired when fullscreen state changes, one per vendor.
const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Reactive fullscreen state and the operations that drive it.
/// Returned by [`use_fullscreen`].
#[derive(Clone, Copy)]
pub struct UseFullscreen {
    /// Whether the document currently has a fullscreen element.
    pub is_fullscreen: ReadSignal<bool>,
    /// Request fullscreen for the tracked element. No-op if the ref is empty.
    pub enter: Callback<()>,
    /// Leave fullscreen. Document-wide: fullscreen exit is global by design.
    pub exit: Callback<()>,
    /// Dispatch to `exit` when currently fullscreen, `enter` otherwise.
    pub toggle: Callback<()>,
}

/// First capability among `names` that `target` exposes as a callable method.
///
/// Probed fresh on every call rather than cached: the element behind the ref
/// can change between invocations.
fn resolve_first_method(target: &JsValue, names: &[&str]) -> Option<js_sys::Function> {
    names.iter().find_map(|name| {
        js_sys::Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    })
}

/// True if any of `names` holds a non-null value on `target`.
fn any_property_present(target: &JsValue, names: &[&str]) -> bool {
    names.iter().any(|name| {
        js_sys::Reflect::get(target, &JsValue::from_str(name))
            .map(|value| !value.is_null() && !value.is_undefined())
            .unwrap_or(false)
    })
}

/// Whether the document reports a fullscreen element under any vendor spelling.
fn fullscreen_element_present(document: &Document) -> bool {
    any_property_present(document.as_ref(), &FULLSCREEN_ELEMENT_PROPS)
}

/// Invoke a resolved fullscreen method on `this` and wait for it to settle.
///
/// Modern implementations return a promise; older prefixed ones return
/// undefined. `Promise::resolve` folds both into one awaitable, so rejection
/// and legacy synchronous completion share the same code path.
async fn call_fullscreen_method(
    this: &JsValue,
    method: js_sys::Function,
) -> Result<(), JsValue> {
    let returned = method.call0(this)?;
    JsFuture::from(js_sys::Promise::resolve(&returned)).await?;
    Ok(())
}

/// Track and control fullscreen state for the element behind `target`.
///
/// The signal starts from the document's actual state (something may already
/// be fullscreen when this runs) and is re-derived from the document on every
/// change notification, so state changes made by the platform or the user are
/// picked up without any call through this hook. `enter`/`exit` set the
/// signal optimistically when their platform call resolves; the notification
/// handler recomputes the same value independently.
///
/// Platform rejections (no user gesture, permission denied) are logged and
/// swallowed; the signal keeps its last-known value until the next change
/// notification. Overlapping `enter`/`exit` calls are not serialized:
/// whichever continuation settles last wins, matching platform behavior.
pub fn use_fullscreen(target: NodeRef<Div>) -> UseFullscreen {
    let initially_fullscreen = web_sys::window()
        .and_then(|w| w.document())
        .map(|doc| fullscreen_element_present(&doc))
        .unwrap_or(false);
    let (is_fullscreen, set_is_fullscreen) = create_signal(initially_fullscreen);

    let enter = Callback::new(move |_: ()| {
        let Some(stage) = target.get_untracked() else {
            return;
        };
        let element = stage.unchecked_ref::<web_sys::HtmlElement>().clone();
        let Some(method) = resolve_first_method(element.as_ref(), &REQUEST_FULLSCREEN_METHODS)
        else {
            return;
        };
        spawn_local(async move {
            match call_fullscreen_method(element.as_ref(), method).await {
                Ok(()) => set_is_fullscreen.set(true),
                Err(err) => log::error!("Failed to enter fullscreen: {:?}", err),
            }
        });
    });

    let exit = Callback::new(move |_: ()| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(method) = resolve_first_method(document.as_ref(), &EXIT_FULLSCREEN_METHODS)
        else {
            return;
        };
        spawn_local(async move {
            match call_fullscreen_method(document.as_ref(), method).await {
                Ok(()) => set_is_fullscreen.set(false),
                Err(err) => log::error!("Failed to exit fullscreen: {:?}", err),
            }
        });
    });

    let toggle = Callback::new(move |_: ()| {
        if is_fullscreen.get_untracked() {
            exit.call(());
        } else {
            enter.call(());
        }
    });

    // One handler registered under all four event names, held (not forgotten)
    // so teardown can remove exactly what was added.
    let handler_storage = store_value::<Option<Closure<dyn FnMut(web_sys::Event)>>>(None);

    create_effect(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Capture state that predates the subscription.
        set_is_fullscreen.set(fullscreen_element_present(&document));

        let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                set_is_fullscreen.set(fullscreen_element_present(&doc));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        for event in FULLSCREEN_CHANGE_EVENTS {
            let _ = document
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }

        handler_storage.set_value(Some(handler));

        on_cleanup(move || {
            handler_storage.with_value(|stored| {
                let Some(handler) = stored else {
                    return;
                };
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    for event in FULLSCREEN_CHANGE_EVENTS {
                        let _ = doc.remove_event_listener_with_callback(
                            event,
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                }
            });
            handler_storage.set_value(None);
        });
    });

    UseFullscreen {
        is_fullscreen,
        enter,
        exit,
        toggle,
    }
}
