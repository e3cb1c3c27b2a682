use leptos::{
    either::Either,
    ev::{self, MouseEvent, TouchEvent, WheelEvent},
    html,
    prelude::*,
};
use leptos_use::{
    use_document, use_event_listener, use_event_listener_with_options, use_raf_fn_with_options,
    UseEventListenerOptions, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::viewer::{FullscreenAction, Offset, ViewerState, BUTTON_STEP};

fn single_touch(ev: &TouchEvent) -> Option<Offset> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    let t = touches.get(0)?;
    Some(Offset::new(t.client_x() as f64, t.client_y() as f64))
}

fn pointer(ev: &MouseEvent) -> Offset {
    Offset::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Calls `requestFullscreen`/`exitFullscreen` on `target` and waits for the
/// returned promise, which is where permission denials are reported.
#[cfg(feature = "hydrate")]
async fn call_fullscreen(
    target: wasm_bindgen::JsValue,
    action: FullscreenAction,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let method = js_sys::Reflect::get(&target, &JsValue::from_str(action.method()))?
        .dyn_into::<js_sys::Function>()?;
    let ret = method.call0(&target)?;
    if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
        wasm_bindgen_futures::JsFuture::from(promise).await?;
    }
    Ok(())
}

/// Modal viewer for a single image. Open while `image` is `Some`.
#[component]
pub fn ImageViewer(image: Signal<Option<&'static str>>, on_close: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(ViewerState::new());
    let container = NodeRef::<html::Div>::new();

    // new image, open, or close: start from scratch
    Effect::watch(
        move || image.get(),
        move |_, _, _| state.update(ViewerState::reset),
        false,
    );

    // track the document rather than our own toggle so Esc exits are seen
    let _ = use_event_listener(
        use_document(),
        ev::Custom::<ev::Event>::new("fullscreenchange"),
        move |_| {
            let fullscreen = document().fullscreen_element().is_some();
            state.update(|s| s.set_fullscreen(fullscreen));
        },
    );

    // registered directly with passive: false so the page does not scroll
    let _ = use_event_listener_with_options(
        container,
        ev::wheel,
        move |ev: WheelEvent| {
            ev.prevent_default();
            state.update(|s| s.wheel(ev.delta_y()));
        },
        UseEventListenerOptions::default().passive(false),
    );

    let easing = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            state.update(|s| {
                s.tick(args.delta);
            });
        },
        UseRafFnOptions::default().immediate(false),
    );
    Effect::new({
        let pause = easing.pause.clone();
        let resume = easing.resume.clone();
        move |_| {
            let needs_frames =
                image.get().is_some() && state.with(|s| !s.is_dragging() && !s.is_settled());
            if needs_frames {
                resume();
            } else {
                pause();
            }
        }
    });

    let toggle_fullscreen = move |_| {
        let action = FullscreenAction::toggling(document().fullscreen_element().is_some());
        #[cfg(feature = "hydrate")]
        {
            let target = match action {
                FullscreenAction::Enter => match container.get_untracked() {
                    Some(el) => wasm_bindgen::JsValue::from(el),
                    None => return,
                },
                FullscreenAction::Exit => wasm_bindgen::JsValue::from(document()),
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = call_fullscreen(target, action).await {
                    log::warn!("{}: {e:?}", action.failure());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        log::debug!("{action:?} fullscreen ignored outside the browser");
    };

    let end_drag = move || {
        if state.with_untracked(ViewerState::is_dragging) {
            state.update(ViewerState::end_drag);
        }
    };

    view! {
        <Show when=move || image.get().is_some()>
            <div class="fixed inset-0 z-[60] bg-black/80" on:click=move |_| on_close.run(())></div>
            <div
                role="dialog"
                aria-modal="true"
                class="fixed left-1/2 top-1/2 z-[70] -translate-x-1/2 -translate-y-1/2 w-[95vw] h-[95vh] bg-[#0d0d0d] border border-gray-800 rounded-lg overflow-hidden"
            >
                <button
                    class="absolute right-4 top-4 z-20 text-gray-400 hover:text-white text-2xl"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                <div
                    node_ref=container
                    class="w-full h-full flex items-center justify-center bg-[#0d0d0d] image-viewer-container"
                    style=move || {
                        format!(
                            "cursor: {}; user-select: none; touch-action: none;",
                            state.with(ViewerState::cursor),
                        )
                    }
                    on:mousedown=move |ev: MouseEvent| {
                        if state.try_update(|s| s.begin_drag(pointer(&ev))).unwrap_or(false) {
                            ev.prevent_default();
                        }
                    }
                    on:mousemove=move |ev: MouseEvent| {
                        if state.with_untracked(ViewerState::is_dragging) {
                            ev.prevent_default();
                            state.update(|s| {
                                s.drag_to(pointer(&ev));
                            });
                        }
                    }
                    on:mouseup=move |_| end_drag()
                    on:mouseleave=move |_| end_drag()
                    on:touchstart=move |ev: TouchEvent| {
                        let Some(p) = single_touch(&ev) else {
                            return;
                        };
                        if state.try_update(|s| s.begin_drag(p)).unwrap_or(false) {
                            ev.prevent_default();
                        }
                    }
                    on:touchmove=move |ev: TouchEvent| {
                        if !state.with_untracked(ViewerState::is_dragging) {
                            return;
                        }
                        if let Some(p) = single_touch(&ev) {
                            ev.prevent_default();
                            state.update(|s| {
                                s.drag_to(p);
                            });
                        }
                    }
                    on:touchend=move |_| end_drag()
                >
                    <div
                        on:dblclick=move |_| state.update(ViewerState::reset_zoom)
                        style=move || {
                            state
                                .with(|s| {
                                    format!(
                                        "transform: {}; transition: {}; transform-origin: center; max-width: {}; max-height: {}; will-change: transform;",
                                        s.transform_css(),
                                        if s.is_dragging() { "none" } else { "transform 0.1s ease-out" },
                                        s.max_width(),
                                        s.max_height(),
                                    )
                                })
                        }
                    >
                        <img
                            src=move || image.get().unwrap_or_default()
                            alt="Project screenshot"
                            class="object-contain max-w-full max-h-[80vh] block pointer-events-none"
                            draggable="false"
                        />
                    </div>
                </div>
                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex items-center gap-2 bg-[#1a1a1a] p-2 rounded-lg z-20">
                    <ControlButton
                        label="Zoom out"
                        disabled=Signal::derive(move || !state.with(ViewerState::can_zoom_out))
                        on_click=Callback::new(move |_| state.update(|s| s.zoom_out(BUTTON_STEP)))
                    >
                        "−"
                    </ControlButton>
                    <div class="text-gray-300 text-sm min-w-12 text-center">
                        {move || format!("{}%", state.with(ViewerState::zoom_percent))}
                    </div>
                    <ControlButton
                        label="Zoom in"
                        disabled=Signal::derive(move || !state.with(ViewerState::can_zoom_in))
                        on_click=Callback::new(move |_| state.update(|s| s.zoom_in(BUTTON_STEP)))
                    >
                        "+"
                    </ControlButton>
                    <div class="w-px h-4 bg-gray-700 mx-2"></div>
                    <ControlButton
                        label="Rotate"
                        on_click=Callback::new(move |_| state.update(ViewerState::rotate))
                    >
                        "⟳"
                    </ControlButton>
                    <div class="w-px h-4 bg-gray-700 mx-2"></div>
                    <ControlButton label="Toggle fullscreen" on_click=Callback::new(toggle_fullscreen)>
                        {move || {
                            if state.with(ViewerState::is_fullscreen) {
                                Either::Left("⤡")
                            } else {
                                Either::Right("⤢")
                            }
                        }}
                    </ControlButton>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ControlButton(
    label: &'static str,
    on_click: Callback<()>,
    #[prop(into, optional)] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class="text-gray-400 hover:text-white disabled:opacity-40 h-8 w-8 flex items-center justify-center rounded-md"
            aria-label=label
            title=label
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
