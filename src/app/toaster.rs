use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Toast, ToastKind};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Handle to the notification stack, provided as context by [`Toaster`].
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<(u64, Toast)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|v| v.push((id, toast)));

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|v| v.retain(|(i, _)| *i != id));
    }
}

/// Top-right toast stack. Everything rendered inside can reach it through
/// `expect_context::<Toasts>()`.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        {children()}
        <ol class="fixed top-4 right-4 z-[100] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|(id, _)| *id
                children=move |(id, toast)| {
                    let accent = match toast.kind {
                        ToastKind::Success => "border-[#4ADE80] text-[#4ADE80]",
                        ToastKind::Error => "border-red-500 text-red-400",
                    };
                    view! {
                        <li
                            class=format!("bg-[#101010] border-l-4 rounded-md p-4 shadow-lg {accent}")
                            role="status"
                        >
                            <div class="flex justify-between items-start gap-2">
                                <p class="font-semibold">{toast.title}</p>
                                <button
                                    class="text-gray-500 hover:text-white"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                            <p class="text-sm text-gray-300 mt-1">{toast.description}</p>
                        </li>
                    }
                }
            />
        </ol>
    }
}
