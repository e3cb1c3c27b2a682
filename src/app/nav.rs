use leptos::{either::Either, prelude::*};

use crate::portfolio::Section;

#[component]
pub fn SideNav(active: ReadSignal<Section>, on_select: Callback<Section>) -> impl IntoView {
    view! {
        <aside class="fixed left-8 top-0 bottom-0 z-50 items-center pointer-events-none hidden md:flex">
            <nav class="flex flex-col items-start space-y-8 pointer-events-auto">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let is_active = move || active.get() == section;
                        view! {
                            <a
                                href=format!("#{}", section.id())
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    on_select.run(section);
                                }
                                class="text-sm uppercase font-medium tracking-wider cursor-pointer transition-colors duration-300 px-4 py-1 relative"
                                class=("text-[#4ADE80]", is_active)
                                class=("text-gray-400", move || !is_active())
                                class=("hover:text-white", move || !is_active())
                            >
                                {move || {
                                    if is_active() {
                                        Either::Left(
                                            view! {
                                                <span class="absolute left-0 top-1/2 -translate-y-1/2 w-2 h-2 bg-[#4ADE80] rounded-full"></span>
                                            },
                                        )
                                    } else {
                                        Either::Right(())
                                    }
                                }}
                                {section.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Burger menu for narrow screens; picking an entry also closes it.
#[component]
pub fn MobileNav(active: ReadSignal<Section>, on_select: Callback<Section>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="md:hidden fixed top-0 left-0 w-full z-50 bg-[#030303]/90 backdrop-blur-sm border-b border-[#222222]/30">
            <div class="flex justify-between items-center p-4">
                <button
                    class="text-white p-2"
                    aria-label="Toggle navigation"
                    aria-expanded=move || open.get().to_string()
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                        class="w-6 h-6"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        />
                    </svg>
                </button>
            </div>
            <div class:hidden=move || !open.get()>
                <nav class="py-4 px-6 bg-[#0a0a0a] border-b border-[#222222]">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || active.get() == section;
                            view! {
                                <a
                                    href=format!("#{}", section.id())
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        on_select.run(section);
                                        set_open(false);
                                    }
                                    class="block py-3 text-sm uppercase font-medium tracking-wider cursor-pointer transition-colors duration-300"
                                    class=("text-[#4ADE80]", is_active)
                                    class=("text-gray-400", move || !is_active())
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </div>
    }
}
