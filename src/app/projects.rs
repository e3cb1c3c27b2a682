use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::image_viewer::ImageViewer;
use super::SectionHeader;
use crate::portfolio::{find_project, Project, Section, PROJECTS};

#[component]
pub fn ProjectsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let selected = RwSignal::new(None::<u32>);
    let viewer_image = RwSignal::new(None::<&'static str>);

    // Esc closes the top-most overlay only
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if viewer_image.get_untracked().is_some() {
            viewer_image.set(None);
        } else if selected.get_untracked().is_some() {
            selected.set(None);
        }
    });

    view! {
        <section node_ref=node_ref id=Section::Projects.id() class="min-h-screen py-16 bg-[#050505]">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader number="03" tag="//PORTFOLIO" title="LATEST PORTFOLIO" />
                <p class="text-gray-400 max-w-lg mb-16">
                    "My creative spirit comes alive in the digital realm. With nimble fingers flying across the device."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project
                                    on_open=Callback::new(move |_| selected.set(Some(project.id)))
                                />
                            }
                        })
                        .collect_view()}
                </div>
                <ProjectDrawer
                    project=Signal::derive(move || selected.get().and_then(find_project))
                    on_close=Callback::new(move |_| selected.set(None))
                    on_open_image=Callback::new(move |img| viewer_image.set(Some(img)))
                />
                <ImageViewer
                    image=viewer_image.into()
                    on_close=Callback::new(move |_| viewer_image.set(None))
                />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: Callback<()>) -> impl IntoView {
    view! {
        <div class="group relative cursor-pointer" on:click=move |_| on_open.run(())>
            <div class="relative overflow-hidden rounded-md bg-[#121212]">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-[300px] object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4 text-[#4ADE80] text-lg font-bold">"+"</div>
                <div class="absolute bottom-4 right-4 text-[#4ADE80] text-lg font-bold">"+"</div>
            </div>
            <div class="mt-4 flex justify-between items-end">
                <div>
                    <div class="text-sm text-gray-500">{project.year}</div>
                    <h3 class="text-xl font-bold text-white">{project.title}</h3>
                    <div class="text-gray-500 uppercase text-xs tracking-wider">
                        {project.tech_preview()}
                    </div>
                </div>
                <button class="text-white text-2xl" aria-label="Open project details">
                    "→"
                </button>
            </div>
        </div>
    }
}

/// Right-hand sheet with the selected project's details.
#[component]
fn ProjectDrawer(
    project: Signal<Option<&'static Project>>,
    on_close: Callback<()>,
    on_open_image: Callback<&'static str>,
) -> impl IntoView {
    let (slide, set_slide) = signal(0usize);
    Effect::watch(
        move || project.get().map(|p| p.id),
        move |_, _, _| set_slide(0),
        false,
    );

    view! {
        {move || {
            project
                .get()
                .map(|p| {
                    let count = p.images.len();
                    view! {
                        <div class="fixed inset-0 z-40 bg-black/70" on:click=move |_| on_close.run(())></div>
                        <aside
                            role="dialog"
                            aria-modal="true"
                            aria-label=p.title
                            class="fixed right-0 top-0 z-50 h-screen w-full sm:max-w-md md:max-w-lg lg:max-w-xl bg-[#121212] text-white border-l border-gray-800 overflow-y-auto p-6"
                        >
                            <button
                                class="absolute right-4 top-4 text-gray-400 hover:text-white text-xl"
                                aria-label="Close"
                                on:click=move |_| on_close.run(())
                            >
                                "✕"
                            </button>
                            <div class="mb-4">
                                <div class="text-sm text-gray-500 mb-1">{p.year}</div>
                                <h2 class="text-3xl font-bold text-white mb-2">{p.title}</h2>
                                <p class="text-gray-400 mb-6">{p.description}</p>
                            </div>
                            <div class="relative mb-8">
                                {move || {
                                    let i = slide.get();
                                    p.slide(i).map(|img| view! {
                                        <div class="p-1">
                                            <img
                                                src=img
                                                alt=format!("{} screenshot {}", p.title, i + 1)
                                                class="w-full h-60 object-cover rounded-md cursor-pointer"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_open_image.run(img);
                                                }
                                            />
                                        </div>
                                    })
                                }}
                                <Show when=move || { count > 1 }>
                                    <button
                                        class="absolute left-2 top-1/2 -translate-y-1/2 bg-[#1a1a1a] hover:bg-[#2a2a2a] border border-gray-700 rounded-full h-8 w-8"
                                        aria-label="Previous image"
                                        on:click=move |_| set_slide.update(|s| *s = (*s + count - 1) % count)
                                    >
                                        "‹"
                                    </button>
                                    <button
                                        class="absolute right-2 top-1/2 -translate-y-1/2 bg-[#1a1a1a] hover:bg-[#2a2a2a] border border-gray-700 rounded-full h-8 w-8"
                                        aria-label="Next image"
                                        on:click=move |_| set_slide.update(|s| *s = (*s + 1) % count)
                                    >
                                        "›"
                                    </button>
                                </Show>
                            </div>
                            <div class="space-y-8 mb-8">
                                <div>
                                    <h4 class="text-lg font-semibold text-white mb-2">"Technologies"</h4>
                                    <div class="flex flex-wrap gap-2">
                                        {p
                                            .tech
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="rounded-md border border-gray-700 bg-[#1a1a1a] px-2.5 py-0.5 text-xs text-gray-300">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div>
                                    <h4 class="text-lg font-semibold text-white mb-2">
                                        "About the Project"
                                    </h4>
                                    <p class="text-gray-400 mb-4">{p.long_description}</p>
                                </div>
                            </div>
                            <div class="flex flex-row justify-start gap-4 mt-8">
                                <a
                                    href=p.live_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="bg-[#4ADE80] hover:bg-[#3DAE70] text-black rounded-md px-4 py-2 font-medium"
                                >
                                    "↗ Live View"
                                </a>
                                {p
                                    .github_url()
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="border border-[#222222] text-white hover:text-[#4ADE80] hover:border-[#4ADE80] rounded-md px-4 py-2"
                                            >
                                                <i class="devicon-github-plain mr-2"></i>
                                                "GitHub Repo"
                                            </a>
                                        }
                                    })}
                            </div>
                        </aside>
                    }
                })
        }}
    }
}
