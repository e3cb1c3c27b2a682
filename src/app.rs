mod about;
mod contact;
mod experience;
mod image_viewer;
mod nav;
mod projects;
mod skills;
mod toaster;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::portfolio::{Section, OWNER};
use crate::scroll_spy::{active_section, SectionBounds};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use nav::{MobileNav, SideNav};
use projects::ProjectsSection;
use skills::SkillsSection;
use toaster::Toaster;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-[#030303] text-gray-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=OWNER />
        <Router>
            <Toaster>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </Toaster>
        </Router>
    }
}

/// Page shell: navigation, the five sections, and the footer.
///
/// Owns the section refs and the active section; children only see a
/// read-only signal plus a callback to scroll somewhere.
#[component]
fn PortfolioPage() -> impl IntoView {
    let refs: [NodeRef<html::Section>; 5] = std::array::from_fn(|_| NodeRef::new());
    let (active, set_active) = signal(Section::About);
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = Section::ALL
            .iter()
            .zip(refs.iter())
            .filter_map(|(&section, node)| {
                let el = node.get_untracked()?;
                Some(SectionBounds {
                    section,
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect::<Vec<_>>();
        if let Some(section) = active_section(&bounds, y) {
            if active.get_untracked() != section {
                set_active(section);
            }
        }
    });

    let scroll_to = Callback::new(move |section: Section| {
        let Some(el) = refs[section.index()].get_untracked() else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    });

    view! {
        <div class="min-h-screen bg-[#030303] text-gray-200">
            <SideNav active on_select=scroll_to />
            <MobileNav active on_select=scroll_to />
            <main class="container mx-auto px-4 md:px-20 pt-16 md:pt-12">
                <AboutSection node_ref=refs[Section::About.index()] on_hire=scroll_to />
                <ExperienceSection node_ref=refs[Section::Experience.index()] />
                <SkillsSection node_ref=refs[Section::Skills.index()] />
                <ProjectsSection node_ref=refs[Section::Projects.index()] />
                <ContactSection node_ref=refs[Section::Contact.index()] />
            </main>
            <Footer />
        </div>
    }
}

/// Numbered header row shared by the content sections.
#[component]
fn SectionHeader(number: &'static str, tag: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-4">
            <div class="text-sm text-gray-500">{number}</div>
            <div class="text-sm text-gray-500 font-mono">{tag}</div>
            <div class="text-sm text-gray-500">{crate::portfolio::ACTIVE_YEARS}</div>
        </div>
        <h2 class="text-6xl md:text-8xl font-bold text-white mb-12">{title}</h2>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-[#030303] border-t border-[#222222] py-8 mt-16">
            <div class="container mx-auto px-4 text-center text-gray-400">
                <p>{format!("© {} {OWNER}. All rights reserved.", env!("BUILD_YEAR"))}</p>
            </div>
        </footer>
    }
}
