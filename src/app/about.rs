use leptos::{html, prelude::*};

use crate::portfolio::{Section, OWNER, ROLES};

const HIGHLIGHTED_SKILLS: [&str; 5] = [
    "Search Engine Optimization",
    "Next.js",
    "React.js",
    "Tailwind CSS",
    "JavaScript",
];
const FULL_STACK_SKILLS: [&str; 3] = ["Node.js", "Express.js", "MongoDB"];

fn highlighted(items: &'static [&'static str]) -> impl IntoView {
    let last = items.len() - 1;
    items
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let sep = match i {
                i if i == last => "",
                i if i + 1 == last => ", and",
                _ => ",",
            };
            view! {
                <span class="text-[#4ADE80]">" " {*s}</span>
                {sep}
            }
        })
        .collect_view()
}

#[component]
pub fn AboutSection(node_ref: NodeRef<html::Section>, on_hire: Callback<Section>) -> impl IntoView {
    view! {
        <section
            node_ref=node_ref
            id=Section::About.id()
            class="min-h-screen flex flex-col justify-center py-16 bg-[#030303]"
        >
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                        <div class="mb-10 lg:mb-0 order-2 lg:order-1">
                            <p class="text-[#4ADE80] text-sm uppercase tracking-wide font-medium mb-5">
                                {ROLES}
                            </p>
                            <h1 class="text-5xl md:text-7xl font-bold text-white mb-10">
                                {OWNER.to_uppercase()}
                            </h1>
                            <p class="text-gray-300 text-xl max-w-3xl leading-relaxed">
                                "I am a front-end developer with 3 years of proven experience in the field. I am skilled in"
                                {highlighted(&HIGHLIGHTED_SKILLS)}
                                ". Along with that, I have experience in full-stack development using"
                                {highlighted(&FULL_STACK_SKILLS)} "."
                            </p>
                            <div class="mt-12 flex flex-wrap gap-5">
                                <button
                                    class="bg-[#101010] hover:bg-[#1a1a1a] text-white py-4 px-8 rounded-lg flex items-center space-x-2"
                                    on:click=move |_| on_hire.run(Section::Contact)
                                >
                                    <span class="text-[#4ADE80] mr-2">"↗"</span>
                                    <span class="font-medium">"HIRE NOW"</span>
                                </button>
                                <a
                                    href="/cv.pdf"
                                    download="cv.pdf"
                                    class="border border-[#222222] text-white py-4 px-8 rounded-lg flex items-center space-x-2"
                                >
                                    <span class="text-[#4ADE80] mr-2">"→"</span>
                                    <span class="font-medium">"DOWNLOAD CV"</span>
                                </a>
                            </div>
                        </div>
                        <ProfilePicture />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfilePicture() -> impl IntoView {
    view! {
        <div class="relative flex justify-center order-1 lg:order-2">
            <div class="relative">
                <svg
                    width="500"
                    height="500"
                    viewBox="0 0 500 500"
                    class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2 z-0"
                >
                    <defs>
                        <linearGradient id="blob-gradient" x1="0%" y1="0%" x2="100%" y2="100%">
                            <stop offset="0%" stop-color="#1e40af" stop-opacity="0.3" />
                            <stop offset="50%" stop-color="#4ADE80" stop-opacity="0.2" />
                            <stop offset="100%" stop-color="#7e22ce" stop-opacity="0.3" />
                        </linearGradient>
                    </defs>
                    <path
                        d="M430.9,290.9c25.4-55.6,7.9-137.8-38.9-190.9S267.3,2.2,208.9,28.8S105.2,137.5,62.8,200s-71.8,127.8-43.7,167.7c28.2,39.9,99.7,37.9,159,42.5c59.4,4.5,106.7,15.6,157.4-7.8S405.6,346.5,430.9,290.9z"
                        fill="url(#blob-gradient)"
                        filter="blur(20px)"
                    />
                </svg>
                <div class="absolute -top-5 -left-5 w-10 h-10 border-t-2 border-l-2 border-[#4ADE80]"></div>
                <div class="absolute -bottom-5 -right-5 w-10 h-10 border-b-2 border-r-2 border-[#4ADE80]"></div>
                <div class="w-[300px] h-[400px] relative z-10 rounded-lg overflow-hidden border-2 border-[#222222]">
                    <img src="/images/me.png" alt=OWNER />
                </div>
                <div class="absolute -right-10 top-1/4 w-20 h-20 bg-[#030303] border border-[#222222] rounded-full flex items-center justify-center z-20">
                    <img class="w-10" src="/images/React.png" alt="React" />
                </div>
                <div class="absolute -left-5 bottom-1/4 w-14 h-14 bg-[#030303] border border-[#222222] rounded-lg flex items-center justify-center z-20">
                    <span class="text-[#4ADE80] text-2xl">"</>"</span>
                </div>
            </div>
        </div>
    }
}
