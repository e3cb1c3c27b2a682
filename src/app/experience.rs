use leptos::{html, prelude::*};

use super::SectionHeader;
use crate::portfolio::{Section, EXPERIENCES};

/// Work history as a vertical timeline, alternating sides on wide screens.
#[component]
pub fn ExperienceSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section
            node_ref=node_ref
            id=Section::Experience.id()
            class="min-h-screen py-16 bg-[#030303]"
        >
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader number="01" tag="//EXPERIENCE" title="WORK HISTORY" />
                <div class="relative">
                    <div class="absolute left-[20px] md:left-1/2 top-0 bottom-0 w-[2px] bg-[#111827]/40 transform md:-translate-x-1/2"></div>
                    <div class="space-y-16">
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(i, exp)| {
                                let even = i % 2 == 0;
                                view! {
                                    <div
                                        class="relative flex items-stretch justify-start"
                                        class=("md:flex-row-reverse", !even)
                                    >
                                        <div class="absolute left-[20px] md:left-1/2 top-0 w-[14px] h-[14px] bg-[#4ADE80] rounded-full transform md:-translate-x-1/2 z-10"></div>
                                        <div
                                            class="text-[#4ADE80] font-mono text-xs absolute left-[40px] md:left-auto"
                                            class=("md:left-[calc(50%+20px)]", even)
                                            class=("md:right-[calc(50%+20px)]", !even)
                                            class=("md:text-right", !even)
                                        >
                                            {exp.period}
                                        </div>
                                        <div
                                            class="pl-12 md:pl-0 pt-8"
                                            class=("md:pr-[calc(50%+40px)]", even)
                                            class=("md:pl-[calc(50%+40px)]", !even)
                                        >
                                            <h3 class="text-xl font-bold text-white">{exp.title}</h3>
                                            <p class="text-[#4ADE80] mb-3">{exp.company}</p>
                                            <p class="text-gray-400">{exp.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
