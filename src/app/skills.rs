use leptos::{html, prelude::*};

use super::SectionHeader;
use crate::portfolio::{marquee_items, Section};

fn skill_cards() -> impl IntoView {
    marquee_items()
        .map(|(category, skill)| {
            view! {
                <div class="flex-shrink-0 bg-[#121212] rounded-md overflow-hidden w-[280px]">
                    <div class="h-[150px] bg-[#1a1a1a] flex items-center justify-center overflow-hidden relative">
                        <img src=skill.image alt=skill.name class="opacity-80" />
                        <div class="absolute inset-0 bg-gradient-to-b from-transparent to-[#121212]/70"></div>
                    </div>
                    <div class="p-5">
                        <h3 class="text-white font-medium text-lg">{skill.name}</h3>
                        <p class="text-gray-400 text-sm mt-1">{category}</p>
                    </div>
                </div>
            }
        })
        .collect_view()
}

/// Endless marquee of skill cards. The list is rendered twice and the track
/// slides by half its width, so the loop has no visible seam.
#[component]
pub fn SkillsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section node_ref=node_ref id=Section::Skills.id() class="min-h-screen py-16 bg-[#050505]">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader number="02" tag="//SKILLS" title="MY EXPERTISE" />
                <div class="relative overflow-hidden py-12">
                    <div class="flex gap-8 w-max animate-marquee">
                        {skill_cards()} <div class="contents" aria-hidden="true">
                            {skill_cards()}
                        </div>
                    </div>
                    <div class="absolute left-0 top-0 h-full w-32 bg-gradient-to-r from-[#050505] to-transparent z-10"></div>
                    <div class="absolute right-0 top-0 h-full w-32 bg-gradient-to-l from-[#050505] to-transparent z-10"></div>
                </div>
            </div>
        </section>
    }
}
