use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};

use super::toaster::Toasts;
use super::SectionHeader;
use crate::contact::{ContactForm, Field};
use crate::portfolio::{Section, CONTACT};

#[component]
pub fn ContactSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let toasts = expect_context::<Toasts>();

    // submission only exists in the browser; the server never sees the event
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use crate::contact::{EmailTransport, HttpTransport};

            let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = HttpTransport::default().send(&message).await;
                if let Some(toast) = form.try_update(|f| f.finish_submit(result)) {
                    toasts.push(toast);
                }
            });
        }
    };

    view! {
        <section node_ref=node_ref id=Section::Contact.id() class="min-h-screen py-16 bg-[#030303]">
            <div class="max-w-6xl mx-auto px-6">
                <SectionHeader number="04" tag="//CONTACT" title="GET IN TOUCH" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <form class="space-y-8" novalidate=true on:submit=on_submit>
                        <FormField form field=Field::Name label="Name" placeholder="Your name" />
                        <FormField
                            form
                            field=Field::Email
                            label="Email"
                            placeholder="Your email address"
                            input_type="email"
                        />
                        <FormField
                            form
                            field=Field::Message
                            label="Message"
                            placeholder="Your message"
                            multiline=true
                        />
                        <button
                            type="submit"
                            class="w-full bg-[#101010] hover:bg-[#1a1a1a] disabled:opacity-60 h-14 mt-4 flex items-center justify-center gap-2 rounded-md text-white"
                            disabled=move || form.with(ContactForm::is_busy)
                        >
                            <span class="text-[#4ADE80]">"✉"</span>
                            {move || {
                                if form.with(ContactForm::is_busy) { "Sending..." } else { "Send Message" }
                            }}
                        </button>
                    </form>
                    <ContactInformation />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Message => "message",
    };
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let class = "w-full rounded-md bg-[#101010] border border-[#222222] text-white px-4 focus:outline-none focus:ring-2 focus:ring-[#4ADE80]";

    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm text-gray-500 uppercase tracking-wide">
                {label}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=id
                            name=id
                            placeholder=placeholder
                            class=format!("{class} min-h-32 py-3")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=id
                            name=id
                            type=input_type
                            placeholder=placeholder
                            class=format!("{class} h-14")
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || {
                form.with(|f| f.error(field))
                    .map(|msg| view! { <p class="text-red-500 text-sm">{msg}</p> })
            }}
        </div>
    }
}

#[component]
fn ContactInformation() -> impl IntoView {
    view! {
        <div class="lg:pl-16">
            <h3 class="text-2xl font-bold text-white mb-6">"Contact Information"</h3>
            <div class="space-y-6">
                <div>
                    <div class="text-sm text-gray-500 uppercase tracking-wide mb-1">"Email"</div>
                    <a href=format!("mailto:{}", CONTACT.email) class="text-[#4ADE80]">
                        {CONTACT.email}
                    </a>
                </div>
                <div>
                    <div class="text-sm text-gray-500 uppercase tracking-wide mb-1">"Phone"</div>
                    <div class="text-white">{CONTACT.phone}</div>
                </div>
                <div>
                    <div class="text-sm text-gray-500 uppercase tracking-wide mb-1">"Location"</div>
                    <div class="text-white">{CONTACT.location}</div>
                </div>
                <div class="pt-8">
                    <div class="text-sm text-gray-500 uppercase tracking-wide mb-4">"Follow Me"</div>
                    <div class="flex gap-4">
                        {CONTACT
                            .socials
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="h-10 w-10 flex items-center justify-center rounded-md bg-[#101010] border border-[#222222] text-white hover:text-[#4ADE80] hover:border-[#4ADE80] text-xl"
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
