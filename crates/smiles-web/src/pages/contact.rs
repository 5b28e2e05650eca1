//! Contact Section
//!
//! The form keeps its draft in a single signal. Submitting only logs the
//! lead; no request leaves the browser.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use smiles_core::content::{self, CONTACT_EMAIL, Icon, SUBMIT_LABEL, SectionId};
use smiles_core::{ACKNOWLEDGEMENT, LeadDraft, LeadField, LogSink};

use crate::components::{Section, SectionHeading};
use crate::icons::IconGlyph;

const INPUT_CLASS: &str = "w-full rounded-md border border-obsidian/20 bg-white px-3 py-2 focus:outline-none focus:ring-2 focus:ring-crimson/40";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Section section=SectionId::Contact>
            <div class="grid md:grid-cols-2 gap-10 items-start">
                <div>
                    <SectionHeading heading=content::CONTACT_HEADING />
                    <div class="space-y-3 text-obsidian/80">
                        <p class="flex items-center gap-2">
                            <IconGlyph icon=Icon::Phone size=18 class="text-crimson" />
                            " "
                            {content::whatsapp_line()}
                        </p>
                        <p class="flex items-center gap-2">
                            <IconGlyph icon=Icon::Mail size=18 class="text-crimson" />
                            " "
                            {CONTACT_EMAIL}
                        </p>
                    </div>
                </div>
                <ContactForm />
            </div>
        </Section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(LeadDraft::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut current = draft.get_untracked();
        match current.submit(&LogSink) {
            Ok(_) => {
                draft.set(current);
                acknowledge();
            }
            // The browser normally blocks these before `submit` fires
            Err(e) if e.is_validation() => {
                tracing::warn!(error = %e, "Contact form rejected");
            }
            Err(e) => {
                tracing::error!(error = %e, "Contact form submission failed");
            }
        }
    };

    view! {
        <form on:submit=on_submit class="bg-sand/60 border border-obsidian/10 rounded-2xl p-6">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {LeadField::ALL
                    .into_iter()
                    .map(|field| view! { <FieldInput field=field draft=draft /> })
                    .collect_view()}
            </div>
            <button
                type="submit"
                class="mt-6 w-full bg-crimson text-white py-3 rounded-md hover:brightness-110 transition"
            >
                {SUBMIT_LABEL}
            </button>
        </form>
    }
}

#[component]
fn FieldInput(field: LeadField, draft: RwSignal<LeadDraft>) -> impl IntoView {
    let wrapper = if field.full_width() { "md:col-span-2" } else { "col-span-1" };
    let id = format!("lead-{}", field.key());

    view! {
        <div class=wrapper>
            <label for=id.clone() class="block text-sm mb-1">{field.label()}</label>
            <input
                id=id
                name=field.key()
                type=field.input_type()
                required=field.required()
                placeholder=field.placeholder()
                class=INPUT_CLASS
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// Blocking thank-you dialog
fn acknowledge() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(ACKNOWLEDGEMENT) {
        tracing::warn!(?err, "Could not show acknowledgement");
    }
}
