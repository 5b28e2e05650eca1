//! UI Components

use leptos::prelude::*;
use smiles_core::content::{Align, CTA_TARGET, Feature, Heading, Icon, SectionId};

use crate::icons::IconGlyph;

/// Full-width page block anchored at its section id
#[component]
pub fn Section(section: SectionId, children: Children) -> impl IntoView {
    let class = format!("w-full {} py-20 md:py-28", section.backdrop().class());

    view! {
        <section id=section.anchor() class=class>
            <div class="max-w-7xl mx-auto px-6 md:px-10">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionHeading(heading: Heading) -> impl IntoView {
    let wrapper = match heading.align {
        Align::Center => "mb-10 text-center mx-auto max-w-3xl",
        Align::Left => "mb-10",
    };

    view! {
        <div class=wrapper>
            {heading.kicker.map(|kicker| view! {
                <p class="uppercase tracking-widest text-xs md:text-sm text-obsidian/70 mb-2">{kicker}</p>
            })}
            <h2 class="font-seasons text-4xl md:text-5xl leading-tight text-obsidian">{heading.title}</h2>
            {heading.subtitle.map(|subtitle| view! {
                <p class="mt-3 text-obsidian/80 font-josefin text-lg">{subtitle}</p>
            })}
        </div>
    }
}

/// Primary call to action, always pointing at the contact section
#[component]
pub fn CtaButton(label: &'static str) -> impl IntoView {
    view! {
        <a
            href=CTA_TARGET.href()
            class="inline-flex items-center gap-2 bg-crimson text-white px-6 py-3 rounded-full shadow-md hover:shadow-lg hover:-translate-y-0.5 transition-all duration-200"
        >
            {label}
            " "
            <IconGlyph icon=Icon::ArrowRight size=18 />
        </a>
    }
}

#[component]
pub fn ProblemCard(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white/70 rounded-xl p-6 border border-obsidian/10 hover:shadow-md transition-shadow">
            <h4 class="font-seasons text-2xl mb-2">{title}</h4>
            <p class="text-obsidian/80">{blurb}</p>
        </div>
    }
}

/// Offer card: icon inline with the title
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 border border-obsidian/10">
            <div class="flex items-center gap-3 mb-3">
                <IconGlyph icon=feature.icon class="text-crimson" />
                " "
                <h4 class="font-seasons text-2xl">{feature.title}</h4>
            </div>
            <p class="text-obsidian/80">{feature.text}</p>
        </div>
    }
}

/// Process card: icon stacked above the title
#[component]
pub fn StepCard(step: Feature) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 border border-obsidian/10">
            <IconGlyph icon=step.icon class="text-crimson mb-3" />
            <h4 class="font-seasons text-2xl mb-1">{step.title}</h4>
            <p class="text-obsidian/80">{step.text}</p>
        </div>
    }
}

/// Placeholder logo tile for social proof
#[component]
pub fn ProofTile(name: &'static str) -> impl IntoView {
    view! {
        <div class="h-20 rounded-lg bg-white/70 border border-obsidian/10 flex items-center justify-center text-obsidian/60 font-semibold">
            {name}
        </div>
    }
}

/// Checked line item
#[component]
pub fn CheckItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-center gap-2">
            <IconGlyph icon=Icon::CheckCircle size=18 class="text-crimson" />
            " "
            {text}
        </li>
    }
}
