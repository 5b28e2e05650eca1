//! Landing Page

use chrono::Datelike;
use leptos::prelude::*;
use smiles_core::content::{
    self, BRAND, CTA_LABEL, HERO_ASSURANCES, HERO_SECONDARY, HERO_TILES, Icon, NAV_LINKS,
    PRICING_PLAN, PROBLEMS, PROCESS_STEPS, PROOF_NAMES, SOLUTIONS, SectionId,
};

use crate::components::{
    CheckItem, CtaButton, FeatureCard, ProblemCard, ProofTile, Section, SectionHeading, StepCard,
};
use crate::icons::IconGlyph;
use crate::pages::ContactSection;

/// The whole page, top to bottom
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <NavBar />
        <Hero />
        <Problems />
        <Solutions />
        <SocialProof />
        <Process />
        <Pricing />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-30 backdrop-blur bg-pearl/80 border-b border-black/5">
            <div class="max-w-7xl mx-auto px-6 md:px-10 h-16 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <span class="w-8 h-8 rounded bg-crimson/10 border border-crimson/30 flex items-center justify-center">
                        <span class="w-3 h-3 rounded-full bg-crimson animate-float"></span>
                    </span>
                    <span class="font-seasons text-xl">{BRAND}</span>
                </div>
                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href() class="hover:text-crimson transition-colors">{link.label}</a>
                        })
                        .collect_view()}
                </nav>
                <div class="hidden md:block">
                    <CtaButton label=CTA_LABEL />
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <Section section=SectionId::Hero>
            <div class="grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <p class="uppercase tracking-widest text-xs md:text-sm text-obsidian/70 mb-4">
                        {content::HERO_KICKER}
                    </p>
                    <h1 class="font-seasons text-5xl md:text-6xl leading-[1.1]">{content::HERO_TITLE}</h1>
                    <p class="mt-5 text-obsidian/80 text-lg">{content::HERO_LEDE}</p>
                    <div class="mt-8 flex flex-wrap items-center gap-4">
                        <CtaButton label=CTA_LABEL />
                        <a
                            href=HERO_SECONDARY.href()
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-full border border-obsidian/10 hover:border-obsidian/30 transition-all"
                        >
                            {HERO_SECONDARY.label}
                        </a>
                    </div>
                    <div class="mt-6 flex items-center gap-6 text-sm text-obsidian/60">
                        {HERO_ASSURANCES
                            .iter()
                            .map(|text| view! {
                                <div class="flex items-center gap-2">
                                    <IconGlyph icon=Icon::CheckCircle size=18 class="text-crimson" />
                                    " "
                                    {*text}
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative">
                    <div class="aspect-[4/3] rounded-2xl bg-sand/60 border border-obsidian/10 shadow-inner overflow-hidden flex items-center justify-center">
                        <div class="grid grid-cols-3 gap-4 p-6 w-full">
                            {(0..HERO_TILES)
                                .map(|i| {
                                    let style = format!("animation-delay:{}ms", content::hero_tile_delay_ms(i));
                                    view! { <div class="bg-white/70 rounded-xl h-28 animate-fade-in" style=style></div> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn Problems() -> impl IntoView {
    view! {
        <Section section=SectionId::Problem>
            <SectionHeading heading=content::PROBLEM_HEADING />
            <div class="grid md:grid-cols-3 gap-6">
                {PROBLEMS
                    .iter()
                    .map(|title| view! { <ProblemCard title=*title blurb=content::PROBLEM_BLURB /> })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Solutions() -> impl IntoView {
    view! {
        <Section section=SectionId::Solution>
            <SectionHeading heading=content::SOLUTION_HEADING />
            <div class="grid md:grid-cols-3 gap-6">
                {SOLUTIONS.iter().map(|feature| view! { <FeatureCard feature=*feature /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn SocialProof() -> impl IntoView {
    view! {
        <Section section=SectionId::Proof>
            <SectionHeading heading=content::PROOF_HEADING />
            <div class="grid grid-cols-2 md:grid-cols-4 gap-6 opacity-80">
                {PROOF_NAMES.iter().map(|name| view! { <ProofTile name=*name /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Process() -> impl IntoView {
    view! {
        <Section section=SectionId::Process>
            <SectionHeading heading=content::PROCESS_HEADING />
            <div class="grid md:grid-cols-3 gap-6">
                {PROCESS_STEPS.iter().map(|step| view! { <StepCard step=*step /> }).collect_view()}
            </div>
        </Section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let plan = PRICING_PLAN;

    view! {
        <Section section=SectionId::Pricing>
            <SectionHeading heading=content::PRICING_HEADING />
            <div class="grid md:grid-cols-2 gap-6 items-center">
                <div class="bg-white rounded-2xl p-8 border border-obsidian/10">
                    <div class="flex items-baseline gap-3">
                        <IconGlyph icon=Icon::BadgeDollar class="text-crimson" />
                        <span class="text-4xl font-seasons">{plan.price}</span>
                        <span class="text-obsidian/60">{plan.period}</span>
                    </div>
                    <ul class="mt-6 space-y-3">
                        {plan.features.iter().map(|f| view! { <CheckItem text=*f /> }).collect_view()}
                    </ul>
                    <div class="mt-8">
                        <CtaButton label=plan.cta />
                    </div>
                </div>
                <div class="text-obsidian/80">
                    <p>{plan.note}</p>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-obsidian text-pearl py-10">
            <div class="max-w-7xl mx-auto px-6 md:px-10 grid md:grid-cols-3 gap-8">
                <div>
                    <h4 class="font-seasons text-2xl">{BRAND}</h4>
                    <p class="text-pearl/80 mt-2">{content::FOOTER_BLURB}</p>
                </div>
                <div>
                    <h5 class="font-semibold mb-2">"Contact"</h5>
                    <p class="text-pearl/80 flex items-center gap-2">
                        <IconGlyph icon=Icon::Mail size=16 />
                        " "
                        {content::CONTACT_EMAIL}
                    </p>
                    <p class="text-pearl/80 flex items-center gap-2">
                        <IconGlyph icon=Icon::MessageCircle size=16 />
                        " "
                        {content::whatsapp_line()}
                    </p>
                </div>
                <div class="text-pearl/70 text-sm">
                    <p>{content::copyright_line(year)}</p>
                    <p class="mt-2">{content::FOOTER_DISCLAIMER}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        let owner = Owner::new();
        owner.set();
        view! { <LandingPage /> }.to_html()
    }

    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
    }

    #[test]
    fn test_cards_render_once_in_order() {
        let html = render();
        let titles = PROBLEMS
            .iter()
            .copied()
            .chain(SOLUTIONS.iter().map(|f| f.title))
            .chain(PROOF_NAMES.iter().copied())
            .chain(PROCESS_STEPS.iter().map(|f| f.title))
            .chain(PRICING_PLAN.features.iter().copied());

        let mut last = 0;
        for title in titles {
            let needle = format!("{}<", escaped(title));
            assert_eq!(html.matches(&needle).count(), 1, "{title:?} should render once");
            let at = html.find(&needle).unwrap();
            assert!(at > last, "{title:?} rendered out of order");
            last = at;
        }
    }

    #[test]
    fn test_nav_links_land_on_sections() {
        let html = render();
        for link in NAV_LINKS {
            let href = link.href();
            assert!(html.contains(&format!("href=\"{href}\"")), "no nav link to {href}");
            let id = href.trim_start_matches('#');
            assert!(html.contains(&format!("<section id=\"{id}\"")), "no section for {href}");
        }
    }

    #[test]
    fn test_nine_blocks_in_order() {
        let html = render();
        let blocks = std::iter::once("<header".to_string())
            .chain(SectionId::ALL.iter().map(|s| format!("<section id=\"{}\"", s.anchor())))
            .chain(std::iter::once("<footer".to_string()));

        let mut last = None;
        for block in blocks {
            assert_eq!(html.matches(&block).count(), 1, "{block} should render once");
            let at = html.find(&block);
            assert!(at > last, "{block} rendered out of order");
            last = at;
        }
        assert_eq!(html.matches("<section").count(), SectionId::ALL.len());
    }

    #[test]
    fn test_nav_border_and_footer_year() {
        let html = render();
        let header = &html[html.find("<header").unwrap()..html.find("</header>").unwrap()];
        assert!(header.contains("border-b border-black/5"));

        let year = chrono::Local::now().year();
        assert!(html.contains(&content::copyright_line(year)));
    }
}
