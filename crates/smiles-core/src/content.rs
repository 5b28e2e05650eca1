//! Page Content
//!
//! Every piece of copy on the landing page, in the order it renders.
//! Lists here map one-to-one onto cards in the page.

pub const BRAND: &str = "We Scale Smiles";
pub const CONTACT_EMAIL: &str = "hello@wescalesmiles.com";
pub const CONTACT_WHATSAPP: &str = "+1 (000) 000-0000";

/// A full-width block of the page with an anchor id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Problem,
    Solution,
    Proof,
    Process,
    Pricing,
    Contact,
}

impl SectionId {
    /// Anchored sections in page order
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Problem,
        Self::Solution,
        Self::Proof,
        Self::Process,
        Self::Pricing,
        Self::Contact,
    ];

    /// DOM id of the section element
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Proof => "proof",
            Self::Process => "process",
            Self::Pricing => "pricing",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub const fn backdrop(self) -> Backdrop {
        match self {
            Self::Problem | Self::Proof | Self::Pricing => Backdrop::Sand,
            _ => Backdrop::Pearl,
        }
    }
}

/// Section background
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Pearl,
    Sand,
}

impl Backdrop {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Pearl => "bg-pearl",
            Self::Sand => "bg-sand",
        }
    }
}

/// Glyphs used across the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    CheckCircle,
    Target,
    Filter,
    Bot,
    ArrowRight,
    BadgeDollar,
    Phone,
    Mail,
    MessageCircle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavLink {
    pub fn href(&self) -> String {
        self.target.href()
    }
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Problem", target: SectionId::Problem },
    NavLink { label: "Solution", target: SectionId::Solution },
    NavLink { label: "Process", target: SectionId::Process },
    NavLink { label: "Pricing", target: SectionId::Pricing },
    NavLink { label: "Contact", target: SectionId::Contact },
];

/// Where every call-to-action button points
pub const CTA_TARGET: SectionId = SectionId::Contact;
pub const CTA_LABEL: &str = "Get More Patients";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Center,
    Left,
}

/// Kicker, title and optional subtitle above a section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub kicker: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub align: Align,
}

/// Card with an icon, a title and a line of body copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

// Hero

pub const HERO_KICKER: &str = "Dental Growth Agency";
pub const HERO_TITLE: &str = "Fill Your Implant and Braces Calendar with Patients who Show Up";
pub const HERO_LEDE: &str = "We Scale Smiles brings high-value implant and orthodontic patients to small clinics using targeted Facebook ads, smart lead filtering, and automation. You focus on care\u{2014}we handle demand.";
pub const HERO_SECONDARY: NavLink = NavLink { label: "See how it works", target: SectionId::Process };
pub const HERO_ASSURANCES: [&str; 2] = ["No long-term contracts", "HIPAA-conscious flows"];
pub const HERO_TILES: usize = 6;

/// Stagger between decorative hero tiles fading in
pub const fn hero_tile_delay_ms(index: usize) -> usize {
    index * 100
}

// Problem

pub const PROBLEM_HEADING: Heading = Heading {
    kicker: Some("Problems We Solve"),
    title: "Why clinics struggle to keep high-value slots full",
    subtitle: Some("Common bottlenecks that stall growth and waste time"),
    align: Align::Center,
};

pub const PROBLEMS: [&str; 3] = [
    "Empty implant chair time",
    "Not enough braces-qualified inquiries",
    "Hours lost on unqualified leads",
];

pub const PROBLEM_BLURB: &str = "We help clinics consistently attract and pre-qualify patients so your team spends time only on real opportunities.";

// Solution

pub const SOLUTION_HEADING: Heading = Heading {
    kicker: Some("Our Offer"),
    title: "Targeted Ads + Automation = Predictable Patient Flow",
    subtitle: Some("We launch, filter, and nurture so you only speak to warm leads"),
    align: Align::Center,
};

pub const SOLUTIONS: [Feature; 3] = [
    Feature {
        icon: Icon::Target,
        title: "Hyper-targeted Ads",
        text: "Facebook and Instagram campaigns focused on implants and orthodontics in your local radius.",
    },
    Feature {
        icon: Icon::Filter,
        title: "Lead Filtering",
        text: "Qualifying questions and budget screens remove tire-kickers before they reach your team.",
    },
    Feature {
        icon: Icon::Bot,
        title: "Automation",
        text: "SMS and WhatsApp follow-ups nurture leads and book them directly into your calendar.",
    },
];

// Social proof

pub const PROOF_HEADING: Heading = Heading {
    kicker: Some("Social Proof"),
    title: "Trusted playbooks for small dental clinics",
    subtitle: Some("Add your logos and quotes here as you grow"),
    align: Align::Center,
};

pub const PROOF_NAMES: [&str; 4] = ["ClinicOne", "SmileCo", "ImplantHub", "OrthoPro"];

// Process

pub const PROCESS_HEADING: Heading = Heading {
    kicker: Some("How It Works"),
    title: "Three steps to consistent qualified patients",
    subtitle: None,
    align: Align::Center,
};

pub const PROCESS_STEPS: [Feature; 3] = [
    Feature {
        icon: Icon::Target,
        title: "Ads & Campaign Setup",
        text: "We build implant/ortho-specific campaigns that target ideal demographics.",
    },
    Feature {
        icon: Icon::Filter,
        title: "Lead Nurturing & Filtering",
        text: "Automated DMs/SMS qualify by budget, urgency, and suitability.",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Qualified Leads Delivered",
        text: "Only warm, ready-to-book leads make it to your front desk.",
    },
];

// Pricing

pub const PRICING_HEADING: Heading = Heading {
    kicker: Some("Simple Pricing"),
    title: "Growth partner plan",
    subtitle: Some("Flat monthly fee with clear deliverables"),
    align: Align::Center,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub price: &'static str,
    pub period: &'static str,
    pub features: [&'static str; 4],
    pub cta: &'static str,
    pub note: &'static str,
}

pub const PRICING_PLAN: PricingPlan = PricingPlan {
    price: "$299",
    period: "/month",
    features: [
        "Campaign strategy & builds",
        "Lead forms + filtering",
        "Automation via SMS/WhatsApp",
        "Weekly performance updates",
    ],
    cta: "Start for $299",
    note: "Ad spend is separate and fully transparent. We collaborate on budgets and targeting, then optimize weekly to keep chair time full for implants and braces.",
};

// Contact

pub const CONTACT_HEADING: Heading = Heading {
    kicker: Some("Get In Touch"),
    title: "Ready to scale your clinic?",
    subtitle: Some("Tell us a bit about your practice and we\u{2019}ll reach out within 24 hours."),
    align: Align::Left,
};

pub const SUBMIT_LABEL: &str = CTA_LABEL;

// Footer

pub const FOOTER_BLURB: &str = "We help small dental clinics keep their implant and braces calendars full with targeted ads and automation.";
pub const FOOTER_DISCLAIMER: &str = "This site is not affiliated with Facebook\u{2122}. All trademarks are property of their respective owners.";

pub fn whatsapp_line() -> String {
    format!("WhatsApp: {CONTACT_WHATSAPP}")
}

pub fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_links_resolve_to_sections() {
        let anchors: HashSet<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        for link in NAV_LINKS {
            let href = link.href();
            let id = href.strip_prefix('#').unwrap();
            assert!(anchors.contains(id), "{href} has no matching section");
        }
        assert!(anchors.contains(CTA_TARGET.anchor()));
        assert!(anchors.contains(HERO_SECONDARY.target.anchor()));
    }

    #[test]
    fn test_anchors_are_unique() {
        let anchors: HashSet<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Problem", "Solution", "Process", "Pricing", "Contact"]);
    }

    #[test]
    fn test_backdrops_alternate() {
        let classes: Vec<_> = SectionId::ALL.iter().map(|s| s.backdrop().class()).collect();
        assert_eq!(
            classes,
            ["bg-pearl", "bg-sand", "bg-pearl", "bg-sand", "bg-pearl", "bg-sand", "bg-pearl"]
        );
    }

    #[test]
    fn test_hero_tile_stagger() {
        let delays: Vec<_> = (0..HERO_TILES).map(hero_tile_delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026), "\u{a9} 2026 We Scale Smiles. All rights reserved.");
    }
}
