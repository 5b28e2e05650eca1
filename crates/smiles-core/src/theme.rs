//! Theme Tokens
//!
//! Semantic names for the brand's colors, font stacks and animations, and the
//! utility stylesheet generated from them. Layout utilities come from the
//! stock utility CSS; only the names below are specific to this site.

use std::fmt::{self, Write as _};

use crate::error::{Result, SiteError};

pub const COLORS: [(&str, &str); 4] = [
    ("crimson", "#8B0000"),
    ("sand", "#D9C2A1"),
    ("pearl", "#F7F6F3"),
    ("obsidian", "#0D0D0D"),
];

const SANS_FALLBACK: [&str; 7] = [
    "Inter",
    "system-ui",
    "-apple-system",
    "BlinkMacSystemFont",
    "Segoe UI",
    "Roboto",
    "sans-serif",
];

pub const FONTS: [(&str, &[&str]); 8] = [
    ("seasons", &["Seasons", "serif"]),
    ("josefin", &["Josefin Sans", "Inter", "system-ui", "-apple-system", "BlinkMacSystemFont", "Segoe UI", "Roboto", "sans-serif"]),
    ("sans", &SANS_FALLBACK),
    ("geist", &["Geist", "system-ui", "sans-serif"]),
    ("geist-mono", &["Geist Mono", "monospace"]),
    ("mona", &["Mona Sans", "system-ui", "sans-serif"]),
    ("ibm-plex", &["IBM Plex Sans", "system-ui", "sans-serif"]),
    ("manrope", &["Manrope", "system-ui", "sans-serif"]),
];

/// Opacity steps emitted for every color utility (`bg-sand/60` etc.)
pub const OPACITY_STEPS: [u8; 8] = [5, 10, 20, 30, 40, 60, 70, 80];

/// An sRGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` or `#RGB`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| SiteError::Theme(format!("not a hex color: {hex}")))?;

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|e| SiteError::Theme(e.to_string()));

        match digits.len() {
            6 => Ok(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self { r: short(0)?, g: short(1)?, b: short(2)? })
            }
            _ => Err(SiteError::Theme(format!("expected 3 or 6 hex digits: {hex}"))),
        }
    }

    /// CSS `rgb()` value, optionally at `opacity` percent
    pub fn css(self, opacity: Option<u8>) -> String {
        match opacity {
            Some(pct) => format!("rgb({} {} {} / {})", self.r, self.g, self.b, alpha(pct)),
            None => format!("rgb({} {} {})", self.r, self.g, self.b),
        }
    }
}

fn alpha(pct: u8) -> String {
    match pct {
        100.. => "1".into(),
        p if p % 10 == 0 => format!("0.{}", p / 10),
        p => format!("0.{p:02}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub rgb: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFamily {
    pub name: &'static str,
    pub stack: &'static [&'static str],
}

impl FontFamily {
    /// Comma-separated `font-family` value, quoting names with spaces
    pub fn css(&self) -> String {
        self.stack
            .iter()
            .map(|f| if f.contains(' ') { format!("\"{f}\"") } else { (*f).to_string() })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One stop in a keyframes rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframeStop {
    pub offset: &'static str,
    pub declarations: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyframes {
    pub name: &'static str,
    pub stops: &'static [KeyframeStop],
}

/// `animate-<name>` utility bound to a keyframes rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    pub name: &'static str,
    pub keyframes: &'static str,
    pub timing: &'static str,
}

impl Animation {
    pub fn css(&self) -> String {
        format!("{} {}", self.keyframes, self.timing)
    }
}

pub const KEYFRAMES: [Keyframes; 3] = [
    Keyframes {
        name: "fadeIn",
        stops: &[
            KeyframeStop { offset: "0%", declarations: &[("opacity", "0")] },
            KeyframeStop { offset: "100%", declarations: &[("opacity", "1")] },
        ],
    },
    Keyframes {
        name: "slideUp",
        stops: &[
            KeyframeStop {
                offset: "0%",
                declarations: &[("opacity", "0"), ("transform", "translateY(16px)")],
            },
            KeyframeStop {
                offset: "100%",
                declarations: &[("opacity", "1"), ("transform", "translateY(0)")],
            },
        ],
    },
    Keyframes {
        name: "float",
        stops: &[
            KeyframeStop { offset: "0%", declarations: &[("transform", "translateY(0)")] },
            KeyframeStop { offset: "50%", declarations: &[("transform", "translateY(-6px)")] },
            KeyframeStop { offset: "100%", declarations: &[("transform", "translateY(0)")] },
        ],
    },
];

pub const ANIMATIONS: [Animation; 3] = [
    Animation { name: "fade-in", keyframes: "fadeIn", timing: "0.6s ease-in-out both" },
    Animation { name: "slide-up", keyframes: "slideUp", timing: "0.6s ease-out both" },
    Animation { name: "float", keyframes: "float", timing: "6s ease-in-out infinite" },
];

/// Resolved theme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub colors: Vec<Color>,
    pub fonts: Vec<FontFamily>,
    pub keyframes: Vec<Keyframes>,
    pub animations: Vec<Animation>,
}

impl Theme {
    /// The site's brand theme
    pub fn brand() -> Result<Self> {
        let colors = COLORS
            .iter()
            .map(|&(name, hex)| Ok(Color { name, rgb: Rgb::from_hex(hex)? }))
            .collect::<Result<Vec<_>>>()?;

        let theme = Self {
            colors,
            fonts: FONTS.iter().map(|&(name, stack)| FontFamily { name, stack }).collect(),
            keyframes: KEYFRAMES.to_vec(),
            animations: ANIMATIONS.to_vec(),
        };
        theme.check_animations()?;
        Ok(theme)
    }

    /// Every animation must point at a declared keyframes rule
    fn check_animations(&self) -> Result<()> {
        for anim in &self.animations {
            if !self.keyframes.iter().any(|k| k.name == anim.keyframes) {
                return Err(SiteError::Theme(format!(
                    "animation {} references unknown keyframes {}",
                    anim.name, anim.keyframes
                )));
            }
        }
        Ok(())
    }

    /// Render the theme as a stylesheet
    pub fn stylesheet(&self) -> String {
        self.to_string()
    }
}

/// Escape a utility class name for use in a selector
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    for c in class.chars() {
        if matches!(c, '/' | ':' | '.' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn color_rules(out: &mut impl fmt::Write, color: &Color, opacity: Option<u8>) -> fmt::Result {
    let suffix = opacity.map(|p| format!("/{p}")).unwrap_or_default();
    let value = color.rgb.css(opacity);
    let name = color.name;

    writeln!(out, ".{} {{ background-color: {value}; }}", escape_class(&format!("bg-{name}{suffix}")))?;
    writeln!(out, ".{} {{ color: {value}; }}", escape_class(&format!("text-{name}{suffix}")))?;
    writeln!(out, ".{} {{ border-color: {value}; }}", escape_class(&format!("border-{name}{suffix}")))?;
    writeln!(
        out,
        ".{}:hover {{ color: {value}; }}",
        escape_class(&format!("hover:text-{name}{suffix}"))
    )?;
    writeln!(
        out,
        ".{}:hover {{ border-color: {value}; }}",
        escape_class(&format!("hover:border-{name}{suffix}"))
    )?;
    writeln!(
        out,
        ".{}:focus {{ --tw-ring-color: {value}; }}",
        escape_class(&format!("focus:ring-{name}{suffix}"))
    )
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        out.push_str(":root {\n");
        for color in &self.colors {
            writeln!(out, "  --color-{}: {};", color.name, color.rgb.css(None))?;
        }
        for font in &self.fonts {
            writeln!(out, "  --font-{}: {};", font.name, font.css())?;
        }
        out.push_str("}\n");

        for color in &self.colors {
            color_rules(&mut out, color, None)?;
            for step in OPACITY_STEPS {
                color_rules(&mut out, color, Some(step))?;
            }
        }

        for font in &self.fonts {
            writeln!(out, ".font-{} {{ font-family: {}; }}", font.name, font.css())?;
        }

        for keyframes in &self.keyframes {
            writeln!(out, "@keyframes {} {{", keyframes.name)?;
            for stop in keyframes.stops {
                let body = stop
                    .declarations
                    .iter()
                    .map(|(prop, value)| format!("{prop}: {value};"))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(out, "  {} {{ {body} }}", stop.offset)?;
            }
            out.push_str("}\n");
        }

        for anim in &self.animations {
            writeln!(out, ".animate-{} {{ animation: {}; }}", anim.name, anim.css())?;
        }

        f.write_str(&out)
    }
}
