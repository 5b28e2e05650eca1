//! Inline SVG icons (Lucide outlines, ISC licensed)

use leptos::prelude::*;
use smiles_core::content::Icon;

#[derive(Clone, Copy, Debug)]
enum Shape {
    Path(&'static str),
    Circle { cx: &'static str, cy: &'static str, r: &'static str },
    Rect { x: &'static str, y: &'static str, width: &'static str, height: &'static str, rx: &'static str },
    Polygon(&'static str),
}

impl Shape {
    fn render(self) -> AnyView {
        match self {
            Self::Path(d) => view! { <path d=d /> }.into_any(),
            Self::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r /> }.into_any(),
            Self::Rect { x, y, width, height, rx } => {
                view! { <rect x=x y=y width=width height=height rx=rx /> }.into_any()
            }
            Self::Polygon(points) => view! { <polygon points=points /> }.into_any(),
        }
    }
}

const fn shapes(icon: Icon) -> &'static [Shape] {
    match icon {
        Icon::CheckCircle => &[
            Shape::Circle { cx: "12", cy: "12", r: "10" },
            Shape::Path("m9 12 2 2 4-4"),
        ],
        Icon::Target => &[
            Shape::Circle { cx: "12", cy: "12", r: "10" },
            Shape::Circle { cx: "12", cy: "12", r: "6" },
            Shape::Circle { cx: "12", cy: "12", r: "2" },
        ],
        Icon::Filter => &[Shape::Polygon("22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3")],
        Icon::Bot => &[
            Shape::Path("M12 8V4H8"),
            Shape::Rect { x: "4", y: "8", width: "16", height: "12", rx: "2" },
            Shape::Path("M2 14h2"),
            Shape::Path("M20 14h2"),
            Shape::Path("M15 13v2"),
            Shape::Path("M9 13v2"),
        ],
        Icon::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
        Icon::BadgeDollar => &[
            Shape::Path(
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
            ),
            Shape::Path("M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8"),
            Shape::Path("M12 18V6"),
        ],
        Icon::Phone => &[Shape::Path(
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        )],
        Icon::Mail => &[
            Shape::Rect { x: "2", y: "4", width: "20", height: "16", rx: "2" },
            Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
        ],
        Icon::MessageCircle => &[Shape::Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")],
    }
}

/// Stroked 24x24 icon scaled to `size` pixels
#[component]
pub fn IconGlyph(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let size = size.to_string();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {shapes(icon).iter().map(|shape| shape.render()).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_shapes() {
        let icons = [
            Icon::CheckCircle,
            Icon::Target,
            Icon::Filter,
            Icon::Bot,
            Icon::ArrowRight,
            Icon::BadgeDollar,
            Icon::Phone,
            Icon::Mail,
            Icon::MessageCircle,
        ];
        for icon in icons {
            assert!(!shapes(icon).is_empty(), "{icon:?} has no outline");
        }
    }
}
