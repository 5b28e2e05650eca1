//! Main App Component

use leptos::prelude::*;
use smiles_core::Theme;

use crate::pages::LandingPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeStyles />
        <div class="min-h-screen bg-pearl text-obsidian font-josefin">
            <LandingPage />
        </div>
    }
}

/// Brand token utilities, generated from the theme
#[component]
fn ThemeStyles() -> impl IntoView {
    let css = Theme::brand().map(|theme| theme.stylesheet()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Theme failed to load");
        String::new()
    });

    view! { <style>{css}</style> }
}
