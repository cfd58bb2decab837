//! Theme toggle component for light/dark modes.

use dioxus::prelude::*;

/// A named visual mode. The document-level `data-theme` attribute is
/// the only channel between this value and the styling layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The pure toggle transition: light <-> dark.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme toggle button.
/// Uses localStorage for persistence and the `data-theme` attribute on
/// the document element. Note: we use a raw HTML onclick attribute for
/// SSR since the JavaScript is already included in the page and we
/// don't need Dioxus event handling.
#[component]
pub fn ThemeToggle() -> Element {
    rsx! {
        div {
            class: "theme-toggle",
            // Using dangerous_inner_html to render the button with an
            // onclick handler since Dioxus SSR doesn't support string
            // event handlers directly
            dangerous_inner_html: r#"
                <button id="theme-toggle-btn" type="button" aria-label="Toggle color theme" onclick="toggleTheme()">&#127769; Dark</button>
            "#
        }
    }
}

/// Client-side JavaScript for applying the saved theme before first
/// paint. Included in the document head.
pub const THEME_SCRIPT: &str = r#"
(function(){
    const t = localStorage.getItem('bh-theme') || 'light';
    document.documentElement.setAttribute('data-theme', t === 'dark' ? 'dark' : 'light');
})();
"#;

/// Client-side JavaScript for theme switching.
/// Included at the end of the document body.
pub const THEME_FUNCTIONS: &str = r#"
function toggleTheme() {
    const cur = document.documentElement.getAttribute('data-theme') || 'light';
    const next = cur === 'light' ? 'dark' : 'light';
    document.documentElement.setAttribute('data-theme', next);
    localStorage.setItem('bh-theme', next);
    updateThemeButton();
}
function updateThemeButton() {
    const t = document.documentElement.getAttribute('data-theme') || 'light';
    const btn = document.getElementById('theme-toggle-btn');
    if (btn) btn.innerHTML = t === 'light' ? '\u{1F319} Dark' : '☀️ Light';
}
updateThemeButton();
"#;
