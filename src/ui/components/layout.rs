//! Layout component wrapping the page with common chrome and styles.

use dioxus::prelude::*;

use super::footer::Footer;
use super::header::Header;
use super::theme::{THEME_FUNCTIONS, THEME_SCRIPT};

/// CSS styles for the application. Colors are referenced symbolically
/// and resolved per theme via the `data-theme` attribute on the
/// document element.
const CUSTOM_STYLES: &str = r#"
:root, [data-theme="light"] {
    --primary: #1a73e8;
    --secondary: #5f6368;
    --background: #f8f9fa;
    --success: #34a853;
    --surface: #ffffff;
    --text: #202124;
}
[data-theme="dark"] {
    --primary: #8ab4f8;
    --secondary: #9aa0a6;
    --background: #202124;
    --success: #81c995;
    --surface: #2d2e31;
    --text: #e8eaed;
}
body { margin: 0; background: var(--background); color: var(--text); font-family: system-ui, sans-serif; }
.bh-header { display: flex; justify-content: space-between; align-items: center; padding: 0.8rem 1.2rem; background: var(--primary); color: #fff; font-size: 1.3rem; font-weight: 700; }
.bh-badge { background: var(--success); color: #fff; border-radius: 6px; font-size: 1rem; margin-left: 0.5em; padding: 0.1em 0.5em; }
.theme-toggle button { padding: 0.25rem 0.6rem; font-size: 0.85rem; border-radius: 6px; border: none; cursor: pointer; }
main { max-width: 1200px; margin: auto; }
.bh-heading { color: var(--primary); text-align: center; margin: 1.3rem 0 0.7rem 0; font-weight: 800; font-size: 1.95rem; letter-spacing: .5px; }
.bh-tagline { color: var(--secondary); text-align: center; margin: 0 0 1.5rem 0; font-size: 1.05rem; }
.bike-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; padding: 0 1rem; }
.bike-card { background: var(--surface); border-radius: 10px; overflow: hidden; box-shadow: 0 1px 4px rgba(0,0,0,.15); }
.bike-card:focus { outline: 2px solid var(--primary); }
.bike-image { width: 100%; height: 180px; object-fit: cover; display: block; }
.bike-details { padding: 0.8rem 1rem 1rem 1rem; }
.bike-title { font-weight: 700; font-size: 1.1rem; }
.bike-meta { color: var(--secondary); font-size: 0.95rem; }
.bike-price { color: var(--success); font-weight: 700; margin-top: 0.4rem; }
.bike-grid-empty, .bh-loading, .bh-error { color: var(--secondary); text-align: center; margin-top: 2rem; }
.bh-error { color: #d93025; }
.bh-footer { text-align: center; padding: 1.2rem 0; color: var(--secondary); font-size: 0.95rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping the page content with header and
/// footer chrome.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Bikers Heaven" }
            style { {CUSTOM_STYLES} }
            script { dangerous_inner_html: THEME_SCRIPT }
        }
        body {
            Header {}
            main { aria_label: "Bikes catalogue",
                {props.children}
            }
            Footer {}
            script { dangerous_inner_html: THEME_FUNCTIONS }
        }
    }
}
