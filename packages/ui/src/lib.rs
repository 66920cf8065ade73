#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

pub mod features;
pub mod figma;
pub mod formatting;

use maud::{Markup, html};

#[macro_export]
macro_rules! public_img {
    ($path:expr $(,)?) => {
        concat!("/public/img/", $path)
    };
}

/// Renders a page title and description block.
///
/// Empty strings render as empty elements; no validation is performed.
#[must_use]
pub fn page_header(title: &str, description: &str) -> Markup {
    html! {
        header class="page-header" sx-padding-y=(20) {
            h1 class="page-header-title" sx-height=(36) { (title) }
            div class="page-header-description" sx-color="#ccc" { (description) }
        }
    }
}

/// Wraps a slot in a centered, width-constrained content container.
#[must_use]
pub fn layout(slot: &Markup) -> Markup {
    html! {
        div class="page-layout" sx-align-items="center" sx-padding-x=(20) {
            div sx-width="100%" sx-max-width=(1000) {
                (slot)
            }
        }
    }
}

/// Renders an anchor-addressable section with a heading followed by the slot.
///
/// The caller must keep `id` unique within the page, since it is used for
/// in-page navigation.
#[must_use]
pub fn section(id: &str, title: &str, slot: &Markup) -> Markup {
    html! {
        section id=(id) class="component-section" sx-padding-y=(20) {
            h2 class="component-section-title" sx-border-bottom="2, #333" sx-padding-bottom=(10) {
                (title)
            }
            (slot)
        }
    }
}

/// Wraps arbitrary child content in a bordered demo container.
#[must_use]
pub fn demo(slot: &Markup) -> Markup {
    html! {
        div class="component-demo" sx-border="1, #333" sx-border-radius=(8) sx-padding=(20) {
            (slot)
        }
    }
}

/// Renders `code` verbatim inside a monospaced block tagged for downstream
/// syntax highlighting.
///
/// No highlighting or transformation happens here; markup-significant
/// characters are entity-escaped by the markup layer like any other text.
#[must_use]
pub fn source(language: &str, code: &str) -> Markup {
    html! {
        pre class="component-source" sx-background="#101214" sx-border-radius=(8) sx-padding=(15) {
            code class={ "language-" (language) } { (code) }
        }
    }
}
