#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

pub mod albums;
pub mod components;
pub mod state;

use maud::{Markup, html};
use soundkit_ui::{
    features::{Feature, features_section},
    layout, page_header, public_img,
};

#[must_use]
pub fn header() -> Markup {
    html! {
        header class="site-header" sx-dir="row" sx-align-items="center" sx-background="#080a0b" {
            div class="site-header-logo" sx-padding-x=(20) {
                a href="/" sx-dir="row" sx-align-items="center" {
                    @let icon_size = 40;
                    img
                        alt="SoundKit logo"
                        sx-width=(icon_size)
                        sx-height=(icon_size)
                        sx-margin-right=(5)
                        src=(public_img!("icon128.png"));

                    h1 sx-font-size=(20) { "SoundKit" }
                }
            }
            div
                class="site-header-menu-items"
                sx-dir="row"
                sx-align-items="center"
                sx-justify-content="end"
                sx-flex=(1)
                sx-padding-x=(20)
                sx-gap=(20)
            {
                a href="/components" { "Components" }
                a href="/albums" { "Albums" }
            }
        }
    }
}

#[must_use]
pub fn main(slot: &Markup) -> Markup {
    html! {
        main class="main-content" sx-flex-grow=(1) {
            (slot)
        }
    }
}

#[must_use]
pub fn page(slot: &Markup) -> Markup {
    html! {
        div id="root" class="dark" sx-width="100%" sx-height="100%" sx-position="relative" sx-color="#fff" {
            (header())
            (main(&layout(slot)))
        }
    }
}

/// The feature cards shown on the home page.
#[must_use]
pub fn home_features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "icon-grid".to_string(),
            title: "Album grids".to_string(),
            description: "Album cards with play, select, and like wiring built in".to_string(),
        },
        Feature {
            icon: "icon-waveform".to_string(),
            title: "Music-first models".to_string(),
            description: "Albums, tracks, and audio sources as plain typed records".to_string(),
        },
        Feature {
            icon: "icon-embed".to_string(),
            title: "Design embeds".to_string(),
            description: "Borderless Figma frames built from a file key".to_string(),
        },
        Feature {
            icon: "icon-docs".to_string(),
            title: "Self-documenting".to_string(),
            description: "Every component ships with a live demo and its source".to_string(),
        },
    ]
}

#[must_use]
pub fn home() -> Markup {
    page(&html! {
        (page_header("SoundKit", "Presentational components for music apps"))
        (features_section(&home_features(), Some("home-features")))
    })
}

#[must_use]
pub fn not_found() -> Markup {
    page(&html! {
        "Page not found"
    })
}
