//! Component reference page.
//!
//! One anchor-addressable section per component, each holding a live demo
//! next to the source snippet that produces it.

use maud::{Markup, html};
use soundkit_album_grid::album_grid;
use soundkit_ui::{
    demo,
    features::features_section,
    figma::{EmbedTheme, FigmaEmbed, figma_embed},
    page_header, section, source,
};

use crate::{albums::demo_albums, home_features};

static PAGE_HEADER_SNIPPET: &str =
    r#"page_header("Album Library", "Browse and play your collection")"#;

static FEATURES_SECTION_SNIPPET: &str = r#"features_section(&features, Some("home-features"))"#;

static SOURCE_SNIPPET: &str = r#"source("rust", "let albums = demo_albums();")"#;

static ALBUM_GRID_SNIPPET: &str = r"album_grid(&state.albums(), 200)";

static FIGMA_EMBED_SNIPPET: &str = r#"figma_embed(
    &FigmaEmbed::new("soundkit-design-system")
        .with_node_id("1:23")
        .with_theme(EmbedTheme::Dark),
)"#;

#[must_use]
pub fn components() -> Markup {
    crate::page(&html! {
        (page_header("Components", "Live demos and source for every SoundKit component"))
        (section("page-header-demo", "PageHeader", &html! {
            (demo(&page_header("Album Library", "Browse and play your collection")))
            (source("rust", PAGE_HEADER_SNIPPET))
        }))
        (section("features-section-demo", "FeaturesSection", &html! {
            (demo(&features_section(&home_features(), None)))
            (source("rust", FEATURES_SECTION_SNIPPET))
        }))
        (section("component-source-demo", "ComponentSource", &html! {
            (demo(&source("rust", "let albums = demo_albums();")))
            (source("rust", SOURCE_SNIPPET))
        }))
        (section("album-grid-demo", "AlbumGrid", &html! {
            (demo(&album_grid(&demo_albums(), 160)))
            (source("rust", ALBUM_GRID_SNIPPET))
        }))
        (section("figma-embed-demo", "FigmaEmbed", &html! {
            (demo(&figma_embed(
                &FigmaEmbed::new("soundkit-design-system")
                    .with_node_id("1:23")
                    .with_theme(EmbedTheme::Dark),
            )))
            (source("rust", FIGMA_EMBED_SNIPPET))
        }))
    })
}
