//! Figma embed component.
//!
//! Builds the embed URL for a hosted Figma view and renders a borderless
//! iframe pointed at it. This module only constructs the URL and frame
//! attributes; fetching the design is delegated to the host runtime's
//! frame-loading mechanism, with no reachability validation here.

use std::str::FromStr;

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};
use thiserror::Error;

static EMBED_HOST: &str = "https://www.figma.com/embed";

/// Which Figma surface the embed shows.
#[derive(
    Copy, Debug, Clone, Serialize, Deserialize, EnumString, Default, AsRefStr, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmbedMode {
    /// The design editor view
    #[default]
    Design,
    /// The prototype player view
    Prototype,
}

impl std::fmt::Display for EmbedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Advisory theme hint passed through to the embedded target.
#[derive(
    Copy, Debug, Clone, Serialize, Deserialize, EnumString, Default, AsRefStr, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EmbedTheme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// Follow the host's theme
    System,
}

impl std::fmt::Display for EmbedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Normalized size for a component boundary.
///
/// Bare numbers resolve to pixels; percentage strings keep their unit.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    /// Size in pixels
    Px(u32),
    /// Size as a percentage of the container
    Percent(u16),
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Self::Px(value)
    }
}

/// Error returned when a string is not a recognizable dimension.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid dimension: {0}")]
pub struct ParseDimensionError(pub String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    /// Accepts `"450"`, `"450px"`, and `"100%"` forms.
    ///
    /// # Errors
    ///
    /// * If the value is not a bare number, `px` value, or percentage
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        if let Some(percent) = trimmed.strip_suffix('%') {
            return percent
                .parse::<u16>()
                .map(Self::Percent)
                .map_err(|_| ParseDimensionError(value.to_string()));
        }

        trimmed
            .strip_suffix("px")
            .unwrap_or(trimmed)
            .parse::<u32>()
            .map(Self::Px)
            .map_err(|_| ParseDimensionError(value.to_string()))
    }
}

/// Property bag for the Figma embed component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaEmbed {
    /// Key of the Figma file to embed
    pub file_key: String,
    /// Specific node within the file, if any
    pub node_id: Option<String>,
    /// Which Figma surface to show
    pub mode: EmbedMode,
    /// Advisory theme hint for the embedded target
    pub theme: EmbedTheme,
    /// Whether the frame is granted fullscreen permission
    pub allow_fullscreen: bool,
    /// Advisory hint for showing the Figma UI chrome
    pub show_ui: bool,
    /// Frame height
    pub height: Dimension,
    /// Frame width
    pub width: Dimension,
}

impl FigmaEmbed {
    /// Creates an embed for the given file key with the default mode, theme,
    /// size, and permissions.
    #[must_use]
    pub fn new(file_key: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
            node_id: None,
            mode: EmbedMode::default(),
            theme: EmbedTheme::default(),
            allow_fullscreen: true,
            show_ui: true,
            height: Dimension::Px(450),
            width: Dimension::Percent(100),
        }
    }

    #[must_use]
    pub fn with_node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: EmbedMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: EmbedTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_allow_fullscreen(mut self, allow_fullscreen: bool) -> Self {
        self.allow_fullscreen = allow_fullscreen;
        self
    }

    #[must_use]
    pub const fn with_show_ui(mut self, show_ui: bool) -> Self {
        self.show_ui = show_ui;
        self
    }

    #[must_use]
    pub const fn with_height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Constructs the embed URL for this property bag.
    ///
    /// An invalid `file_key` simply yields a non-resolving URL; nothing is
    /// validated here.
    #[must_use]
    pub fn embed_url(&self) -> String {
        let mut url = format!("{EMBED_HOST}/{}/{}", self.mode, self.file_key);

        if let Some(node_id) = &self.node_id {
            url.push_str("?node-id=");
            url.push_str(node_id);
        }

        url
    }
}

/// Renders the borderless embedded frame for the given property bag.
///
/// `theme` and `show_ui` pass through as inert `data-*` attributes; they
/// carry no local behavior.
#[must_use]
pub fn figma_embed(embed: &FigmaEmbed) -> Markup {
    html! {
        iframe
            class="figma-embed"
            src=(embed.embed_url())
            sx-width=(embed.width)
            sx-height=(embed.height)
            sx-border="none"
            data-theme=(embed.theme)
            data-show-ui=(embed.show_ui)
            allowfullscreen[embed.allow_fullscreen]
        {}
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    mod embed_url_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn builds_design_url_without_query_string() {
            assert_eq!(
                FigmaEmbed::new("abc123").embed_url(),
                "https://www.figma.com/embed/design/abc123",
            );
        }

        #[test_log::test]
        fn appends_node_id_query_parameter() {
            assert_eq!(
                FigmaEmbed::new("abc123").with_node_id("1:23").embed_url(),
                "https://www.figma.com/embed/design/abc123?node-id=1:23",
            );
        }

        #[test_log::test]
        fn uses_prototype_path_segment_for_prototype_mode() {
            assert_eq!(
                FigmaEmbed::new("abc123")
                    .with_mode(EmbedMode::Prototype)
                    .embed_url(),
                "https://www.figma.com/embed/prototype/abc123",
            );
        }
    }

    mod default_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn applies_documented_defaults() {
            let embed = FigmaEmbed::new("abc123");

            assert_eq!(embed.mode, EmbedMode::Design);
            assert_eq!(embed.theme, EmbedTheme::Light);
            assert!(embed.allow_fullscreen);
            assert!(embed.show_ui);
            assert_eq!(embed.height, Dimension::Px(450));
            assert_eq!(embed.width, Dimension::Percent(100));
        }
    }

    mod markup_tests {
        use super::*;

        #[test_log::test]
        fn grants_fullscreen_permission_by_default() {
            let markup = figma_embed(&FigmaEmbed::new("abc123")).into_string();

            assert!(markup.contains("allowfullscreen"));
        }

        #[test_log::test]
        fn gates_fullscreen_permission() {
            let markup = figma_embed(&FigmaEmbed::new("abc123").with_allow_fullscreen(false))
                .into_string();

            assert!(!markup.contains("allowfullscreen"));
        }

        #[test_log::test]
        fn passes_theme_and_show_ui_through_as_data_attributes() {
            let markup = figma_embed(
                &FigmaEmbed::new("abc123")
                    .with_theme(EmbedTheme::Dark)
                    .with_show_ui(false),
            )
            .into_string();

            assert!(markup.contains("data-theme=\"dark\""));
            assert!(markup.contains("data-show-ui=\"false\""));
        }

        #[test_log::test]
        fn sizes_the_frame_from_the_property_bag() {
            let markup = figma_embed(
                &FigmaEmbed::new("abc123")
                    .with_height(Dimension::Px(600))
                    .with_width(Dimension::Percent(50)),
            )
            .into_string();

            assert!(markup.contains("sx-height=\"600\""));
            assert!(markup.contains("sx-width=\"50%\""));
        }
    }

    mod dimension_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test_log::test]
        fn parses_bare_numbers_as_pixels() {
            assert_eq!("450".parse::<Dimension>().unwrap(), Dimension::Px(450));
        }

        #[test_log::test]
        fn parses_px_suffixed_values_as_pixels() {
            assert_eq!("450px".parse::<Dimension>().unwrap(), Dimension::Px(450));
        }

        #[test_log::test]
        fn parses_percentages() {
            assert_eq!(
                "100%".parse::<Dimension>().unwrap(),
                Dimension::Percent(100),
            );
        }

        #[test_log::test]
        fn rejects_unrecognizable_values() {
            assert_eq!(
                "45vw".parse::<Dimension>(),
                Err(ParseDimensionError("45vw".to_string())),
            );
        }

        #[test_log::test]
        fn displays_canonical_forms() {
            assert_eq!(Dimension::Px(450).to_string(), "450");
            assert_eq!(Dimension::Percent(100).to_string(), "100%");
        }
    }
}
