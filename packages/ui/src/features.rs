use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// A single product capability shown as a feature card.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// CSS class token resolving to an icon glyph
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body text
    pub description: String,
}

/// Renders a titled grid of feature cards, one per feature, in input order.
///
/// `class` is appended to the root element's class list. An empty feature
/// list renders an empty grid. An invalid `icon` token degrades to no
/// visible glyph.
#[must_use]
pub fn features_section(features: &[Feature], class: Option<&str>) -> Markup {
    let root_class = class.map_or_else(
        || "features-section".to_string(),
        |class| format!("features-section {class}"),
    );

    html! {
        div class=(root_class) sx-padding-y=(20) {
            h2 class="features-section-title" { "Features" }
            div class="features-grid" sx-dir="row" sx-overflow-x="wrap" sx-gap=(15) {
                @for feature in features {
                    (feature_card(feature))
                }
            }
        }
    }
}

fn feature_card(feature: &Feature) -> Markup {
    html! {
        div class="feature-card" sx-padding=(20) sx-border-radius=(8) sx-background="#181a1b" {
            i class={ "feature-card-icon " (feature.icon) } {}
            h3 class="feature-card-title" { (feature.title) }
            div class="feature-card-description" sx-color="#ccc" { (feature.description) }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn feature(title: &str) -> Feature {
        Feature {
            icon: "icon-music".to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
        }
    }

    #[test_log::test]
    fn renders_one_card_per_feature_in_input_order() {
        let features = vec![feature("First"), feature("Second"), feature("Third")];

        let markup = features_section(&features, None).into_string();

        assert_eq!(markup.matches("feature-card\"").count(), 3);
        let first = markup.find("First").unwrap();
        let second = markup.find("Second").unwrap();
        let third = markup.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test_log::test]
    fn renders_titles_and_descriptions_verbatim() {
        let features = vec![feature("Gapless playback")];

        let markup = features_section(&features, None).into_string();

        assert!(markup.contains("Gapless playback"));
        assert!(markup.contains("Gapless playback description"));
    }

    #[test_log::test]
    fn empty_feature_list_renders_an_empty_grid() {
        let markup = features_section(&[], None).into_string();

        assert!(markup.contains("features-grid"));
        assert_eq!(markup.matches("feature-card\"").count(), 0);
    }

    #[test_log::test]
    fn appends_class_to_the_root_element() {
        let markup = features_section(&[], Some("home-features")).into_string();

        assert!(markup.contains("class=\"features-section home-features\""));
    }

    #[test_log::test]
    fn icon_token_lands_on_the_glyph_element() {
        let markup = features_section(&[feature("With icon")], None).into_string();

        assert!(markup.contains("class=\"feature-card-icon icon-music\""));
    }
}
