//! Diagnostic center detail

use app_core::{diagnostic_center, CenterTest, DiagnosticCenter};

use super::{back_header, button_text, card, meta_item, primary_button, screen_container, Screen};
use crate::components::{Alignment, Dimension, JustifyContent, Node, Spacing, Style, ON_FILL};
use crate::icons::IconName;
use crate::navigation::Route;
use crate::theme::{ColorRole, TokenSet};
use crate::tokens::{radius, sizing, spacing};
use crate::typography::{font_size, FontWeight, TextAlign};

/// Detail page for `/diagnostic-center/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticCenterScreen {
    id: String,
}

impl DiagnosticCenterScreen {
    /// Screen for a center id
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    /// Requested id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record shown for the id
    pub fn center(&self) -> &'static DiagnosticCenter {
        diagnostic_center(&self.id)
    }
}

/// Style table for [`DiagnosticCenterScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticCenterStyles {
    container: Style,
    title: Style,
    hero_image: Style,

    info_card: Style,
    title_row: Style,
    name: Style,
    verified_badge: Style,
    verified_text: Style,
    rating_row: Style,
    rating_text: Style,
    reviews_text: Style,
    location_row: Style,
    location_text: Style,
    distance_text: Style,
    description: Style,
    details: Style,
    detail_item: Style,
    detail_text: Style,
    features_title: Style,
    features: Style,
    feature_tag: Style,
    feature_text: Style,

    tests_section: Style,
    tests_title: Style,
    test_card: Style,
    test_header: Style,
    test_info: Style,
    test_name: Style,
    test_description: Style,
    test_pricing: Style,
    test_price: Style,
    test_original_price: Style,
    test_meta: Style,
    test_meta_text: Style,
    parameters_section: Style,
    parameters_title: Style,
    parameters: Style,
    parameter_tag: Style,
    book_button: Style,
    book_button_text: Style,

    price_book_section: Style,
    price_book_button: Style,
    price_book_text: Style,
}

impl Screen for DiagnosticCenterScreen {
    type Styles = DiagnosticCenterStyles;
    const NAME: &'static str = "Diagnostic Center";

    fn route(&self) -> Route {
        Route::diagnostic_center(&self.id)
    }

    fn derive_styles(tokens: &TokenSet) -> DiagnosticCenterStyles {
        let c = &tokens.colors;
        let row = || Style::new().row().align_items(Alignment::Center);
        let success_tint = tokens.tint(ColorRole::Success);

        DiagnosticCenterStyles {
            container: screen_container(tokens),
            title: tokens
                .text(font_size::title::BASE, FontWeight::SemiBold, &c.text)
                .flex(1.0)
                .text_align(TextAlign::Center),
            hero_image: Style::new()
                .width(Dimension::percent(100.0))
                .height(Dimension::px(sizing::HERO_IMAGE)),

            info_card: card(tokens)
                .margin(Spacing::uniform(spacing::GUTTER))
                .padding(Spacing::uniform(spacing::SPACE_XL)),
            title_row: row().margin(Spacing::bottom(spacing::SPACE_SM)),
            name: tokens
                .text(font_size::title::BASE, FontWeight::Bold, &c.text)
                .flex(1.0)
                .margin(Spacing::right(spacing::SPACE_MD)),
            verified_badge: row()
                .background(success_tint.clone())
                .padding(Spacing::symmetric(spacing::SPACE_XS, spacing::SPACE_SM))
                .radius(radius::BADGE),
            verified_text: tokens
                .text(font_size::SM, FontWeight::SemiBold, &c.success)
                .margin(Spacing::left(spacing::SPACE_XS)),
            rating_row: row().margin(Spacing::bottom(spacing::SPACE_MD)),
            rating_text: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.warning)
                .margin(Spacing::left(spacing::SPACE_COMPACT)),
            reviews_text: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS)),
            location_row: row().margin(Spacing::bottom(spacing::SPACE_MD)),
            location_text: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_COMPACT))
                .flex(1.0),
            distance_text: tokens.text(font_size::MD, FontWeight::SemiBold, &c.primary),
            description: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .line_height(spacing::SPACE_XL)
                .margin(Spacing::bottom(spacing::SPACE_LG)),
            details: Style::new().margin(Spacing::bottom(spacing::SPACE_LG)),
            detail_item: row().margin(Spacing::bottom(spacing::SPACE_SM)),
            detail_text: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text)
                .margin(Spacing::left(spacing::SPACE_SM)),
            features_title: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::individual(spacing::SPACE_SM, 0.0, spacing::SPACE_MD, 0.0)),
            features: Style::new().row().wrap().gap(spacing::SPACE_SM),
            feature_tag: row()
                .background(success_tint)
                .padding(Spacing::symmetric(spacing::SPACE_COMPACT, 10.0))
                .radius(radius::MD),
            feature_text: tokens
                .text(font_size::SM, FontWeight::Medium, &c.success)
                .margin(Spacing::left(spacing::SPACE_XS)),

            tests_section: Style::new()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_XL)),
            tests_title: tokens
                .text(font_size::title::BASE, FontWeight::Bold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_LG)),
            test_card: card(tokens)
                .padding(Spacing::uniform(spacing::SPACE_LG))
                .margin(Spacing::bottom(spacing::SPACE_LG)),
            test_header: Style::new()
                .row()
                .justify(JustifyContent::SpaceBetween)
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            test_info: Style::new()
                .flex(1.0)
                .margin(Spacing::right(spacing::SPACE_LG)),
            test_name: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            test_description: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .line_height(font_size::LG),
            test_pricing: Style::new().align_items(Alignment::FlexEnd),
            test_price: tokens.text(font_size::XL, FontWeight::Bold, &c.success),
            test_original_price: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .strikethrough(),
            test_meta: Style::new()
                .row()
                .gap(spacing::SPACE_LG)
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            test_meta_text: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS)),
            parameters_section: Style::new().margin(Spacing::bottom(spacing::SPACE_LG)),
            parameters_title: tokens
                .text(font_size::MD, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            parameters: Style::new().row().wrap().gap(spacing::SPACE_COMPACT),
            parameter_tag: tokens
                .text(font_size::XS, FontWeight::Regular, &c.text_secondary)
                .background(&c.card)
                .padding(Spacing::symmetric(spacing::SPACE_XS, spacing::SPACE_SM))
                .radius(radius::BADGE),
            book_button: primary_button(tokens, spacing::SPACE_MD, 0.0),
            book_button_text: button_text(tokens, font_size::MD),

            price_book_section: Style::new()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_XL)),
            price_book_button: Style::new()
                .row()
                .centered()
                .background(&c.accent)
                .padding(Spacing::vertical(spacing::SPACE_LG))
                .radius(radius::LG)
                .gap(spacing::SPACE_SM),
            price_book_text: button_text(tokens, font_size::LG),
        }
    }

    fn render(&self, tokens: &TokenSet, s: &DiagnosticCenterStyles) -> Node {
        let center = self.center();

        let mut tests = vec![Node::text(
            format!("Available Tests ({})", center.tests.len()),
            &s.tests_title,
        )];
        tests.extend(center.tests.iter().map(|test| test_card(tokens, s, test)));

        Node::view(
            s.container.clone(),
            vec![
                back_header(tokens, &s.title, "Diagnostic Center"),
                Node::scroll(
                    Style::new(),
                    vec![
                        Node::image(center.image, &s.hero_image),
                        self.info_card(tokens, s, center),
                        Node::view(s.tests_section.clone(), tests),
                        Node::view(
                            s.price_book_section.clone(),
                            vec![Node::view(
                                s.price_book_button.clone(),
                                vec![
                                    Node::icon(IconName::Calendar, sizing::icon::LG, ON_FILL),
                                    Node::text("View Complete Price Book", &s.price_book_text),
                                ],
                            )],
                        ),
                        Node::spacer(spacing::SPACE_XL),
                    ],
                ),
            ],
        )
    }
}

impl DiagnosticCenterScreen {
    fn info_card(
        &self,
        tokens: &TokenSet,
        s: &DiagnosticCenterStyles,
        center: &DiagnosticCenter,
    ) -> Node {
        let c = &tokens.colors;

        let mut title_row = vec![Node::text(center.name, &s.name)];
        if center.verified {
            title_row.push(Node::view(
                s.verified_badge.clone(),
                vec![
                    Node::icon(IconName::CheckCircle, sizing::icon::MD, &c.success),
                    Node::text("Verified", &s.verified_text),
                ],
            ));
        }

        let detail = |icon: IconName, text: &str| {
            Node::view(
                s.detail_item.clone(),
                vec![
                    Node::icon(icon, sizing::icon::MD, &c.text_secondary),
                    Node::text(text, &s.detail_text),
                ],
            )
        };

        let features = center
            .features
            .iter()
            .map(|feature| {
                Node::view(
                    s.feature_tag.clone(),
                    vec![
                        Node::icon(IconName::CheckCircle, sizing::icon::XS, &c.success),
                        Node::text(*feature, &s.feature_text),
                    ],
                )
            })
            .collect();

        Node::view(
            s.info_card.clone(),
            vec![
                Node::view(s.title_row.clone(), title_row),
                Node::view(
                    s.rating_row.clone(),
                    vec![
                        Node::filled_icon(IconName::Star, sizing::icon::MD, &c.warning),
                        Node::text(format!("{}", center.rating), &s.rating_text),
                        Node::text(format!("({} reviews)", center.reviews), &s.reviews_text),
                    ],
                ),
                Node::view(
                    s.location_row.clone(),
                    vec![
                        Node::icon(IconName::MapPin, sizing::icon::MD, &c.text_secondary),
                        Node::text(center.address, &s.location_text),
                        Node::text(center.distance, &s.distance_text),
                    ],
                ),
                Node::text(center.description, &s.description),
                Node::view(
                    s.details.clone(),
                    vec![
                        detail(IconName::Clock, center.open_time),
                        detail(IconName::Phone, center.phone),
                    ],
                ),
                Node::text("Features", &s.features_title),
                Node::view(s.features.clone(), features),
            ],
        )
    }
}

fn test_card(tokens: &TokenSet, s: &DiagnosticCenterStyles, test: &CenterTest) -> Node {
    let muted = &tokens.colors.text_secondary;
    let parameters = test
        .parameters
        .iter()
        .map(|param| Node::text(*param, &s.parameter_tag))
        .collect();

    Node::view(
        s.test_card.clone(),
        vec![
            Node::view(
                s.test_header.clone(),
                vec![
                    Node::view(
                        s.test_info.clone(),
                        vec![
                            Node::text(test.name, &s.test_name),
                            Node::text(test.description, &s.test_description),
                        ],
                    ),
                    Node::view(
                        s.test_pricing.clone(),
                        vec![
                            Node::text(test.price_label(), &s.test_price),
                            Node::text(test.original_price_label(), &s.test_original_price),
                        ],
                    ),
                ],
            ),
            Node::view(
                s.test_meta.clone(),
                vec![
                    meta_item(
                        IconName::TestTube,
                        muted,
                        format!("{} parameters", test.parameters.len()),
                        &s.test_meta_text,
                    ),
                    meta_item(IconName::Clock, muted, test.report_time, &s.test_meta_text),
                ],
            ),
            Node::view(
                s.parameters_section.clone(),
                vec![
                    Node::text("Parameters Covered:", &s.parameters_title),
                    Node::view(s.parameters.clone(), parameters),
                ],
            ),
            Node::view(
                s.book_button.clone(),
                vec![Node::text("Book Now", &s.book_button_text)],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Action;
    use crate::screens::render_once;
    use crate::theme::{dark_tokens, light_tokens};

    #[test]
    fn test_any_id_shows_the_fixed_center() {
        let tokens = dark_tokens();
        let a = render_once(&DiagnosticCenterScreen::new("1"), &tokens);
        let b = render_once(&DiagnosticCenterScreen::new("42"), &tokens);
        assert_eq!(a, b);
        assert!(a.contains_text("MediCare Diagnostics"));
        assert!(a.contains_text("Verified"));
        assert!(a.contains_text("(342 reviews)"));
        assert!(a.contains_text("Gomti Nagar, Lucknow"));
        assert!(a.contains_text("7:00 AM - 9:00 PM"));
        assert!(a.contains_text("+91 98765 43210"));
    }

    #[test]
    fn test_features_and_tests() {
        let node = render_once(&DiagnosticCenterScreen::new("1"), &light_tokens());
        for text in [
            "Features",
            "Home Collection",
            "NABL Certified",
            "Available Tests (6)",
            "Complete Blood Count (CBC)",
            "Diabetes Profile",
            "5 parameters",
            "4 parameters",
            "HbA1c",
            "₹599",
            "₹850",
            "12-24 hours",
            "View Complete Price Book",
        ] {
            assert!(node.contains_text(text), "missing {:?}", text);
        }
        let book_buttons = node.texts().into_iter().filter(|t| *t == "Book Now").count();
        assert_eq!(book_buttons, 6);
    }

    #[test]
    fn test_hero_image_first_in_scroll() {
        let node = render_once(&DiagnosticCenterScreen::new("1"), &light_tokens());
        let scroll = &node.children()[1];
        match &scroll.children()[0] {
            Node::Image { uri, style } => {
                assert!(uri.contains("263402"));
                assert_eq!(style.height, Some(Dimension::px(sizing::HERO_IMAGE)));
            }
            other => panic!("expected hero image, got {:?}", other),
        }
    }

    #[test]
    fn test_back_is_the_only_action() {
        let node = render_once(&DiagnosticCenterScreen::new("1"), &light_tokens());
        assert_eq!(node.actions(), vec![&Action::Back]);
    }

    #[test]
    fn test_feature_tags_use_success_tint() {
        let light = DiagnosticCenterScreen::derive_styles(&light_tokens());
        let dark = DiagnosticCenterScreen::derive_styles(&dark_tokens());
        assert_eq!(light.feature_tag.background_color.as_deref(), Some("#10B98120"));
        assert_eq!(dark.feature_tag.background_color.as_deref(), Some("#34D39920"));
        assert_eq!(dark.price_book_button.background_color.as_deref(), Some("#A78BFA"));
    }
}
