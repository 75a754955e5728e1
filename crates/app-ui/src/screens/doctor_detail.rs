//! Doctor profile detail

use app_core::{doctor_profile, ConsultationOption, DoctorProfile, Review, DOCTOR_REVIEWS};

use super::{back_header, button_text, card, screen_container, Screen};
use crate::components::{Alignment, JustifyContent, Node, Spacing, Style, ON_FILL};
use crate::icons::{consultation_icon, IconName};
use crate::navigation::Route;
use crate::theme::{ColorRole, TokenSet};
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::{font_size, FontWeight, TextAlign};

/// Reviews shown before "View All"
pub const REVIEW_PREVIEW_COUNT: usize = 3;

/// Opacity of consultation options that cannot be booked
const UNAVAILABLE_OPACITY: f32 = 0.6;

/// Detail page for `/doctor/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDetailScreen {
    id: String,
}

impl DoctorDetailScreen {
    /// Screen for a doctor id
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }

    /// Requested id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Record shown for the id
    pub fn doctor(&self) -> &'static DoctorProfile {
        doctor_profile(&self.id)
    }
}

/// Style table for [`DoctorDetailScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDetailStyles {
    container: Style,
    title: Style,

    profile_card: Style,
    image_container: Style,
    image: Style,
    verified_badge: Style,
    doctor_header: Style,
    doctor_name: Style,
    specialty: Style,
    experience: Style,
    location_row: Style,
    location_text: Style,
    rating_row: Style,
    rating_text: Style,
    reviews_text: Style,
    registration: Style,

    section: Style,
    section_title: Style,
    section_header: Style,
    reviews_title: Style,
    view_all: Style,
    info_card: Style,
    bio_text: Style,
    list_item: Style,
    list_text: Style,
    tag_row: Style,
    condition_tag: Style,
    language_tag: Style,

    consultation_card: Style,
    consultation_card_disabled: Style,
    consultation_header: Style,
    consultation_title_row: Style,
    consultation_type: Style,
    consultation_duration: Style,
    consultation_pricing: Style,
    consultation_fee: Style,
    unavailable_text: Style,

    day_slots: Style,
    day_title: Style,
    time_slot: Style,
    time_slot_text: Style,

    review_card: Style,
    review_header: Style,
    reviewer_name: Style,
    review_stars: Style,
    review_comment: Style,
    review_date: Style,

    booking_section: Style,
    book_button: Style,
    book_button_text: Style,
}

impl Screen for DoctorDetailScreen {
    type Styles = DoctorDetailStyles;
    const NAME: &'static str = "Doctor Profile";

    fn route(&self) -> Route {
        Route::doctor(&self.id)
    }

    fn derive_styles(tokens: &TokenSet) -> DoctorDetailStyles {
        let c = &tokens.colors;
        let row = || Style::new().row().align_items(Alignment::Center);
        let inset_card = || {
            card(tokens)
                .radius(radius::LG)
                .padding(Spacing::uniform(spacing::SPACE_LG))
                .margin(Spacing::horizontal(spacing::GUTTER))
        };
        let tag = |color: &str, weight: FontWeight, background: &str| {
            tokens
                .text(font_size::SM, weight, color)
                .background(background)
                .padding(Spacing::symmetric(spacing::SPACE_COMPACT, 10.0))
                .radius(radius::MD)
        };
        let consultation_card = inset_card().margin(Spacing::individual(
            0.0,
            spacing::GUTTER,
            spacing::SPACE_SM,
            spacing::GUTTER,
        ));

        DoctorDetailStyles {
            container: screen_container(tokens),
            title: tokens
                .text(font_size::title::BASE, FontWeight::SemiBold, &c.text)
                .flex(1.0)
                .text_align(TextAlign::Center),

            profile_card: card(tokens)
                .row()
                .margin(Spacing::uniform(spacing::GUTTER))
                .padding(Spacing::uniform(spacing::SPACE_XL)),
            image_container: Style::new().margin(Spacing::right(spacing::SPACE_LG)),
            image: Style::new()
                .size(sizing::avatar::LG)
                .radius(sizing::avatar::LG / 2.0),
            verified_badge: Style::new()
                .absolute(sizing::avatar::LG - sizing::icon::LG, 0.0)
                .background(&c.background)
                .radius(radius::LG)
                .padding(Spacing::uniform(spacing::SPACE_2XS)),
            doctor_header: row().margin(Spacing::bottom(spacing::SPACE_XS)),
            doctor_name: tokens
                .text(font_size::XL, FontWeight::Bold, &c.text)
                .flex(1.0)
                .margin(Spacing::right(spacing::SPACE_SM)),
            specialty: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.primary)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            experience: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            location_row: row().margin(Spacing::bottom(spacing::SPACE_SM)),
            location_text: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS)),
            rating_row: row().wrap(),
            rating_text: tokens
                .text(font_size::MD, FontWeight::SemiBold, &c.warning)
                .margin(Spacing::left(spacing::SPACE_XS)),
            reviews_text: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS)),
            registration: tokens
                .text(font_size::TINY, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_SM)),

            section: Style::new().margin(Spacing::bottom(spacing::SPACE_XL)),
            section_title: tokens
                .text(font_size::XL, FontWeight::Bold, &c.text)
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            section_header: row()
                .justify(JustifyContent::SpaceBetween)
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            reviews_title: tokens.text(font_size::XL, FontWeight::Bold, &c.text),
            view_all: tokens.text(font_size::MD, FontWeight::Medium, &c.primary),
            info_card: inset_card(),
            bio_text: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .line_height(spacing::SPACE_XL),
            list_item: row().margin(Spacing::bottom(spacing::SPACE_SM)),
            list_text: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text)
                .margin(Spacing::left(spacing::SPACE_SM)),
            tag_row: Style::new().row().wrap().gap(spacing::SPACE_SM),
            condition_tag: tag(&c.text_secondary, FontWeight::Regular, &c.card),
            language_tag: tag(&c.primary, FontWeight::Medium, &tokens.tint(ColorRole::Primary)),

            consultation_card_disabled: consultation_card.clone().opacity(UNAVAILABLE_OPACITY),
            consultation_card,
            consultation_header: row().justify(JustifyContent::SpaceBetween),
            consultation_title_row: row().margin(Spacing::bottom(spacing::SPACE_XS)),
            consultation_type: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::left(spacing::SPACE_SM)),
            consultation_duration: tokens.text(
                font_size::SM,
                FontWeight::Regular,
                &c.text_secondary,
            ),
            consultation_pricing: Style::new().align_items(Alignment::FlexEnd),
            consultation_fee: tokens.text(font_size::XL, FontWeight::Bold, &c.success),
            unavailable_text: tokens.text(font_size::TINY, FontWeight::Medium, &c.error),

            day_slots: Style::new().margin(Spacing::bottom(spacing::SPACE_LG)),
            day_title: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            time_slot: Style::new()
                .background(&c.card)
                .padding(Spacing::symmetric(spacing::SPACE_SM, spacing::SPACE_MD))
                .radius(radius::MD)
                .border(border::THIN, &c.border),
            time_slot_text: tokens.text(font_size::SM, FontWeight::Medium, &c.text),

            review_card: inset_card().margin(Spacing::individual(
                0.0,
                spacing::GUTTER,
                spacing::SPACE_SM,
                spacing::GUTTER,
            )),
            review_header: row()
                .justify(JustifyContent::SpaceBetween)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            reviewer_name: tokens.text(font_size::MD, FontWeight::SemiBold, &c.text),
            review_stars: Style::new().row().gap(spacing::SPACE_2XS),
            review_comment: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .line_height(font_size::XL)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            review_date: tokens.text(font_size::SM, FontWeight::Regular, &c.text_secondary),

            booking_section: Style::new()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_XL)),
            book_button: Style::new()
                .row()
                .centered()
                .background(&c.primary)
                .padding(Spacing::vertical(spacing::SPACE_LG))
                .radius(radius::LG)
                .gap(spacing::SPACE_SM),
            book_button_text: button_text(tokens, font_size::LG),
        }
    }

    fn render(&self, tokens: &TokenSet, s: &DoctorDetailStyles) -> Node {
        let doctor = self.doctor();

        let mut body = vec![
            self.profile_card(tokens, s, doctor),
            self.info_section(s, "About", vec![Node::text(doctor.bio, &s.bio_text)]),
            self.info_section(
                s,
                "Qualifications",
                bullet_list(
                    s,
                    IconName::CheckCircle,
                    &tokens.colors.success,
                    doctor.qualifications,
                ),
            ),
        ];
        if !doctor.awards.is_empty() {
            body.push(self.info_section(
                s,
                "Awards & Recognition",
                bullet_list(s, IconName::Award, &tokens.colors.warning, doctor.awards),
            ));
        }
        body.push(self.info_section(
            s,
            "Conditions Treated",
            vec![tag_list(s, &s.condition_tag, doctor.conditions)],
        ));
        body.push(self.info_section(
            s,
            "Languages Spoken",
            vec![tag_list(s, &s.language_tag, doctor.languages)],
        ));
        body.push(self.consultations(tokens, s, doctor));
        body.push(self.time_slots(s, doctor));
        body.push(self.reviews(tokens, s));
        body.push(Node::view(
            s.booking_section.clone(),
            vec![Node::view(
                s.book_button.clone(),
                vec![
                    Node::icon(IconName::Calendar, sizing::icon::LG, ON_FILL),
                    Node::text("Book Consultation", &s.book_button_text),
                ],
            )],
        ));
        body.push(Node::spacer(spacing::SPACE_XL));

        Node::view(
            s.container.clone(),
            vec![
                back_header(tokens, &s.title, "Doctor Profile"),
                Node::scroll(Style::new(), body),
            ],
        )
    }
}

impl DoctorDetailScreen {
    fn profile_card(
        &self,
        tokens: &TokenSet,
        s: &DoctorDetailStyles,
        doctor: &DoctorProfile,
    ) -> Node {
        let c = &tokens.colors;

        let mut portrait = vec![Node::image(doctor.image, &s.image)];
        if doctor.verified {
            portrait.push(Node::view(
                s.verified_badge.clone(),
                vec![Node::icon(IconName::CheckCircle, sizing::icon::MD, &c.success)],
            ));
        }

        let mut header = vec![Node::text(doctor.name, &s.doctor_name)];
        if !doctor.awards.is_empty() {
            header.push(Node::icon(IconName::Award, font_size::XL, &c.warning));
        }

        Node::view(
            s.profile_card.clone(),
            vec![
                Node::view(s.image_container.clone(), portrait),
                Node::view(
                    Style::new().flex(1.0),
                    vec![
                        Node::view(s.doctor_header.clone(), header),
                        Node::text(doctor.specialty.name(), &s.specialty),
                        Node::text(format!("{} experience", doctor.experience), &s.experience),
                        Node::view(
                            s.location_row.clone(),
                            vec![
                                Node::icon(IconName::MapPin, sizing::icon::SM, &c.text_secondary),
                                Node::text(
                                    format!("{}, {}", doctor.hospital, doctor.location),
                                    &s.location_text,
                                ),
                            ],
                        ),
                        Node::view(
                            s.rating_row.clone(),
                            vec![
                                Node::filled_icon(IconName::Star, sizing::icon::MD, &c.warning),
                                Node::text(format!("{}", doctor.rating), &s.rating_text),
                                Node::text(
                                    format!("({} reviews)", doctor.reviews),
                                    &s.reviews_text,
                                ),
                                Node::text(
                                    format!("Reg: {}", doctor.registration_id),
                                    &s.registration,
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        )
    }

    fn info_section(&self, s: &DoctorDetailStyles, title: &str, content: Vec<Node>) -> Node {
        Node::view(
            s.section.clone(),
            vec![
                Node::text(title, &s.section_title),
                Node::view(s.info_card.clone(), content),
            ],
        )
    }

    fn consultations(
        &self,
        tokens: &TokenSet,
        s: &DoctorDetailStyles,
        doctor: &DoctorProfile,
    ) -> Node {
        let mut children = vec![Node::text("Consultation Options", &s.section_title)];
        children.extend(
            doctor
                .consultation_types
                .iter()
                .map(|option| consultation_card(tokens, s, option)),
        );
        Node::view(s.section.clone(), children)
    }

    fn time_slots(&self, s: &DoctorDetailStyles, doctor: &DoctorProfile) -> Node {
        let day = |title: &str, slots: &[&str]| {
            Node::view(
                s.day_slots.clone(),
                vec![
                    Node::text(title, &s.day_title),
                    Node::view(
                        s.tag_row.clone(),
                        slots
                            .iter()
                            .map(|slot| {
                                Node::view(
                                    s.time_slot.clone(),
                                    vec![Node::text(*slot, &s.time_slot_text)],
                                )
                            })
                            .collect(),
                    ),
                ],
            )
        };

        Node::view(
            s.section.clone(),
            vec![
                Node::text("Available Time Slots", &s.section_title),
                Node::view(
                    s.info_card.clone(),
                    vec![
                        day("Today", doctor.time_slots.today),
                        day("Tomorrow", doctor.time_slots.tomorrow),
                    ],
                ),
            ],
        )
    }

    fn reviews(&self, tokens: &TokenSet, s: &DoctorDetailStyles) -> Node {
        let mut children = vec![Node::view(
            s.section_header.clone(),
            vec![
                Node::text("Patient Reviews", &s.reviews_title),
                Node::text("View All", &s.view_all),
            ],
        )];
        children.extend(
            DOCTOR_REVIEWS
                .iter()
                .take(REVIEW_PREVIEW_COUNT)
                .map(|review| review_card(tokens, s, review)),
        );
        Node::view(s.section.clone(), children)
    }
}

fn bullet_list(s: &DoctorDetailStyles, icon: IconName, color: &str, items: &[&str]) -> Vec<Node> {
    items
        .iter()
        .map(|item| {
            Node::view(
                s.list_item.clone(),
                vec![
                    Node::icon(icon, sizing::icon::SM, color),
                    Node::text(*item, &s.list_text),
                ],
            )
        })
        .collect()
}

fn tag_list(s: &DoctorDetailStyles, tag: &Style, items: &[&str]) -> Node {
    Node::view(
        s.tag_row.clone(),
        items.iter().map(|item| Node::text(*item, tag)).collect(),
    )
}

fn consultation_card(
    tokens: &TokenSet,
    s: &DoctorDetailStyles,
    option: &ConsultationOption,
) -> Node {
    let (icon, role) = consultation_icon(option.kind);

    let mut pricing = vec![Node::text(option.fee_label(), &s.consultation_fee)];
    if !option.available {
        pricing.push(Node::text("Not Available", &s.unavailable_text));
    }

    let card = if option.available {
        &s.consultation_card
    } else {
        &s.consultation_card_disabled
    };

    Node::view(
        card.clone(),
        vec![Node::view(
            s.consultation_header.clone(),
            vec![
                Node::view(
                    Style::new().flex(1.0),
                    vec![
                        Node::view(
                            s.consultation_title_row.clone(),
                            vec![
                                Node::icon(icon, sizing::icon::MD, tokens.color(role)),
                                Node::text(option.kind.label(), &s.consultation_type),
                            ],
                        ),
                        Node::text(option.duration, &s.consultation_duration),
                    ],
                ),
                Node::view(s.consultation_pricing.clone(), pricing),
            ],
        )],
    )
}

fn review_card(tokens: &TokenSet, s: &DoctorDetailStyles, review: &Review) -> Node {
    let stars = (0..review.rating)
        .map(|_| Node::filled_icon(IconName::Star, sizing::icon::XS, &tokens.colors.warning))
        .collect();

    Node::view(
        s.review_card.clone(),
        vec![
            Node::view(
                s.review_header.clone(),
                vec![
                    Node::text(review.name, &s.reviewer_name),
                    Node::view(s.review_stars.clone(), stars),
                ],
            ),
            Node::text(review.comment, &s.review_comment),
            Node::text(review.date, &s.review_date),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Action;
    use crate::screens::render_once;
    use crate::theme::{dark_tokens, light_tokens};

    fn opacities(node: &Node) -> Vec<f32> {
        let mut found = Vec::new();
        node.walk(&mut |n| {
            if let Some(opacity) = n.style().and_then(|s| s.opacity) {
                found.push(opacity);
            }
        });
        found
    }

    fn star_count(node: &Node) -> usize {
        node.icons()
            .into_iter()
            .filter(|n| matches!(n, Node::Icon { name: IconName::Star, .. }))
            .count()
    }

    // ==========================================================================
    // Content Tests
    // ==========================================================================

    #[test]
    fn test_any_id_shows_the_fixed_profile() {
        let tokens = light_tokens();
        let a = render_once(&DoctorDetailScreen::new("1"), &tokens);
        let b = render_once(&DoctorDetailScreen::new("unknown"), &tokens);
        assert_eq!(a, b);
        assert!(a.contains_text("Dr. Sarah Johnson"));
        assert!(a.contains_text("Cardiologist"));
        assert!(a.contains_text("12 years experience"));
        assert!(a.contains_text("Apollo Hospital, Bandra, Mumbai"));
        assert!(a.contains_text("(256 reviews)"));
        assert!(a.contains_text("Reg: MH12345"));
    }

    #[test]
    fn test_sections_present() {
        let node = render_once(&DoctorDetailScreen::new("1"), &light_tokens());
        for text in [
            "Doctor Profile",
            "About",
            "Qualifications",
            "MD Cardiology",
            "Awards & Recognition",
            "Best Cardiologist 2023",
            "Conditions Treated",
            "Coronary Artery Disease",
            "Languages Spoken",
            "Hindi",
            "Consultation Options",
            "Available Time Slots",
            "Today",
            "Tomorrow",
            "4:30 PM",
            "5:00 PM",
            "Patient Reviews",
            "Book Consultation",
        ] {
            assert!(node.contains_text(text), "missing {:?}", text);
        }
        assert!(!node.contains_text("9:00 AM"));
    }

    #[test]
    fn test_consultation_options() {
        let node = render_once(&DoctorDetailScreen::new("1"), &light_tokens());
        for text in [
            "Video Consultation",
            "Audio Consultation",
            "In-Clinic Visit",
            "Home Visit",
            "₹800",
            "₹1,500",
        ] {
            assert!(node.contains_text(text), "missing {:?}", text);
        }
        let unavailable = node
            .texts()
            .into_iter()
            .filter(|t| *t == "Not Available")
            .count();
        assert_eq!(unavailable, 1);
        assert_eq!(opacities(&node), vec![UNAVAILABLE_OPACITY]);
    }

    #[test]
    fn test_reviews_limited_with_one_star_per_point() {
        let node = render_once(&DoctorDetailScreen::new("1"), &light_tokens());
        assert!(node.contains_text("Rajesh Kumar"));
        assert!(node.contains_text("Amit Patel"));

        let review_stars: usize = DOCTOR_REVIEWS
            .iter()
            .take(REVIEW_PREVIEW_COUNT)
            .map(|r| usize::from(r.rating))
            .sum();
        // one more star for the profile rating
        assert_eq!(star_count(&node), review_stars + 1);
    }

    #[test]
    fn test_back_is_the_only_action() {
        let node = render_once(&DoctorDetailScreen::new("1"), &light_tokens());
        assert_eq!(node.actions(), vec![&Action::Back]);
    }

    // ==========================================================================
    // Style Tests
    // ==========================================================================

    #[test]
    fn test_styles_follow_mode() {
        let light = DoctorDetailScreen::derive_styles(&light_tokens());
        let dark = DoctorDetailScreen::derive_styles(&dark_tokens());
        assert_ne!(light, dark);
        assert_eq!(light.language_tag.background_color.as_deref(), Some("#3B82F620"));
        assert_eq!(dark.language_tag.background_color.as_deref(), Some("#60A5FA20"));
        assert_eq!(dark.consultation_card_disabled.opacity, Some(UNAVAILABLE_OPACITY));
        assert_eq!(dark.consultation_card.opacity, None);
    }

    #[test]
    fn test_route_carries_id() {
        let screen = DoctorDetailScreen::new("7");
        assert_eq!(screen.route(), Route::doctor(7));
        assert_eq!(screen.id(), "7");
    }
}
