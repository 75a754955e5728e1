//! Consult tab: consultation modes and available doctors

use app_core::{ConsultationKind, DoctorSummary, TOP_DOCTORS};

use super::{
    button_text, card, icon_tile, list_card, meta_item, primary_button, rating_row,
    render_search, screen_container, search_bar, search_input, section, section_title, Screen,
};
use crate::components::{Action, Alignment, Dimension, JustifyContent, Node, Spacing, Style};
use crate::icons::{consultation_icon, IconName};
use crate::navigation::Route;
use crate::theme::TokenSet;
use crate::tokens::{radius, sizing, spacing};
use crate::typography::{font_size, FontWeight};

/// Consult tab root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsultScreen;

/// Style table for [`ConsultScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultStyles {
    container: Style,
    header: Style,
    title: Style,
    subtitle: Style,
    search_bar: Style,
    search_input: Style,
    section: Style,
    section_title: Style,

    modes_grid: Style,
    mode_card: Style,
    mode_label: Style,

    doctor_card: Style,
    doctor_image: Style,
    doctor_name: Style,
    doctor_specialty: Style,
    doctor_experience: Style,
    rating_text: Style,
    reviews_text: Style,
    doctor_footer: Style,
    availability_text: Style,
    fee: Style,
    book_button: Style,
    book_button_text: Style,
}

impl Screen for ConsultScreen {
    type Styles = ConsultStyles;
    const NAME: &'static str = "Consult";

    fn route(&self) -> Route {
        Route::Consult
    }

    fn derive_styles(tokens: &TokenSet) -> ConsultStyles {
        let c = &tokens.colors;
        ConsultStyles {
            container: screen_container(tokens),
            header: Style::new().padding(Spacing::symmetric(spacing::SPACE_LG, spacing::GUTTER)),
            title: tokens.text(font_size::title::LG, FontWeight::Bold, &c.text),
            subtitle: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::top(spacing::SPACE_XS)),
            search_bar: search_bar(tokens),
            search_input: search_input(tokens),
            section: section(),
            section_title: section_title(tokens),

            modes_grid: Style::new()
                .row()
                .wrap()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .gap(spacing::SPACE_MD),
            mode_card: card(tokens)
                .padding(Spacing::uniform(spacing::SPACE_LG))
                .align_items(Alignment::Center)
                .width(Dimension::percent(47.0)),
            mode_label: tokens
                .text(font_size::MD, FontWeight::SemiBold, &c.text)
                .margin(Spacing::top(spacing::SPACE_SM)),

            doctor_card: list_card(tokens)
                .row()
                .padding(Spacing::uniform(spacing::SPACE_LG)),
            doctor_image: Style::new()
                .size(sizing::avatar::MD)
                .radius(sizing::avatar::MD / 2.0)
                .margin(Spacing::right(spacing::SPACE_LG)),
            doctor_name: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_2XS)),
            doctor_specialty: tokens
                .text(font_size::MD, FontWeight::Medium, &c.primary)
                .margin(Spacing::bottom(spacing::SPACE_2XS)),
            doctor_experience: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            rating_text: tokens
                .text(font_size::SM, FontWeight::Medium, &c.warning)
                .margin(Spacing::left(spacing::SPACE_XS)),
            reviews_text: tokens
                .text(font_size::TINY, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_2XS)),
            doctor_footer: Style::new()
                .row()
                .justify(JustifyContent::SpaceBetween)
                .align_items(Alignment::Center)
                .margin(Spacing::top(spacing::SPACE_SM)),
            availability_text: tokens
                .text(font_size::XS, FontWeight::Medium, &c.success)
                .margin(Spacing::left(spacing::SPACE_XS)),
            fee: tokens.text(font_size::MD, FontWeight::SemiBold, &c.success),
            book_button: primary_button(tokens, spacing::SPACE_SM, spacing::SPACE_LG)
                .align_self(Alignment::FlexStart),
            book_button_text: button_text(tokens, font_size::SM),
        }
    }

    fn render(&self, tokens: &TokenSet, s: &ConsultStyles) -> Node {
        let modes = ConsultationKind::all()
            .into_iter()
            .map(|kind| {
                let (icon, role) = consultation_icon(kind);
                Node::view(
                    s.mode_card.clone(),
                    vec![
                        Node::view(
                            icon_tile(tokens, role, spacing::SPACE_MD, radius::LG),
                            vec![Node::icon(icon, sizing::icon::XL, tokens.color(role))],
                        ),
                        Node::text(kind.label(), &s.mode_label),
                    ],
                )
            })
            .collect();

        let mut doctors = vec![Node::text("Available Doctors", &s.section_title)];
        doctors.extend(
            TOP_DOCTORS
                .iter()
                .map(|doctor| doctor_card(tokens, s, doctor)),
        );

        Node::scroll(
            s.container.clone(),
            vec![
                Node::view(
                    s.header.clone(),
                    vec![
                        Node::text("Consult a Doctor", &s.title),
                        Node::text("Talk to a specialist your way", &s.subtitle),
                    ],
                ),
                render_search(
                    tokens,
                    &s.search_bar,
                    &s.search_input,
                    "Search doctors, specialties...",
                ),
                Node::view(
                    s.section.clone(),
                    vec![
                        Node::text("Consultation Modes", &s.section_title),
                        Node::view(s.modes_grid.clone(), modes),
                    ],
                ),
                Node::view(s.section.clone(), doctors),
                Node::spacer(spacing::SPACE_XL),
            ],
        )
    }
}

fn doctor_card(tokens: &TokenSet, s: &ConsultStyles, doctor: &DoctorSummary) -> Node {
    Node::pressable(
        s.doctor_card.clone(),
        Action::Navigate(Route::doctor(doctor.id)),
        vec![
            Node::image(doctor.image, &s.doctor_image),
            Node::view(
                Style::new().flex(1.0),
                vec![
                    Node::text(doctor.name, &s.doctor_name),
                    Node::text(doctor.specialty.name(), &s.doctor_specialty),
                    Node::text(
                        format!("{} experience", doctor.experience),
                        &s.doctor_experience,
                    ),
                    rating_row(
                        tokens,
                        doctor.rating,
                        doctor.reviews,
                        &s.rating_text,
                        &s.reviews_text,
                    ),
                    Node::view(
                        s.doctor_footer.clone(),
                        vec![
                            meta_item(
                                IconName::Clock,
                                &tokens.colors.success,
                                doctor.next_available,
                                &s.availability_text,
                            ),
                            Node::text(doctor.fee_label(), &s.fee),
                        ],
                    ),
                ],
            ),
            Node::view(
                s.book_button.clone(),
                vec![Node::text("Book", &s.book_button_text)],
            ),
        ],
    )
}
