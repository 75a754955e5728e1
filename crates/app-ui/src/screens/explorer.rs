//! Explorer dashboard

use app_core::{
    CenterSummary, DoctorSummary, LabTest, QuickAction, Specialization, CURRENT_USER,
    DIAGNOSTIC_CENTERS, FEATURED_TESTS, SPECIALIZATIONS, TOP_DOCTORS,
};

use super::{
    button_text, card, icon_tile, list_card, meta_item, primary_button, rating_row,
    render_search, screen_container, search_bar, search_input, section, section_title, Screen,
};
use crate::components::{
    Action, Alignment, Dimension, HealthScoreMeter, HealthScoreStyles, JustifyContent, Node,
    SectionHeader, SectionHeaderStyles, Spacing, Style, ThemeToggle, ThemeToggleStyles, ON_FILL,
};
use crate::icons::{quick_action_icon, specialty_icon, IconName};
use crate::navigation::Route;
use crate::theme::TokenSet;
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::{font_size, FontWeight, TextAlign};

/// Diameter of the health score ring
const SCORE_SIZE: f32 = 150.0;

/// Explorer tab root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorerScreen;

/// Style table for [`ExplorerScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerStyles {
    container: Style,
    header: Style,
    greeting: Style,
    user_name: Style,
    notification_button: Style,
    notification_dot: Style,
    toggle_wrapper: Style,
    search_bar: Style,
    search_input: Style,
    section: Style,
    section_title: Style,
    section_header: SectionHeaderStyles,
    toggle: ThemeToggleStyles,
    health: HealthScoreStyles,

    quick_actions_grid: Style,
    quick_action_card: Style,
    quick_action_title: Style,

    horizontal_scroll: Style,
    test_card: Style,
    test_image: Style,
    discount_badge: Style,
    discount_text: Style,
    test_content: Style,
    test_name: Style,
    test_description: Style,
    test_meta: Style,
    meta_text: Style,
    test_pricing: Style,
    test_price: Style,
    test_original_price: Style,
    book_button: Style,
    book_button_text: Style,

    specializations_grid: Style,
    specialization_card: Style,
    specialization_name: Style,
    doctor_count: Style,

    center_card: Style,
    center_image: Style,
    center_info: Style,
    center_name: Style,
    center_location: Style,
    center_address: Style,
    center_distance: Style,
    center_meta: Style,
    rating_text: Style,
    reviews_text: Style,
    tests_count: Style,
    center_actions: Style,
    view_details_button: Style,
    view_details_text: Style,
    book_test_button: Style,
    book_test_text: Style,

    doctor_card: Style,
    doctor_image: Style,
    doctor_header: Style,
    doctor_name: Style,
    doctor_specialty: Style,
    doctor_experience: Style,
    doctor_meta: Style,
    availability_text: Style,
    consultation_fee: Style,
    consult_button: Style,
    consult_button_text: Style,
}

impl Screen for ExplorerScreen {
    type Styles = ExplorerStyles;
    const NAME: &'static str = "Explorer";

    fn route(&self) -> Route {
        Route::Explorer
    }

    fn derive_styles(tokens: &TokenSet) -> ExplorerStyles {
        let c = &tokens.colors;
        let row = || Style::new().row().align_items(Alignment::Center);
        let small_button = |background: &str| {
            Style::new()
                .flex(1.0)
                .background(background)
                .padding(Spacing::vertical(spacing::SPACE_SM))
                .radius(radius::BADGE)
                .align_items(Alignment::Center)
        };

        ExplorerStyles {
            container: screen_container(tokens),
            header: row()
                .justify(JustifyContent::SpaceBetween)
                .padding(Spacing::symmetric(spacing::SPACE_LG, spacing::GUTTER)),
            greeting: tokens.text(font_size::MD, FontWeight::Regular, &c.text_secondary),
            user_name: tokens
                .text(font_size::title::BASE, FontWeight::Bold, &c.text)
                .margin(Spacing::top(spacing::SPACE_2XS)),
            notification_button: Style::new()
                .size(sizing::HEADER_BUTTON)
                .radius(sizing::HEADER_BUTTON / 2.0)
                .background(&c.surface)
                .border(border::THIN, &c.border)
                .centered(),
            notification_dot: Style::new()
                .absolute(spacing::SPACE_SM, spacing::SPACE_SM)
                .size(spacing::SPACE_SM)
                .radius(spacing::SPACE_XS)
                .background(&c.error),
            toggle_wrapper: Style::new()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_XL)),
            search_bar: search_bar(tokens),
            search_input: search_input(tokens),
            section: section(),
            section_title: section_title(tokens),
            section_header: SectionHeader::computed_styles(tokens),
            toggle: ThemeToggle::computed_styles(tokens),
            health: HealthScoreMeter::new(i32::from(CURRENT_USER.health_score), SCORE_SIZE)
                .computed_styles(tokens),

            quick_actions_grid: Style::new()
                .row()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .gap(spacing::SPACE_MD),
            quick_action_card: card(tokens)
                .flex(1.0)
                .padding(Spacing::uniform(spacing::SPACE_LG))
                .align_items(Alignment::Center),
            quick_action_title: tokens
                .text(font_size::SM, FontWeight::Medium, &c.text)
                .text_align(TextAlign::Center),

            horizontal_scroll: Style::new().padding(Spacing::left(spacing::GUTTER)),
            test_card: card(tokens)
                .margin(Spacing::right(spacing::SPACE_LG))
                .width(Dimension::px(sizing::TEST_CARD_WIDTH))
                .clip(),
            test_image: Style::new()
                .width(Dimension::percent(100.0))
                .height(Dimension::px(sizing::TEST_CARD_IMAGE)),
            discount_badge: Style::new()
                .absolute(spacing::SPACE_SM, spacing::SPACE_SM)
                .background(&c.error)
                .padding(Spacing::symmetric(spacing::SPACE_XS, spacing::SPACE_SM))
                .radius(radius::BADGE),
            discount_text: tokens.text(font_size::TINY, FontWeight::SemiBold, ON_FILL),
            test_content: Style::new().padding(Spacing::uniform(spacing::SPACE_LG)),
            test_name: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            test_description: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            test_meta: Style::new()
                .row()
                .gap(spacing::SPACE_LG)
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            meta_text: tokens
                .text(font_size::XS, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS)),
            test_pricing: row().margin(Spacing::bottom(spacing::SPACE_MD)),
            test_price: tokens
                .text(font_size::XL, FontWeight::Bold, &c.success)
                .margin(Spacing::right(spacing::SPACE_SM)),
            test_original_price: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .strikethrough(),
            book_button: primary_button(tokens, 10.0, 0.0),
            book_button_text: button_text(tokens, font_size::MD),

            specializations_grid: Style::new()
                .row()
                .wrap()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .gap(spacing::SPACE_MD),
            specialization_card: card(tokens)
                .padding(Spacing::uniform(spacing::SPACE_LG))
                .align_items(Alignment::Center)
                .width(Dimension::percent(22.0)),
            specialization_name: tokens
                .text(font_size::XS, FontWeight::Medium, &c.text)
                .text_align(TextAlign::Center)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            doctor_count: tokens
                .text(font_size::MICRO, FontWeight::Regular, &c.text_secondary)
                .text_align(TextAlign::Center),

            center_card: list_card(tokens).row().clip(),
            center_image: Style::new().size(sizing::avatar::LG),
            center_info: Style::new()
                .flex(1.0)
                .padding(Spacing::uniform(spacing::SPACE_LG)),
            center_name: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_COMPACT)),
            center_location: row().margin(Spacing::bottom(spacing::SPACE_SM)),
            center_address: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_XS))
                .flex(1.0),
            center_distance: tokens.text(font_size::SM, FontWeight::Medium, &c.primary),
            center_meta: row()
                .justify(JustifyContent::SpaceBetween)
                .margin(Spacing::bottom(spacing::SPACE_MD)),
            rating_text: tokens
                .text(font_size::SM, FontWeight::Medium, &c.warning)
                .margin(Spacing::left(spacing::SPACE_XS)),
            reviews_text: tokens
                .text(font_size::TINY, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::left(spacing::SPACE_2XS)),
            tests_count: tokens.text(font_size::XS, FontWeight::Regular, &c.text_secondary),
            center_actions: Style::new().row().gap(spacing::SPACE_SM),
            view_details_button: small_button(&c.card),
            view_details_text: tokens.text(font_size::XS, FontWeight::Medium, &c.text),
            book_test_button: small_button(&c.primary),
            book_test_text: button_text(tokens, font_size::XS),

            doctor_card: list_card(tokens)
                .row()
                .padding(Spacing::uniform(spacing::SPACE_LG)),
            doctor_image: Style::new()
                .size(sizing::avatar::MD)
                .radius(sizing::avatar::MD / 2.0)
                .margin(Spacing::right(spacing::SPACE_LG)),
            doctor_header: Style::new()
                .row()
                .justify(JustifyContent::SpaceBetween)
                .align_items(Alignment::FlexStart)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            doctor_name: tokens
                .text(font_size::LG, FontWeight::SemiBold, &c.text)
                .flex(1.0),
            doctor_specialty: tokens
                .text(font_size::MD, FontWeight::Medium, &c.primary)
                .margin(Spacing::bottom(spacing::SPACE_2XS)),
            doctor_experience: tokens
                .text(font_size::SM, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            doctor_meta: row().justify(JustifyContent::SpaceBetween),
            availability_text: tokens
                .text(font_size::XS, FontWeight::Medium, &c.success)
                .margin(Spacing::left(spacing::SPACE_XS)),
            consultation_fee: tokens.text(font_size::MD, FontWeight::SemiBold, &c.success),
            consult_button: primary_button(tokens, spacing::SPACE_MD, spacing::SPACE_LG)
                .align_self(Alignment::FlexStart),
            consult_button_text: button_text(tokens, font_size::SM),
        }
    }

    fn render(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        Node::scroll(
            s.container.clone(),
            vec![
                self.header(s),
                Node::view(
                    s.toggle_wrapper.clone(),
                    vec![ThemeToggle::new(tokens.mode).render(&s.toggle)],
                ),
                self.search(tokens, s),
                self.health_score(s),
                self.quick_actions(tokens, s),
                self.featured_tests(tokens, s),
                self.specializations(tokens, s),
                self.diagnostic_centers(tokens, s),
                self.top_doctors(tokens, s),
                Node::spacer(spacing::SPACE_XL),
            ],
        )
    }
}

impl ExplorerScreen {
    fn header(&self, s: &ExplorerStyles) -> Node {
        Node::view(
            s.header.clone(),
            vec![
                Node::view(
                    Style::new().flex(1.0),
                    vec![
                        Node::text("Good Morning!", &s.greeting),
                        Node::text(CURRENT_USER.name, &s.user_name),
                    ],
                ),
                Node::view(
                    s.notification_button.clone(),
                    vec![Node::view(s.notification_dot.clone(), vec![])],
                ),
            ],
        )
    }

    fn search(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let mut search = render_search(
            tokens,
            &s.search_bar,
            &s.search_input,
            "Search doctors, tests, hospitals...",
        );
        // Filter button trails the field inside the bar
        if let Node::View { children, .. } = &mut search {
            if let Some(Node::View { children: bar, .. }) = children.first_mut() {
                bar.push(Node::view(
                    Style::new().margin(Spacing::left(spacing::SPACE_MD)),
                    vec![Node::icon(
                        IconName::Filter,
                        sizing::icon::LG,
                        &tokens.colors.text_secondary,
                    )],
                ));
            }
        }
        search
    }

    fn health_score(&self, s: &ExplorerStyles) -> Node {
        let meter = HealthScoreMeter::new(i32::from(CURRENT_USER.health_score), SCORE_SIZE);
        Node::view(
            s.section.clone().align_items(Alignment::Center),
            vec![
                Node::text("Your Health Score", &s.section_title),
                meter.render(&s.health),
            ],
        )
    }

    fn quick_actions(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let tiles = QuickAction::all()
            .into_iter()
            .map(|action| {
                let (icon, role) = quick_action_icon(action);
                Node::pressable(
                    s.quick_action_card.clone(),
                    Action::Navigate(quick_action_route(action)),
                    vec![
                        Node::view(
                            icon_tile(tokens, role, spacing::SPACE_MD, radius::LG)
                                .margin(Spacing::bottom(spacing::SPACE_SM)),
                            vec![Node::icon(icon, sizing::icon::XL, tokens.color(role))],
                        ),
                        Node::text(action.title(), &s.quick_action_title),
                    ],
                )
            })
            .collect();

        Node::view(
            s.section.clone(),
            vec![
                Node::text("Quick Actions", &s.section_title),
                Node::view(s.quick_actions_grid.clone(), tiles),
            ],
        )
    }

    fn featured_tests(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let cards = FEATURED_TESTS
            .iter()
            .map(|test| self.test_card(tokens, s, test))
            .collect();

        Node::view(
            s.section.clone(),
            vec![
                SectionHeader::new("Featured Blood Tests")
                    .with_link(Route::LabTests)
                    .render(&s.section_header),
                Node::hscroll(s.horizontal_scroll.clone(), cards),
            ],
        )
    }

    fn test_card(&self, tokens: &TokenSet, s: &ExplorerStyles, test: &LabTest) -> Node {
        let muted = &tokens.colors.text_secondary;
        Node::view(
            s.test_card.clone(),
            vec![
                Node::image(test.image, &s.test_image),
                Node::view(
                    s.discount_badge.clone(),
                    vec![Node::text(test.discount_label(), &s.discount_text)],
                ),
                Node::view(
                    s.test_content.clone(),
                    vec![
                        Node::text(test.name, &s.test_name),
                        Node::text(test.description, &s.test_description),
                        Node::view(
                            s.test_meta.clone(),
                            vec![
                                meta_item(
                                    IconName::TestTube,
                                    muted,
                                    format!("{} parameters", test.parameters),
                                    &s.meta_text,
                                ),
                                meta_item(IconName::Clock, muted, test.report_time, &s.meta_text),
                            ],
                        ),
                        Node::view(
                            s.test_pricing.clone(),
                            vec![
                                Node::text(test.price_label(), &s.test_price),
                                Node::text(test.original_price_label(), &s.test_original_price),
                            ],
                        ),
                        Node::view(
                            s.book_button.clone(),
                            vec![Node::text("Book Now", &s.book_button_text)],
                        ),
                    ],
                ),
            ],
        )
    }

    fn specializations(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let cards = SPECIALIZATIONS
            .iter()
            .map(|spec| self.specialization_card(tokens, s, spec))
            .collect();

        Node::view(
            s.section.clone(),
            vec![
                SectionHeader::new("Popular Specializations")
                    .with_link(Route::Specializations)
                    .render(&s.section_header),
                Node::view(s.specializations_grid.clone(), cards),
            ],
        )
    }

    fn specialization_card(
        &self,
        tokens: &TokenSet,
        s: &ExplorerStyles,
        spec: &Specialization,
    ) -> Node {
        let (icon, role) = specialty_icon(spec.specialty);
        Node::pressable(
            s.specialization_card.clone(),
            Action::Navigate(Route::specialty(spec.specialty.slug())),
            vec![
                Node::view(
                    icon_tile(tokens, role, spacing::SPACE_SM, radius::MD)
                        .margin(Spacing::bottom(spacing::SPACE_SM)),
                    vec![Node::icon(icon, sizing::icon::LG, tokens.color(role))],
                ),
                Node::text(spec.specialty.name(), &s.specialization_name),
                Node::text(format!("{} doctors", spec.doctors), &s.doctor_count),
            ],
        )
    }

    fn diagnostic_centers(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let mut children = vec![SectionHeader::new("Diagnostic Centers")
            .with_link(Route::DiagnosticCenters)
            .render(&s.section_header)];
        children.extend(
            DIAGNOSTIC_CENTERS
                .iter()
                .map(|center| self.center_card(tokens, s, center)),
        );
        Node::view(s.section.clone(), children)
    }

    fn center_card(&self, tokens: &TokenSet, s: &ExplorerStyles, center: &CenterSummary) -> Node {
        Node::pressable(
            s.center_card.clone(),
            Action::Navigate(Route::diagnostic_center(center.id)),
            vec![
                Node::image(center.image, &s.center_image),
                Node::view(
                    s.center_info.clone(),
                    vec![
                        Node::text(center.name, &s.center_name),
                        Node::view(
                            s.center_location.clone(),
                            vec![
                                Node::icon(
                                    IconName::MapPin,
                                    sizing::icon::XS,
                                    &tokens.colors.text_secondary,
                                ),
                                Node::text(center.address, &s.center_address),
                                Node::text(center.distance, &s.center_distance),
                            ],
                        ),
                        Node::view(
                            s.center_meta.clone(),
                            vec![
                                rating_row(
                                    tokens,
                                    center.rating,
                                    center.reviews,
                                    &s.rating_text,
                                    &s.reviews_text,
                                ),
                                Node::text(
                                    format!("{} tests", center.tests_available),
                                    &s.tests_count,
                                ),
                            ],
                        ),
                        Node::view(
                            s.center_actions.clone(),
                            vec![
                                Node::view(
                                    s.view_details_button.clone(),
                                    vec![Node::text("View Details", &s.view_details_text)],
                                ),
                                Node::view(
                                    s.book_test_button.clone(),
                                    vec![Node::text("Book Test", &s.book_test_text)],
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        )
    }

    fn top_doctors(&self, tokens: &TokenSet, s: &ExplorerStyles) -> Node {
        let mut children = vec![SectionHeader::new("Top Rated Doctors")
            .with_link(Route::Doctors)
            .render(&s.section_header)];
        children.extend(
            TOP_DOCTORS
                .iter()
                .map(|doctor| self.doctor_card(tokens, s, doctor)),
        );
        Node::view(s.section.clone(), children)
    }

    fn doctor_card(&self, tokens: &TokenSet, s: &ExplorerStyles, doctor: &DoctorSummary) -> Node {
        Node::pressable(
            s.doctor_card.clone(),
            Action::Navigate(Route::doctor(doctor.id)),
            vec![
                Node::image(doctor.image, &s.doctor_image),
                Node::view(
                    Style::new().flex(1.0),
                    vec![
                        Node::view(
                            s.doctor_header.clone(),
                            vec![
                                Node::text(doctor.name, &s.doctor_name),
                                rating_row(
                                    tokens,
                                    doctor.rating,
                                    doctor.reviews,
                                    &s.rating_text,
                                    &s.reviews_text,
                                ),
                            ],
                        ),
                        Node::text(doctor.specialty.name(), &s.doctor_specialty),
                        Node::text(
                            format!("{} experience", doctor.experience),
                            &s.doctor_experience,
                        ),
                        Node::view(
                            s.doctor_meta.clone(),
                            vec![
                                meta_item(
                                    IconName::Clock,
                                    &tokens.colors.success,
                                    doctor.next_available,
                                    &s.availability_text,
                                ),
                                Node::text(doctor.fee_label(), &s.consultation_fee),
                            ],
                        ),
                    ],
                ),
                Node::view(
                    s.consult_button.clone(),
                    vec![Node::text("Consult", &s.consult_button_text)],
                ),
            ],
        )
    }
}

/// Where a quick action tile leads
pub fn quick_action_route(action: QuickAction) -> Route {
    match action {
        QuickAction::BookTest => Route::LabTests,
        QuickAction::FindDoctor => Route::Doctors,
        QuickAction::Wallet => Route::Wallet,
        QuickAction::Appointments => Route::Appointments,
    }
}
