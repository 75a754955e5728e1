//! Profile tab: account card, health summary, menu and appearance

use app_core::{format_inr, ProfileMenuItem, CURRENT_USER};

use super::{card, icon_tile, screen_container, section, section_title, Screen};
use crate::components::{
    Action, Alignment, Node, ScoreBand, Spacing, Style, ThemeToggle, ThemeToggleStyles,
};
use crate::icons::{menu_icon, IconName};
use crate::navigation::Route;
use crate::theme::TokenSet;
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::{font_size, FontWeight, TextAlign};

/// Where a profile menu row leads
pub fn menu_route(item: ProfileMenuItem) -> Route {
    match item {
        ProfileMenuItem::Appointments => Route::Appointments,
        ProfileMenuItem::MedicalRecords => Route::MedicalRecords,
        ProfileMenuItem::Wallet => Route::Wallet,
        ProfileMenuItem::FamilyMembers => Route::FamilyMembers,
        ProfileMenuItem::Help => Route::Help,
        ProfileMenuItem::Settings => Route::Settings,
    }
}

/// Profile tab root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileScreen;

/// Style table for [`ProfileScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStyles {
    container: Style,
    header: Style,
    title: Style,
    section: Style,
    section_title: Style,

    user_card: Style,
    avatar: Style,
    user_name: Style,
    user_detail: Style,

    stats_row: Style,
    stat_card: Style,
    stat_value: Style,
    stat_label: Style,
    score_value: Style,

    menu_card: Style,
    menu_row: Style,
    menu_row_last: Style,
    menu_title: Style,

    toggle_wrapper: Style,
    toggle: ThemeToggleStyles,
}

impl Screen for ProfileScreen {
    type Styles = ProfileStyles;
    const NAME: &'static str = "Profile";

    fn route(&self) -> Route {
        Route::Profile
    }

    fn derive_styles(tokens: &TokenSet) -> ProfileStyles {
        let c = &tokens.colors;
        let score_role = ScoreBand::for_score(CURRENT_USER.health_score).role();
        let menu_row = Style::new()
            .row()
            .align_items(Alignment::Center)
            .padding(Spacing::uniform(spacing::SPACE_LG));

        ProfileStyles {
            container: screen_container(tokens),
            header: Style::new().padding(Spacing::symmetric(spacing::SPACE_LG, spacing::GUTTER)),
            title: tokens.text(font_size::title::LG, FontWeight::Bold, &c.text),
            section: section(),
            section_title: section_title(tokens),

            user_card: card(tokens)
                .row()
                .align_items(Alignment::Center)
                .padding(Spacing::uniform(spacing::SPACE_XL))
                .margin(Spacing::individual(
                    0.0,
                    spacing::GUTTER,
                    spacing::SECTION_GAP,
                    spacing::GUTTER,
                )),
            avatar: Style::new()
                .size(sizing::avatar::MD)
                .radius(sizing::avatar::MD / 2.0)
                .margin(Spacing::right(spacing::SPACE_LG)),
            user_name: tokens
                .text(font_size::title::BASE, FontWeight::Bold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            user_detail: tokens
                .text(font_size::MD, FontWeight::Regular, &c.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_2XS)),

            stats_row: Style::new()
                .row()
                .padding(Spacing::horizontal(spacing::GUTTER))
                .gap(spacing::SPACE_MD),
            stat_card: card(tokens)
                .flex(1.0)
                .padding(Spacing::symmetric(spacing::SPACE_LG, spacing::SPACE_SM))
                .align_items(Alignment::Center),
            stat_value: tokens
                .text(font_size::XL, FontWeight::Bold, &c.text)
                .margin(Spacing::bottom(spacing::SPACE_XS)),
            stat_label: tokens
                .text(font_size::XS, FontWeight::Regular, &c.text_secondary)
                .text_align(TextAlign::Center),
            score_value: tokens
                .text(font_size::XL, FontWeight::Bold, tokens.color(score_role))
                .margin(Spacing::bottom(spacing::SPACE_XS)),

            menu_card: card(tokens)
                .margin(Spacing::horizontal(spacing::GUTTER))
                .clip(),
            menu_row_last: menu_row.clone(),
            menu_row: menu_row.border_bottom(border::THIN, &c.border),
            menu_title: tokens
                .text(font_size::LG, FontWeight::Medium, &c.text)
                .flex(1.0)
                .margin(Spacing::left(spacing::SPACE_MD)),

            toggle_wrapper: Style::new().padding(Spacing::horizontal(spacing::GUTTER)),
            toggle: ThemeToggle::computed_styles(tokens),
        }
    }

    fn render(&self, tokens: &TokenSet, s: &ProfileStyles) -> Node {
        let user = &CURRENT_USER;

        let stat = |value: String, label: &str, value_style: &Style| {
            Node::view(
                s.stat_card.clone(),
                vec![Node::text(value, value_style), Node::text(label, &s.stat_label)],
            )
        };

        let items = ProfileMenuItem::all();
        let rows = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let (icon, role) = menu_icon(*item);
                let row = if i + 1 == items.len() {
                    &s.menu_row_last
                } else {
                    &s.menu_row
                };
                Node::pressable(
                    row.clone(),
                    Action::Navigate(menu_route(*item)),
                    vec![
                        Node::view(
                            icon_tile(tokens, role, spacing::SPACE_SM, radius::MD),
                            vec![Node::icon(icon, sizing::icon::LG, tokens.color(role))],
                        ),
                        Node::text(item.title(), &s.menu_title),
                        Node::icon(
                            IconName::ChevronRight,
                            sizing::icon::LG,
                            &tokens.colors.text_secondary,
                        ),
                    ],
                )
            })
            .collect();

        Node::scroll(
            s.container.clone(),
            vec![
                Node::view(s.header.clone(), vec![Node::text("Profile", &s.title)]),
                Node::view(
                    s.user_card.clone(),
                    vec![
                        Node::image(user.avatar, &s.avatar),
                        Node::view(
                            Style::new().flex(1.0),
                            vec![
                                Node::text(user.name, &s.user_name),
                                Node::text(user.email, &s.user_detail),
                                Node::text(user.phone, &s.user_detail),
                            ],
                        ),
                    ],
                ),
                Node::view(
                    s.section.clone(),
                    vec![
                        Node::text("Health Summary", &s.section_title),
                        Node::view(
                            s.stats_row.clone(),
                            vec![
                                stat(user.health_score.to_string(), "Health Score", &s.score_value),
                                stat(user.appointments.to_string(), "Appointments", &s.stat_value),
                                stat(user.reports.to_string(), "Reports", &s.stat_value),
                                stat(format_inr(user.wallet_balance), "Wallet", &s.stat_value),
                            ],
                        ),
                    ],
                ),
                Node::view(
                    s.section.clone(),
                    vec![
                        Node::text("Account", &s.section_title),
                        Node::view(s.menu_card.clone(), rows),
                    ],
                ),
                Node::view(
                    s.section.clone(),
                    vec![
                        Node::text("Appearance", &s.section_title),
                        Node::view(
                            s.toggle_wrapper.clone(),
                            vec![ThemeToggle::new(tokens.mode).render(&s.toggle)],
                        ),
                    ],
                ),
                Node::spacer(spacing::SPACE_XL),
            ],
        )
    }
}
