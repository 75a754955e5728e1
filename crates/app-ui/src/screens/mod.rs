//! Screens
//!
//! A screen is a pure rendering of the current token set and its literal
//! dataset into a [`Node`] tree. Each screen derives a style table from the
//! tokens ([`Screen::derive_styles`]) and renders from that table.
//!
//! [`Mounted`] keeps a screen bound to the [`ThemeStore`]: it holds the
//! derived table and re-derives it when its subscription reports a change.
//! [`Shell`] owns the store and the navigation state, mounts the tab screens
//! and dispatches the [`Action`]s that taps produce.

use std::fmt::Debug;
use std::sync::Arc;

use crate::components::{
    Action, Alignment, Dimension, JustifyContent, Node, Spacing, Style, TabBar, ON_FILL,
};
use crate::icons::IconName;
use crate::navigation::{NavigationState, NavigationTab, Navigator, Route};
use crate::store::{ThemeStore, ThemeSubscription};
use crate::theme::{ColorRole, TokenSet};
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::{font_size, FontWeight};

pub mod consult;
pub mod diagnostic_center;
pub mod doctor_detail;
pub mod explorer;
pub mod profile;

pub use consult::ConsultScreen;
pub use diagnostic_center::DiagnosticCenterScreen;
pub use doctor_detail::DoctorDetailScreen;
pub use explorer::ExplorerScreen;
pub use lab_tests::LabTestsScreen;
pub use profile::ProfileScreen;

// =============================================================================
// Screen Trait
// =============================================================================

/// A full-page presentation unit bound to a route
pub trait Screen {
    /// Style table derived from the tokens
    type Styles: Clone + PartialEq + Debug;

    /// Display name
    const NAME: &'static str;

    /// Route this screen is shown for
    fn route(&self) -> Route;

    /// Derive the style table; depends only on `tokens`
    fn derive_styles(tokens: &TokenSet) -> Self::Styles;

    /// Render the layout tree
    fn render(&self, tokens: &TokenSet, styles: &Self::Styles) -> Node;
}

/// A screen bound to a theme store
#[derive(Debug)]
pub struct Mounted<S: Screen> {
    screen: S,
    subscription: ThemeSubscription,
    tokens: Arc<TokenSet>,
    styles: S::Styles,
    derivations: usize,
}

impl<S: Screen> Mounted<S> {
    /// Subscribe to `store` and derive the initial style table
    pub fn mount(screen: S, store: &ThemeStore) -> Self {
        let mut subscription = store.subscribe();
        let tokens = subscription.take();
        let styles = S::derive_styles(&tokens);
        Self {
            screen,
            subscription,
            tokens,
            styles,
            derivations: 1,
        }
    }

    /// Re-derive styles if the token set changed; returns whether it did
    pub fn refresh(&mut self) -> bool {
        if !self.subscription.has_changed() {
            return false;
        }
        self.tokens = self.subscription.take();
        self.styles = S::derive_styles(&self.tokens);
        self.derivations += 1;
        tracing::trace!(
            screen = S::NAME,
            mode = %self.tokens.mode,
            "re-derived screen styles"
        );
        true
    }

    /// Refresh, then render
    pub fn render(&mut self) -> Node {
        self.refresh();
        self.screen.render(&self.tokens, &self.styles)
    }

    /// The screen
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Tokens the current styles were derived from
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Current style table
    pub fn styles(&self) -> &S::Styles {
        &self.styles
    }

    /// How many times styles have been derived
    pub fn derivations(&self) -> usize {
        self.derivations
    }
}

/// Derive and render a screen once against `tokens`
pub fn render_once<S: Screen>(screen: &S, tokens: &TokenSet) -> Node {
    let styles = S::derive_styles(tokens);
    screen.render(tokens, &styles)
}

// =============================================================================
// Not Found Screen
// =============================================================================

/// Shown for routes without a screen of their own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundScreen {
    /// The route that was requested
    pub requested: Route,
}

/// Styles for [`NotFoundScreen`]
#[derive(Debug, Clone, PartialEq)]
pub struct NotFoundStyles {
    container: Style,
    title: Style,
    message: Style,
    link: Style,
}

impl Screen for NotFoundScreen {
    type Styles = NotFoundStyles;
    const NAME: &'static str = "Not Found";

    fn route(&self) -> Route {
        self.requested.clone()
    }

    fn derive_styles(tokens: &TokenSet) -> NotFoundStyles {
        NotFoundStyles {
            container: screen_container(tokens)
                .centered()
                .padding(Spacing::uniform(spacing::GUTTER)),
            title: tokens
                .text(font_size::title::BASE, FontWeight::Bold, &tokens.colors.text)
                .margin(Spacing::bottom(spacing::SPACE_SM)),
            message: tokens
                .text(font_size::MD, FontWeight::Regular, &tokens.colors.text_secondary)
                .margin(Spacing::bottom(spacing::SPACE_LG)),
            link: tokens.text(font_size::MD, FontWeight::SemiBold, &tokens.colors.primary),
        }
    }

    fn render(&self, _tokens: &TokenSet, styles: &NotFoundStyles) -> Node {
        Node::view(
            styles.container.clone(),
            vec![
                Node::text(self.requested.title(), &styles.title),
                Node::text("This screen is not available yet.", &styles.message),
                Node::text("Go to Explorer", &styles.link)
                    .on_press(Action::Navigate(Route::Explorer)),
            ],
        )
    }
}

// =============================================================================
// Shell
// =============================================================================

/// Apply an action to the theme store and a navigator
pub fn dispatch(action: &Action, store: &ThemeStore, navigator: &mut dyn Navigator) {
    match action {
        Action::Navigate(route) => navigator.push(route.clone()),
        Action::Back => navigator.back(),
        Action::SwitchTab(tab) => navigator.switch_tab(*tab),
        Action::ToggleTheme => store.toggle_mode(),
    }
}

/// Application shell: theme store, navigation and the mounted tab screens
#[derive(Debug)]
pub struct Shell {
    store: ThemeStore,
    navigation: NavigationState,
    explorer: Mounted<ExplorerScreen>,
    lab_tests: Mounted<LabTestsScreen>,
    consult: Mounted<ConsultScreen>,
    profile: Mounted<ProfileScreen>,
}

impl Shell {
    /// Mount the tab screens against `store`
    pub fn new(store: ThemeStore) -> Self {
        let explorer = Mounted::mount(ExplorerScreen, &store);
        let lab_tests = Mounted::mount(LabTestsScreen, &store);
        let consult = Mounted::mount(ConsultScreen, &store);
        let profile = Mounted::mount(ProfileScreen, &store);
        Self {
            store,
            navigation: NavigationState::new(),
            explorer,
            lab_tests,
            consult,
            profile,
        }
    }

    /// The theme store
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Route currently shown
    pub fn current_route(&self) -> &Route {
        self.navigation.current_route()
    }

    /// Apply a tap's action
    pub fn dispatch(&mut self, action: &Action) {
        dispatch(action, &self.store, &mut self.navigation);
    }

    /// Style derivations of the mounted tab screens, in tab order
    pub fn derivations(&self) -> [usize; 4] {
        [
            self.explorer.derivations(),
            self.lab_tests.derivations(),
            self.consult.derivations(),
            self.profile.derivations(),
        ]
    }

    /// Bring every mounted screen up to date with the store
    pub fn refresh(&mut self) {
        self.explorer.refresh();
        self.lab_tests.refresh();
        self.consult.refresh();
        self.profile.refresh();
    }

    /// Render the current route, with the tab bar under tab roots
    pub fn render_current(&mut self) -> Node {
        self.refresh();
        let route = self.navigation.current_route().clone();
        let body = match &route {
            Route::Explorer => self.explorer.render(),
            Route::LabTests => self.lab_tests.render(),
            Route::Consult => self.consult.render(),
            Route::Profile => self.profile.render(),
            other => render_route(other, &self.store.tokens()),
        };

        let tokens = self.store.tokens();
        match route.tab_root() {
            Some(tab) => with_tab_bar(body, tab, &tokens),
            None => body,
        }
    }
}

/// Render any route once against `tokens`
pub fn render_route(route: &Route, tokens: &TokenSet) -> Node {
    match route {
        Route::Explorer => render_once(&ExplorerScreen, tokens),
        Route::LabTests => render_once(&LabTestsScreen, tokens),
        Route::Consult => render_once(&ConsultScreen, tokens),
        Route::Profile => render_once(&ProfileScreen, tokens),
        Route::Doctor { id } => render_once(&DoctorDetailScreen::new(id.as_str()), tokens),
        Route::DiagnosticCenter { id } => {
            render_once(&DiagnosticCenterScreen::new(id.as_str()), tokens)
        }
        other => render_once(
            &NotFoundScreen {
                requested: other.clone(),
            },
            tokens,
        ),
    }
}

fn with_tab_bar(body: Node, tab: NavigationTab, tokens: &TokenSet) -> Node {
    let styles = TabBar::computed_styles(tokens);
    Node::view(
        Style::new().flex(1.0),
        vec![body, TabBar::new(tab).render(&styles)],
    )
}

// =============================================================================
// Shared Styles
// =============================================================================

/// Full-screen container on the background color
pub(crate) fn screen_container(tokens: &TokenSet) -> Style {
    Style::new().flex(1.0).background(&tokens.colors.background)
}

/// Section wrapper
pub(crate) fn section() -> Style {
    Style::new().margin(Spacing::bottom(spacing::SECTION_GAP))
}

/// Section title text
pub(crate) fn section_title(tokens: &TokenSet) -> Style {
    tokens
        .text(font_size::XL, FontWeight::SemiBold, &tokens.colors.text)
        .padding(Spacing::horizontal(spacing::GUTTER))
        .margin(Spacing::bottom(spacing::SPACE_LG))
}

/// Outlined card on the surface color
pub(crate) fn card(tokens: &TokenSet) -> Style {
    Style::new()
        .background(&tokens.colors.surface)
        .radius(radius::XL)
        .border(border::THIN, &tokens.colors.border)
}

/// Outlined card inset from the screen edges
pub(crate) fn list_card(tokens: &TokenSet) -> Style {
    card(tokens).margin(Spacing::individual(
        0.0,
        spacing::GUTTER,
        spacing::SPACE_MD,
        spacing::GUTTER,
    ))
}

/// Filled primary button
pub(crate) fn primary_button(tokens: &TokenSet, vertical: f32, horizontal: f32) -> Style {
    Style::new()
        .background(&tokens.colors.primary)
        .padding(Spacing::symmetric(vertical, horizontal))
        .radius(radius::MD)
        .align_items(Alignment::Center)
}

/// Text on a filled button
pub(crate) fn button_text(tokens: &TokenSet, size: f32) -> Style {
    tokens.text(size, FontWeight::SemiBold, ON_FILL)
}

/// Tinted square behind an icon
pub(crate) fn icon_tile(tokens: &TokenSet, role: ColorRole, pad: f32, corner: f32) -> Style {
    Style::new()
        .background(tokens.tint(role))
        .padding(Spacing::uniform(pad))
        .radius(corner)
}

/// Search bar row
pub(crate) fn search_bar(tokens: &TokenSet) -> Style {
    Style::new()
        .row()
        .align_items(Alignment::Center)
        .background(&tokens.colors.surface)
        .padding(Spacing::symmetric(spacing::SPACE_MD, spacing::SPACE_LG))
        .radius(radius::LG)
        .border(border::THIN, &tokens.colors.border)
}

/// Search field text
pub(crate) fn search_input(tokens: &TokenSet) -> Style {
    tokens
        .text(font_size::LG, FontWeight::Regular, &tokens.colors.text)
        .flex(1.0)
        .margin(Spacing::left(spacing::SPACE_MD))
}

/// Search bar with a leading magnifier
pub(crate) fn render_search(
    tokens: &TokenSet,
    bar: &Style,
    input: &Style,
    placeholder: &str,
) -> Node {
    Node::view(
        Style::new()
            .padding(Spacing::horizontal(spacing::GUTTER))
            .margin(Spacing::bottom(spacing::SECTION_GAP)),
        vec![Node::view(
            bar.clone(),
            vec![
                Node::icon(IconName::Search, sizing::icon::LG, &tokens.colors.text_secondary),
                Node::text_input(placeholder, &tokens.colors.text_secondary, input),
            ],
        )],
    )
}

/// Header row with a back button and a title
pub(crate) fn back_header(tokens: &TokenSet, title: &Style, text: &str) -> Node {
    Node::view(
        Style::new()
            .row()
            .align_items(Alignment::Center)
            .justify(JustifyContent::SpaceBetween)
            .padding(Spacing::symmetric(spacing::SPACE_LG, spacing::GUTTER)),
        vec![
            Node::pressable(
                Style::new()
                    .size(sizing::HEADER_BUTTON)
                    .radius(sizing::HEADER_BUTTON / 2.0)
                    .background(&tokens.colors.surface)
                    .border(border::THIN, &tokens.colors.border)
                    .centered(),
                Action::Back,
                vec![Node::icon(IconName::ArrowLeft, sizing::icon::XL, &tokens.colors.text)],
            ),
            Node::text(text, title),
            Node::view(Style::new().width(Dimension::px(sizing::HEADER_BUTTON)), vec![]),
        ],
    )
}

/// Star, rating and review count
pub(crate) fn rating_row(
    tokens: &TokenSet,
    rating: f32,
    reviews: u32,
    rating_style: &Style,
    reviews_style: &Style,
) -> Node {
    Node::view(
        Style::new().row().align_items(Alignment::Center),
        vec![
            Node::filled_icon(IconName::Star, sizing::icon::XS, &tokens.colors.warning),
            Node::text(format!("{}", rating), rating_style),
            Node::text(format!("({})", reviews), reviews_style),
        ],
    )
}

/// Small icon followed by text
pub(crate) fn meta_item(
    icon: IconName,
    color: &str,
    text: impl Into<String>,
    style: &Style,
) -> Node {
    Node::view(
        Style::new().row().align_items(Alignment::Center),
        vec![Node::icon(icon, sizing::icon::XS, color), Node::text(text, style)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MockNavigator;
    use crate::theme::{dark_tokens, light_tokens, ThemeMode};
    use mockall::predicate::eq;

    // ==========================================================================
    // Mounted Tests
    // ==========================================================================

    #[test]
    fn test_mounted_derives_once_until_toggle() {
        let store = ThemeStore::default();
        let mut mounted = Mounted::mount(ExplorerScreen, &store);
        assert_eq!(mounted.derivations(), 1);

        mounted.render();
        mounted.render();
        assert_eq!(mounted.derivations(), 1);

        store.toggle_mode();
        assert!(mounted.refresh());
        assert!(!mounted.refresh());
        assert_eq!(mounted.derivations(), 2);
        assert_eq!(mounted.tokens().mode, ThemeMode::Dark);
        assert_eq!(*mounted.styles(), ExplorerScreen::derive_styles(&dark_tokens()));
    }

    #[test]
    fn test_mounted_render_picks_up_toggle() {
        let store = ThemeStore::default();
        let mut mounted = Mounted::mount(LabTestsScreen, &store);
        let light = mounted.render();

        store.toggle_mode();
        let dark = mounted.render();
        assert_ne!(light, dark);
        assert_eq!(dark, render_once(&LabTestsScreen, &dark_tokens()));
    }

    // ==========================================================================
    // Dispatch Tests
    // ==========================================================================

    #[test]
    fn test_dispatch_navigate() {
        let store = ThemeStore::default();
        let mut navigator = MockNavigator::new();
        navigator
            .expect_push()
            .with(eq(Route::doctor(1)))
            .times(1)
            .return_const(());

        dispatch(&Action::Navigate(Route::doctor(1)), &store, &mut navigator);
    }

    #[test]
    fn test_dispatch_back_and_tab() {
        let store = ThemeStore::default();
        let mut navigator = MockNavigator::new();
        navigator.expect_back().times(1).return_const(());
        navigator
            .expect_switch_tab()
            .with(eq(NavigationTab::Profile))
            .times(1)
            .return_const(());

        dispatch(&Action::Back, &store, &mut navigator);
        dispatch(&Action::SwitchTab(NavigationTab::Profile), &store, &mut navigator);
    }

    #[test]
    fn test_dispatch_toggle_does_not_navigate() {
        let store = ThemeStore::default();
        let mut navigator = MockNavigator::new();
        navigator.expect_push().never();
        navigator.expect_back().never();

        dispatch(&Action::ToggleTheme, &store, &mut navigator);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    // ==========================================================================
    // Shell Tests
    // ==========================================================================

    #[test]
    fn test_shell_renders_explorer_with_tab_bar() {
        let mut shell = Shell::new(ThemeStore::default());
        let node = shell.render_current();
        assert!(node.contains_text("Good Morning!"));
        assert!(node.contains_text("Lab Tests"));
        assert!(node
            .actions()
            .contains(&&Action::SwitchTab(NavigationTab::Consult)));
    }

    #[test]
    fn test_shell_toggle_rederives_every_tab_screen() {
        let mut shell = Shell::new(ThemeStore::default());
        assert_eq!(shell.derivations(), [1, 1, 1, 1]);

        shell.dispatch(&Action::ToggleTheme);
        shell.render_current();
        assert_eq!(shell.derivations(), [2, 2, 2, 2]);
        assert_eq!(shell.store().mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_shell_detail_has_no_tab_bar() {
        let mut shell = Shell::new(ThemeStore::default());
        shell.dispatch(&Action::Navigate(Route::doctor(99)));
        let node = shell.render_current();
        assert!(node.contains_text("Dr. Sarah Johnson"));
        assert!(!node
            .actions()
            .iter()
            .any(|action| matches!(action, Action::SwitchTab(_))));

        shell.dispatch(&Action::Back);
        assert_eq!(*shell.current_route(), Route::Explorer);
    }

    #[test]
    fn test_render_route_falls_back_to_not_found() {
        let node = render_route(&Route::Wallet, &light_tokens());
        assert!(node.contains_text("My Wallet"));
        assert!(node.contains_text("This screen is not available yet."));
        assert_eq!(node.actions(), vec![&Action::Navigate(Route::Explorer)]);
    }
}
