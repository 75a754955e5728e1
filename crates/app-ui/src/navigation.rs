//! Navigation system for CarePoint
//!
//! This module provides:
//! - Route definitions with path round-tripping
//! - Tab navigation with one stack per tab
//! - A path router for deep links
//! - The [`Navigator`] seam screen actions are dispatched through

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::icons::IconName;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while resolving a path to a route
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No pattern matches the path
    #[error("No route matches path: {0}")]
    UnknownPath(String),

    /// A path segment is not valid percent-encoded UTF-8
    #[error("Invalid route parameter: {0}")]
    InvalidParam(String),
}

// =============================================================================
// Route Parameters
// =============================================================================

/// Parameters for a route
pub type RouteParams = HashMap<String, String>;

// =============================================================================
// Route Definitions
// =============================================================================

/// All possible routes in the application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    // Main tabs
    /// Explorer dashboard
    #[default]
    Explorer,
    /// Lab test catalog
    LabTests,
    /// Consultations
    Consult,
    /// Account
    Profile,

    // Listings
    /// All doctors
    Doctors,
    /// All specializations
    Specializations,
    /// Doctors of one specialty
    Specialty {
        /// Specialty slug, e.g. `eye-specialist`
        slug: String,
    },
    /// All diagnostic centers
    DiagnosticCenters,
    /// Tests in one category
    TestCategory {
        /// Category id
        id: String,
    },

    // Detail screens
    /// Doctor detail
    Doctor {
        /// Doctor id
        id: String,
    },
    /// Diagnostic center detail
    DiagnosticCenter {
        /// Center id
        id: String,
    },

    // Account
    /// Wallet
    Wallet,
    /// Appointments
    Appointments,
    /// Medical records
    MedicalRecords,
    /// Family members
    FamilyMembers,
    /// Help and support
    Help,
    /// Settings
    Settings,

    /// Fallback for unmatched paths
    NotFound,
}

impl Route {
    /// Doctor detail route
    pub fn doctor(id: impl ToString) -> Self {
        Route::Doctor { id: id.to_string() }
    }

    /// Diagnostic center detail route
    pub fn diagnostic_center(id: impl ToString) -> Self {
        Route::DiagnosticCenter { id: id.to_string() }
    }

    /// Test category route
    pub fn test_category(id: impl ToString) -> Self {
        Route::TestCategory { id: id.to_string() }
    }

    /// Specialty listing route
    pub fn specialty(slug: impl Into<String>) -> Self {
        Route::Specialty { slug: slug.into() }
    }

    /// Get the URL path for this route
    ///
    /// Ids and slugs must be non-empty; an empty one yields a path that
    /// routes to [`Route::NotFound`].
    pub fn to_path(&self) -> String {
        match self {
            Route::Explorer => "/".to_string(),
            Route::LabTests => "/lab-tests".to_string(),
            Route::Consult => "/consult".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Doctors => "/doctors".to_string(),
            Route::Specializations => "/specializations".to_string(),
            Route::Specialty { slug } => format!("/specialty/{}", urlencoding::encode(slug)),
            Route::DiagnosticCenters => "/diagnostic-centers".to_string(),
            Route::TestCategory { id } => format!("/test-category/{}", urlencoding::encode(id)),
            Route::Doctor { id } => format!("/doctor/{}", urlencoding::encode(id)),
            Route::DiagnosticCenter { id } => {
                format!("/diagnostic-center/{}", urlencoding::encode(id))
            }
            Route::Wallet => "/wallet".to_string(),
            Route::Appointments => "/appointments".to_string(),
            Route::MedicalRecords => "/medical-records".to_string(),
            Route::FamilyMembers => "/family-members".to_string(),
            Route::Help => "/help".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Get the title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Explorer => "Explorer",
            Route::LabTests => "Lab Tests",
            Route::Consult => "Consult",
            Route::Profile => "Profile",
            Route::Doctors => "Doctors",
            Route::Specializations => "Specializations",
            Route::Specialty { .. } => "Specialty",
            Route::DiagnosticCenters => "Diagnostic Centers",
            Route::TestCategory { .. } => "Test Category",
            Route::Doctor { .. } => "Doctor Profile",
            Route::DiagnosticCenter { .. } => "Diagnostic Center",
            Route::Wallet => "My Wallet",
            Route::Appointments => "Appointments",
            Route::MedicalRecords => "Medical Records",
            Route::FamilyMembers => "Family Members",
            Route::Help => "Help & Support",
            Route::Settings => "Settings",
            Route::NotFound => "Not Found",
        }
    }

    /// The tab this route is the root of, if any
    pub fn tab_root(&self) -> Option<NavigationTab> {
        NavigationTab::all()
            .into_iter()
            .find(|tab| tab.root_route() == *self)
    }
}

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationTab {
    /// Explorer tab
    #[default]
    Explorer,
    /// Lab tests tab
    LabTests,
    /// Consult tab
    Consult,
    /// Profile tab
    Profile,
}

impl NavigationTab {
    /// Get the root route for this tab
    pub fn root_route(&self) -> Route {
        match self {
            NavigationTab::Explorer => Route::Explorer,
            NavigationTab::LabTests => Route::LabTests,
            NavigationTab::Consult => Route::Consult,
            NavigationTab::Profile => Route::Profile,
        }
    }

    /// Get icon for this tab
    pub fn icon(&self) -> IconName {
        match self {
            NavigationTab::Explorer => IconName::Search,
            NavigationTab::LabTests => IconName::TestTube,
            NavigationTab::Consult => IconName::MessageCircle,
            NavigationTab::Profile => IconName::User,
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Explorer => "Explorer",
            NavigationTab::LabTests => "Lab Tests",
            NavigationTab::Consult => "Consult",
            NavigationTab::Profile => "Profile",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Explorer,
            NavigationTab::LabTests,
            NavigationTab::Consult,
            NavigationTab::Profile,
        ]
    }

    fn index(&self) -> usize {
        match self {
            NavigationTab::Explorer => 0,
            NavigationTab::LabTests => 1,
            NavigationTab::Consult => 2,
            NavigationTab::Profile => 3,
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack for a tab
///
/// The root entry is held apart from the pushed entries, so the stack is
/// never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Root entry
    root: StackEntry,
    /// Entries pushed above the root (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            entries: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    /// Pop to root
    pub fn pop_to_root(&mut self) {
        self.entries.clear();
    }

    /// Get the current (top) route
    pub fn current(&self) -> &Route {
        &self.current_entry().route
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    /// Get the root route
    pub fn root(&self) -> &Route {
        &self.root.route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Get stack depth, counting the root
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root)
            .chain(self.entries.iter())
            .map(|entry| &entry.route)
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
    /// Stacks for each tab, in [`NavigationTab::all`] order
    stacks: [NavigationStack; 4],
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_tab: NavigationTab::Explorer,
            stacks: NavigationTab::all().map(|tab| NavigationStack::new(tab.root_route())),
        }
    }
}

impl NavigationState {
    /// Create a new navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stack for a tab
    pub fn stack(&self, tab: NavigationTab) -> &NavigationStack {
        &self.stacks[tab.index()]
    }

    /// Get the current stack for the active tab
    pub fn current_stack(&self) -> &NavigationStack {
        self.stack(self.active_tab)
    }

    /// Get mutable current stack
    pub fn current_stack_mut(&mut self) -> &mut NavigationStack {
        &mut self.stacks[self.active_tab.index()]
    }

    /// Get the current route
    pub fn current_route(&self) -> &Route {
        self.current_stack().current()
    }

    /// Navigate to a route
    ///
    /// A tab's root route switches to that tab and returns it to its root
    /// instead of stacking a second copy.
    pub fn navigate(&mut self, route: Route) {
        if let Some(tab) = route.tab_root() {
            self.reset_to_tab(tab);
            return;
        }
        tracing::debug!(
            tab = ?self.active_tab,
            path = %route.to_path(),
            "navigating"
        );
        self.current_stack_mut().push(route);
    }

    /// Go back
    pub fn go_back(&mut self) -> bool {
        let popped = self.current_stack_mut().pop();
        if popped {
            tracing::debug!(path = %self.current_route().to_path(), "navigated back");
        }
        popped
    }

    /// Switch to a tab, keeping its stack
    pub fn switch_tab(&mut self, tab: NavigationTab) {
        if self.active_tab != tab {
            tracing::debug!(from = ?self.active_tab, to = ?tab, "switching tab");
            self.active_tab = tab;
        }
    }

    /// Switch to a tab and pop it to its root
    pub fn reset_to_tab(&mut self, tab: NavigationTab) {
        self.switch_tab(tab);
        self.stacks[tab.index()].pop_to_root();
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.current_stack().can_go_back()
    }

    /// Reset entire navigation state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Receiver of navigation requests issued by screen actions
///
/// Requests are fire-and-forget; screens never inspect the outcome.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Push a route
    fn push(&mut self, route: Route);

    /// Pop the active stack
    fn back(&mut self);

    /// Switch bottom tabs
    fn switch_tab(&mut self, tab: NavigationTab);
}

impl Navigator for NavigationState {
    fn push(&mut self, route: Route) {
        self.navigate(route);
    }

    fn back(&mut self) {
        self.go_back();
    }

    fn switch_tab(&mut self, tab: NavigationTab) {
        NavigationState::switch_tab(self, tab);
    }
}

// =============================================================================
// Router
// =============================================================================

/// Route pattern for matching
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Route builder
    builder: fn(RouteParams) -> Option<Route>,
}

/// Segment type in a pattern
#[derive(Debug, Clone)]
enum PatternSegment {
    /// Literal segment
    Literal(String),
    /// Parameter segment
    Param(String),
}

/// URL Router for parsing paths to routes
pub struct Router {
    /// Route patterns
    patterns: Vec<RoutePattern>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Create a new router with all routes
    pub fn new() -> Self {
        let mut router = Self {
            patterns: Vec::new(),
        };

        // Tabs
        router.add_route("/", |_| Some(Route::Explorer));
        router.add_route("/lab-tests", |_| Some(Route::LabTests));
        router.add_route("/consult", |_| Some(Route::Consult));
        router.add_route("/profile", |_| Some(Route::Profile));

        // Listings
        router.add_route("/doctors", |_| Some(Route::Doctors));
        router.add_route("/specializations", |_| Some(Route::Specializations));
        router.add_route("/specialty/:slug", |params| {
            Some(Route::Specialty {
                slug: params.get("slug")?.clone(),
            })
        });
        router.add_route("/diagnostic-centers", |_| Some(Route::DiagnosticCenters));
        router.add_route("/test-category/:id", |params| {
            Some(Route::TestCategory {
                id: params.get("id")?.clone(),
            })
        });

        // Detail screens; the doctor screen also answers on its file path
        router.add_route("/doctor/:id", |params| {
            Some(Route::Doctor {
                id: params.get("id")?.clone(),
            })
        });
        router.add_route("/doctors/:id", |params| {
            Some(Route::Doctor {
                id: params.get("id")?.clone(),
            })
        });
        router.add_route("/diagnostic-center/:id", |params| {
            Some(Route::DiagnosticCenter {
                id: params.get("id")?.clone(),
            })
        });

        // Account
        router.add_route("/wallet", |_| Some(Route::Wallet));
        router.add_route("/appointments", |_| Some(Route::Appointments));
        router.add_route("/medical-records", |_| Some(Route::MedicalRecords));
        router.add_route("/family-members", |_| Some(Route::FamilyMembers));
        router.add_route("/help", |_| Some(Route::Help));
        router.add_route("/settings", |_| Some(Route::Settings));

        router
    }

    /// Add a route pattern
    pub fn add_route(&mut self, pattern: &str, builder: fn(RouteParams) -> Option<Route>) {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| {
                if let Some(param) = s.strip_prefix(':') {
                    PatternSegment::Param(param.to_string())
                } else {
                    PatternSegment::Literal(s.to_string())
                }
            })
            .collect();

        self.patterns.push(RoutePattern { segments, builder });
    }

    /// Match a path to a route, falling back to [`Route::NotFound`]
    pub fn match_path(&self, path: &str) -> Route {
        let (pathname, query) = split_query(path);
        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in &self.patterns {
            if let Some(params) = self.match_pattern(&pattern.segments, &path_segments, query) {
                if let Some(route) = (pattern.builder)(params) {
                    return route;
                }
            }
        }

        tracing::warn!(path, "no route matches path");
        Route::NotFound
    }

    /// Resolve a path to a route, reporting why it fails
    pub fn resolve(&self, path: &str) -> Result<Route, NavigationError> {
        let (pathname, _) = split_query(path);
        for segment in pathname.split('/').filter(|s| !s.is_empty()) {
            if urlencoding::decode(segment).is_err() {
                return Err(NavigationError::InvalidParam(segment.to_string()));
            }
        }

        match self.match_path(path) {
            Route::NotFound => Err(NavigationError::UnknownPath(path.to_string())),
            route => Ok(route),
        }
    }

    /// Match a pattern against path segments
    fn match_pattern(
        &self,
        pattern: &[PatternSegment],
        path: &[&str],
        query: Option<&str>,
    ) -> Option<RouteParams> {
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, actual) in pattern.iter().zip(path.iter()) {
            match segment {
                PatternSegment::Literal(expected) => {
                    if expected != *actual {
                        return None;
                    }
                }
                PatternSegment::Param(name) => {
                    params.insert(
                        name.clone(),
                        urlencoding::decode(actual).ok()?.into_owned(),
                    );
                }
            }
        }

        self.parse_query(query, &mut params);

        Some(params)
    }

    /// Parse query string into params; path params win over query keys
    fn parse_query(&self, query: Option<&str>, params: &mut RouteParams) {
        if let Some(query) = query {
            for pair in query.split('&') {
                if let Some((key, value)) = pair.split_once('=') {
                    if let Ok(decoded) = urlencoding::decode(value) {
                        params
                            .entry(key.to_string())
                            .or_insert_with(|| decoded.into_owned());
                    }
                }
            }
        }
    }
}

fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((pathname, query)) => (pathname, Some(query)),
        None => (path, None),
    }
}

// =============================================================================
// Tests
// =============================================================================
