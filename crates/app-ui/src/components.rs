//! Layout tree and shared components for CarePoint
//!
//! Screens render into a serializable [`Node`] tree. Styles are plain
//! [`Style`] records computed from a [`TokenSet`]; tap handlers are data
//! ([`Action`]) that the shell dispatches to a navigator.
//!
//! # Shared Components
//!
//! - [`SectionHeader`] - Section title with an optional "See All" link
//! - [`ThemeToggle`] - Row with a switch that flips the theme mode
//! - [`HealthScoreMeter`] - Circular score readout with a colored band
//! - [`TabBar`] - Bottom tab bar for the four main tabs

use serde::{Deserialize, Serialize};

use crate::icons::IconName;
use crate::navigation::{NavigationTab, Route};
use crate::theme::{Color, ColorRole, ThemeMode, TokenSet};
use crate::tokens::{border, radius, sizing, spacing};
use crate::typography::{font_size, FontWeight, TextAlign, TextDecoration};

/// Text color on filled buttons and badges, the same in both modes
pub const ON_FILL: &str = "#FFFFFF";

// =============================================================================
// Common Types
// =============================================================================

/// Spacing values (margin, padding)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }

    /// Horizontal spacing only
    pub fn horizontal(value: f32) -> Self {
        Self::symmetric(0.0, value)
    }

    /// Vertical spacing only
    pub fn vertical(value: f32) -> Self {
        Self::symmetric(value, 0.0)
    }

    /// Create individual spacing
    pub fn individual(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing::Individual {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Bottom spacing only
    pub fn bottom(value: f32) -> Self {
        Self::individual(0.0, 0.0, value, 0.0)
    }

    /// Top spacing only
    pub fn top(value: f32) -> Self {
        Self::individual(value, 0.0, 0.0, 0.0)
    }

    /// Left spacing only
    pub fn left(value: f32) -> Self {
        Self::individual(0.0, 0.0, 0.0, value)
    }

    /// Right spacing only
    pub fn right(value: f32) -> Self {
        Self::individual(0.0, value, 0.0, 0.0)
    }
}

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

/// Alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    FlexStart,
    /// Align to center
    Center,
    /// Align to end
    FlexEnd,
}

/// Justify content options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    FlexStart,
    /// Center
    Center,
    /// End
    FlexEnd,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Column (vertical), the mobile default
    #[default]
    Column,
    /// Row (horizontal)
    Row,
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// In normal flow
    #[default]
    Relative,
    /// Taken out of flow, placed by offsets
    Absolute,
}

// =============================================================================
// Style
// =============================================================================

/// A style record; unset fields inherit platform defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    /// Main axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// Whether children wrap onto new lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<bool>,
    /// Main axis distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Cross axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Cross axis alignment of this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
    /// Gap between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Top offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Right offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Margin around the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Padding inside the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color on all sides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Top border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_width: Option<f32>,
    /// Top border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top_color: Option<Color>,
    /// Bottom border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    /// Bottom border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<Color>,
    /// Clip children to the border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_hidden: Option<bool>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font face, e.g. `Inter-SemiBold`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Text decoration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    /// Line height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self == &Style::default()
    }

    /// Set flex grow
    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    /// Lay children out horizontally
    pub fn row(mut self) -> Self {
        self.flex_direction = Some(FlexDirection::Row);
        self
    }

    /// Wrap children
    pub fn wrap(mut self) -> Self {
        self.flex_wrap = Some(true);
        self
    }

    /// Set main axis distribution
    pub fn justify(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    /// Set cross axis alignment of children
    pub fn align_items(mut self, align: Alignment) -> Self {
        self.align_items = Some(align);
        self
    }

    /// Set cross axis alignment of this node
    pub fn align_self(mut self, align: Alignment) -> Self {
        self.align_self = Some(align);
        self
    }

    /// Center children on both axes
    pub fn centered(self) -> Self {
        self.justify(JustifyContent::Center)
            .align_items(Alignment::Center)
    }

    /// Set gap between children
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Position absolutely at a top/right offset
    pub fn absolute(mut self, top: f32, right: f32) -> Self {
        self.position = Some(Position::Absolute);
        self.top = Some(top);
        self.right = Some(right);
        self
    }

    /// Set width
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Set height
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Fixed square size
    pub fn size(self, size: f32) -> Self {
        self.width(Dimension::px(size)).height(Dimension::px(size))
    }

    /// Set margin
    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set padding
    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set border radius
    pub fn radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set a border on all sides
    pub fn border(mut self, width: f32, color: impl Into<Color>) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color.into());
        self
    }

    /// Set a top border only
    pub fn border_top(mut self, width: f32, color: impl Into<Color>) -> Self {
        self.border_top_width = Some(width);
        self.border_top_color = Some(color.into());
        self
    }

    /// Set the bottom border
    pub fn border_bottom(mut self, width: f32, color: impl Into<Color>) -> Self {
        self.border_bottom_width = Some(width);
        self.border_bottom_color = Some(color.into());
        self
    }

    /// Clip children
    pub fn clip(mut self) -> Self {
        self.overflow_hidden = Some(true);
        self
    }

    /// Set opacity
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set font size
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set font face
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set text color
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set text alignment
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Strike the text through
    pub fn strikethrough(mut self) -> Self {
        self.text_decoration = Some(TextDecoration::LineThrough);
        self
    }

    /// Set line height
    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    /// Layer `over` on top of this style; set fields in `over` win
    pub fn merged(&self, over: &Style) -> Style {
        macro_rules! pick {
            ($($field:ident),* $(,)?) => {
                Style {
                    $($field: over.$field.clone().or_else(|| self.$field.clone()),)*
                }
            };
        }
        pick!(
            flex,
            flex_direction,
            flex_wrap,
            justify_content,
            align_items,
            align_self,
            gap,
            position,
            top,
            right,
            width,
            height,
            margin,
            padding,
            background_color,
            border_radius,
            border_width,
            border_color,
            border_top_width,
            border_top_color,
            border_bottom_width,
            border_bottom_color,
            overflow_hidden,
            opacity,
            font_size,
            font_family,
            color,
            text_align,
            text_decoration,
            line_height,
        )
    }
}

// =============================================================================
// Actions
// =============================================================================

/// What a tap asks the shell to do
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "camelCase")]
pub enum Action {
    /// Push a route onto the active stack
    Navigate(Route),
    /// Pop the active stack
    Back,
    /// Flip the theme mode
    ToggleTheme,
    /// Switch bottom tabs
    SwitchTab(NavigationTab),
}

// =============================================================================
// Layout Tree
// =============================================================================

/// A node in a rendered layout tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Node {
    /// Container
    View {
        /// Style
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        /// Tap handler
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_press: Option<Action>,
        /// Children
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
    /// Scrollable container
    ScrollView {
        /// Style
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        /// Scrolls along the x axis
        #[serde(default)]
        horizontal: bool,
        /// Children
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Text run
    Text {
        /// Style
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        /// Content
        content: String,
        /// Tap handler
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_press: Option<Action>,
    },
    /// Remote image
    Image {
        /// Style
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        /// Image URL
        uri: String,
    },
    /// Vector icon
    Icon {
        /// Which icon
        name: IconName,
        /// Size in pixels
        size: f32,
        /// Stroke color
        color: Color,
        /// Fill color, for solid stars and the like
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<Color>,
    },
    /// Single-line text field
    TextInput {
        /// Style
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        /// Placeholder text
        placeholder: String,
        /// Placeholder color
        placeholder_color: Color,
    },
    /// On/off switch
    Switch {
        /// Whether the switch is on
        value: bool,
        /// Track color when on
        track_on: Color,
        /// Track color when off
        track_off: Color,
        /// Thumb color
        thumb: Color,
        /// Dispatched on toggle
        on_toggle: Action,
    },
    /// Empty space
    Spacer {
        /// Height in pixels
        size: f32,
    },
}

impl Node {
    /// Container with children
    pub fn view(style: Style, children: Vec<Node>) -> Self {
        Node::View {
            style,
            on_press: None,
            children,
        }
    }

    /// Tappable container
    pub fn pressable(style: Style, action: Action, children: Vec<Node>) -> Self {
        Node::View {
            style,
            on_press: Some(action),
            children,
        }
    }

    /// Vertical scroll container
    pub fn scroll(style: Style, children: Vec<Node>) -> Self {
        Node::ScrollView {
            style,
            horizontal: false,
            children,
        }
    }

    /// Horizontal scroll container
    pub fn hscroll(style: Style, children: Vec<Node>) -> Self {
        Node::ScrollView {
            style,
            horizontal: true,
            children,
        }
    }

    /// Text run
    pub fn text(content: impl Into<String>, style: &Style) -> Self {
        Node::Text {
            style: style.clone(),
            content: content.into(),
            on_press: None,
        }
    }

    /// Image
    pub fn image(uri: impl Into<String>, style: &Style) -> Self {
        Node::Image {
            style: style.clone(),
            uri: uri.into(),
        }
    }

    /// Outlined icon
    pub fn icon(name: IconName, size: f32, color: impl Into<Color>) -> Self {
        Node::Icon {
            name,
            size,
            color: color.into(),
            fill: None,
        }
    }

    /// Icon filled with its stroke color
    pub fn filled_icon(name: IconName, size: f32, color: impl Into<Color>) -> Self {
        let color = color.into();
        Node::Icon {
            name,
            size,
            fill: Some(color.clone()),
            color,
        }
    }

    /// Text field
    pub fn text_input(
        placeholder: impl Into<String>,
        placeholder_color: impl Into<Color>,
        style: &Style,
    ) -> Self {
        Node::TextInput {
            style: style.clone(),
            placeholder: placeholder.into(),
            placeholder_color: placeholder_color.into(),
        }
    }

    /// Empty space
    pub fn spacer(size: f32) -> Self {
        Node::Spacer { size }
    }

    /// Attach a tap handler to a view or text node
    pub fn on_press(mut self, action: Action) -> Self {
        match &mut self {
            Node::View { on_press, .. } | Node::Text { on_press, .. } => {
                *on_press = Some(action);
            }
            _ => {}
        }
        self
    }

    /// Direct children
    pub fn children(&self) -> &[Node] {
        match self {
            Node::View { children, .. } | Node::ScrollView { children, .. } => children,
            _ => &[],
        }
    }

    /// Style of this node, if it carries one
    pub fn style(&self) -> Option<&Style> {
        match self {
            Node::View { style, .. }
            | Node::ScrollView { style, .. }
            | Node::Text { style, .. }
            | Node::Image { style, .. }
            | Node::TextInput { style, .. } => Some(style),
            _ => None,
        }
    }

    /// Visit this node and its descendants depth-first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Total number of nodes in the tree
    pub fn count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// All text content, in tree order
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text { content, .. } = node {
                texts.push(content.as_str());
            }
        });
        texts
    }

    /// Whether any text node reads exactly `content`
    pub fn contains_text(&self, content: &str) -> bool {
        self.find_text(content).is_some()
    }

    /// First text node reading exactly `content`
    pub fn find_text(&self, content: &str) -> Option<&Node> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() {
                if let Node::Text { content: c, .. } = node {
                    if c == content {
                        found = Some(node);
                    }
                }
            }
        });
        found
    }

    /// All tap and toggle handlers, in tree order
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions = Vec::new();
        self.walk(&mut |node| match node {
            Node::View {
                on_press: Some(action),
                ..
            }
            | Node::Text {
                on_press: Some(action),
                ..
            }
            | Node::Switch {
                on_toggle: action, ..
            } => actions.push(action),
            _ => {}
        });
        actions
    }

    /// All icons, in tree order
    pub fn icons(&self) -> Vec<&Node> {
        let mut icons = Vec::new();
        self.walk(&mut |node| {
            if matches!(node, Node::Icon { .. }) {
                icons.push(node);
            }
        });
        icons
    }
}

// =============================================================================
// Section Header Component
// =============================================================================

/// Section title with an optional "See All" link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeader {
    /// Title text
    pub title: String,
    /// Where "See All" leads, if shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_all: Option<Route>,
}

/// Computed styles for a section header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHeaderStyles {
    /// Row container
    pub container: Style,
    /// Title text
    pub title: Style,
    /// Link text
    pub link: Style,
    /// Link chevron color
    pub link_icon: Color,
}

impl SectionHeader {
    /// Header with a title only
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            see_all: None,
        }
    }

    /// Add a "See All" link
    pub fn with_link(mut self, route: Route) -> Self {
        self.see_all = Some(route);
        self
    }

    /// Compute styles for the header based on tokens
    pub fn computed_styles(tokens: &TokenSet) -> SectionHeaderStyles {
        SectionHeaderStyles {
            container: Style::new()
                .row()
                .justify(JustifyContent::SpaceBetween)
                .align_items(Alignment::Center)
                .padding(Spacing::horizontal(spacing::GUTTER))
                .margin(Spacing::bottom(spacing::SPACE_LG)),
            title: tokens.text(font_size::XL, FontWeight::SemiBold, &tokens.colors.text),
            link: tokens.text(font_size::MD, FontWeight::Medium, &tokens.colors.primary),
            link_icon: tokens.colors.primary.clone(),
        }
    }

    /// Render the header
    pub fn render(&self, styles: &SectionHeaderStyles) -> Node {
        let mut children = vec![Node::text(&self.title, &styles.title)];
        if let Some(route) = &self.see_all {
            children.push(Node::pressable(
                Style::new().row().align_items(Alignment::Center),
                Action::Navigate(route.clone()),
                vec![
                    Node::text("See All", &styles.link),
                    Node::icon(IconName::ChevronRight, sizing::icon::MD, &styles.link_icon),
                ],
            ));
        }
        Node::view(styles.container.clone(), children)
    }
}

// =============================================================================
// Theme Toggle Component
// =============================================================================

/// Row with a switch that flips the theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToggle {
    /// Mode currently shown
    pub mode: ThemeMode,
}

/// Computed styles for the theme toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeToggleStyles {
    /// Row container
    pub container: Style,
    /// Label text
    pub label: Style,
    /// Mode icon color
    pub icon: Color,
    /// Track color when dark mode is on
    pub track_on: Color,
    /// Track color when dark mode is off
    pub track_off: Color,
    /// Thumb color
    pub thumb: Color,
}

impl ThemeToggle {
    /// Toggle reflecting `mode`
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Compute styles for the toggle based on tokens
    pub fn computed_styles(tokens: &TokenSet) -> ThemeToggleStyles {
        ThemeToggleStyles {
            container: Style::new()
                .row()
                .justify(JustifyContent::SpaceBetween)
                .align_items(Alignment::Center)
                .background(&tokens.colors.surface)
                .padding(Spacing::symmetric(spacing::SPACE_MD, spacing::SPACE_LG))
                .radius(radius::LG)
                .border(border::THIN, &tokens.colors.border),
            label: tokens.text(font_size::MD, FontWeight::Medium, &tokens.colors.text),
            icon: tokens.colors.primary.clone(),
            track_on: tokens.colors.primary.clone(),
            track_off: tokens.colors.border.clone(),
            thumb: ON_FILL.to_string(),
        }
    }

    /// Render the toggle
    pub fn render(&self, styles: &ThemeToggleStyles) -> Node {
        let icon = if self.mode.is_dark() {
            IconName::Moon
        } else {
            IconName::Sun
        };
        Node::view(
            styles.container.clone(),
            vec![
                Node::view(
                    Style::new()
                        .row()
                        .align_items(Alignment::Center)
                        .gap(spacing::SPACE_SM),
                    vec![
                        Node::icon(icon, sizing::icon::LG, &styles.icon),
                        Node::text(format!("{} Mode", self.mode), &styles.label),
                    ],
                ),
                Node::Switch {
                    value: self.mode.is_dark(),
                    track_on: styles.track_on.clone(),
                    track_off: styles.track_off.clone(),
                    thumb: styles.thumb.clone(),
                    on_toggle: Action::ToggleTheme,
                },
            ],
        )
    }
}

// =============================================================================
// Health Score Meter Component
// =============================================================================

/// Band a health score falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 to 79
    Good,
    /// Below 60
    NeedsAttention,
}

impl ScoreBand {
    /// Band for a score in 0-100
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            _ => ScoreBand::NeedsAttention,
        }
    }

    /// Color role of the ring and label
    pub fn role(&self) -> ColorRole {
        match self {
            ScoreBand::Excellent => ColorRole::Success,
            ScoreBand::Good => ColorRole::Warning,
            ScoreBand::NeedsAttention => ColorRole::Error,
        }
    }

    /// Label shown under the score
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsAttention => "Needs Attention",
        }
    }
}

/// Circular health score readout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreMeter {
    /// Score, 0-100
    pub score: u8,
    /// Outer diameter in pixels
    pub size: f32,
}

/// Computed styles for the health score meter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreStyles {
    /// Ring
    pub ring: Style,
    /// Score number
    pub score: Style,
    /// "/100" suffix
    pub out_of: Style,
    /// Band label
    pub label: Style,
}

impl HealthScoreMeter {
    /// Meter for `score`, clamped to 0-100
    pub fn new(score: i32, size: f32) -> Self {
        Self {
            score: score.clamp(0, 100) as u8,
            size,
        }
    }

    /// Band of the score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }

    /// Compute styles for the meter based on tokens
    pub fn computed_styles(&self, tokens: &TokenSet) -> HealthScoreStyles {
        let band_color = tokens.color(self.band().role());
        HealthScoreStyles {
            ring: Style::new()
                .size(self.size)
                .radius(self.size / 2.0)
                .border(border::RING, band_color)
                .background(&tokens.colors.surface)
                .centered(),
            score: tokens.text(font_size::title::DISPLAY, FontWeight::Bold, &tokens.colors.text),
            out_of: tokens.text(font_size::SM, FontWeight::Regular, &tokens.colors.text_secondary),
            label: tokens
                .text(font_size::MD, FontWeight::SemiBold, band_color)
                .margin(Spacing::top(spacing::SPACE_SM)),
        }
    }

    /// Render the meter
    pub fn render(&self, styles: &HealthScoreStyles) -> Node {
        Node::view(
            Style::new().align_items(Alignment::Center),
            vec![
                Node::view(
                    styles.ring.clone(),
                    vec![
                        Node::text(self.score.to_string(), &styles.score),
                        Node::text("/100", &styles.out_of),
                    ],
                ),
                Node::text(self.band().label(), &styles.label),
            ],
        )
    }
}

// =============================================================================
// Tab Bar Component
// =============================================================================

/// Bottom tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBar {
    /// Highlighted tab
    pub active: NavigationTab,
}

/// Computed styles for the tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarStyles {
    /// Bar container
    pub container: Style,
    /// Tab item container
    pub item: Style,
    /// Label text, without color
    pub label: Style,
    /// Icon and label color of the active tab
    pub active_tint: Color,
    /// Icon and label color of the other tabs
    pub inactive_tint: Color,
}

impl TabBar {
    /// Tab bar highlighting `active`
    pub fn new(active: NavigationTab) -> Self {
        Self { active }
    }

    /// Compute styles for the tab bar based on tokens
    pub fn computed_styles(tokens: &TokenSet) -> TabBarStyles {
        let mut label = tokens.text(font_size::SM, FontWeight::Medium, "");
        label.color = None;
        TabBarStyles {
            container: Style::new()
                .row()
                .background(&tokens.colors.surface)
                .border_top(border::THIN, &tokens.colors.border)
                .height(Dimension::px(sizing::tab_bar::HEIGHT))
                .padding(Spacing::vertical(sizing::tab_bar::PADDING)),
            item: Style::new().flex(1.0).centered(),
            label,
            active_tint: tokens.colors.primary.clone(),
            inactive_tint: tokens.colors.text_secondary.clone(),
        }
    }

    /// Tint for a tab
    pub fn tint<'a>(&self, tab: NavigationTab, styles: &'a TabBarStyles) -> &'a str {
        if tab == self.active {
            &styles.active_tint
        } else {
            &styles.inactive_tint
        }
    }

    /// Render the tab bar
    pub fn render(&self, styles: &TabBarStyles) -> Node {
        let items = NavigationTab::all()
            .into_iter()
            .map(|tab| {
                let tint = self.tint(tab, styles);
                Node::pressable(
                    styles.item.clone(),
                    Action::SwitchTab(tab),
                    vec![
                        Node::icon(tab.icon(), sizing::tab_bar::ICON, tint),
                        Node::text(tab.label(), &styles.label.clone().color(tint)),
                    ],
                )
            })
            .collect();
        Node::view(styles.container.clone(), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_tokens, light_tokens};

    // ==========================================================================
    // Style Tests
    // ==========================================================================

    #[test]
    fn test_style_builder() {
        let style = Style::new()
            .row()
            .gap(12.0)
            .background("#FFFFFF")
            .border(1.0, "#E2E8F0")
            .radius(16.0);

        assert_eq!(style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(style.gap, Some(12.0));
        assert_eq!(style.background_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(style.border_width, Some(1.0));
        assert_eq!(style.border_radius, Some(16.0));
        assert!(!style.is_empty());
        assert!(Style::new().is_empty());
    }

    #[test]
    fn test_style_merged() {
        let base = Style::new().padding(Spacing::uniform(16.0)).background("#FFFFFF");
        let over = Style::new().background("#000000").opacity(0.6);
        let merged = base.merged(&over);

        assert_eq!(merged.padding, Some(Spacing::uniform(16.0)));
        assert_eq!(merged.background_color.as_deref(), Some("#000000"));
        assert_eq!(merged.opacity, Some(0.6));
    }

    #[test]
    fn test_opacity_clamped() {
        assert_eq!(Style::new().opacity(1.5).opacity, Some(1.0));
        assert_eq!(Style::new().opacity(-0.5).opacity, Some(0.0));
    }

    #[test]
    fn test_dimension_percent() {
        assert_eq!(Dimension::percent(22.0), Dimension::Percent("22%".to_string()));
    }

    #[test]
    fn test_style_serialization_skips_unset() {
        let style = Style::new().font_size(14.0).strikethrough();
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["fontSize"], 14.0);
        assert_eq!(json["textDecoration"], "line-through");
        assert!(json.get("color").is_none());
    }

    // ==========================================================================
    // Node Tests
    // ==========================================================================

    fn sample_tree() -> Node {
        Node::view(
            Style::new(),
            vec![
                Node::text("Title", &Style::new()),
                Node::pressable(
                    Style::new(),
                    Action::Navigate(Route::LabTests),
                    vec![
                        Node::icon(IconName::TestTube, 24.0, "#3B82F6"),
                        Node::text("Book Test", &Style::new()),
                    ],
                ),
                Node::text("Back", &Style::new()).on_press(Action::Back),
            ],
        )
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample_tree().count(), 6);
        assert_eq!(Node::spacer(20.0).count(), 1);
    }

    #[test]
    fn test_node_texts_in_order() {
        assert_eq!(sample_tree().texts(), vec!["Title", "Book Test", "Back"]);
        assert!(sample_tree().contains_text("Book Test"));
        assert!(!sample_tree().contains_text("Book"));
    }

    #[test]
    fn test_node_actions() {
        let tree = sample_tree();
        let actions = tree.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(*actions[0], Action::Navigate(Route::LabTests));
        assert_eq!(*actions[1], Action::Back);
    }

    #[test]
    fn test_on_press_ignored_on_leaf_without_handler() {
        let node = Node::spacer(8.0).on_press(Action::Back);
        assert!(node.actions().is_empty());
    }

    #[test]
    fn test_filled_icon() {
        match Node::filled_icon(IconName::Star, 12.0, "#F59E0B") {
            Node::Icon { fill, color, .. } => assert_eq!(fill, Some(color)),
            other => panic!("Expected icon, got {:?}", other),
        }
    }

    #[test]
    fn test_node_serialization() {
        let json = serde_json::to_value(sample_tree()).unwrap();
        assert_eq!(json["type"], "view");
        assert_eq!(json["children"][1]["onPress"]["kind"], "navigate");
        assert_eq!(json["children"][1]["children"][0]["name"], "test-tube");

        let parsed: Node = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample_tree());
    }

    // ==========================================================================
    // Section Header Tests
    // ==========================================================================

    #[test]
    fn test_section_header_without_link() {
        let styles = SectionHeader::computed_styles(&light_tokens());
        let node = SectionHeader::new("Quick Actions").render(&styles);
        assert_eq!(node.texts(), vec!["Quick Actions"]);
        assert!(node.actions().is_empty());
    }

    #[test]
    fn test_section_header_with_link() {
        let tokens = light_tokens();
        let styles = SectionHeader::computed_styles(&tokens);
        let node = SectionHeader::new("Top Rated Doctors")
            .with_link(Route::Doctors)
            .render(&styles);

        assert!(node.contains_text("See All"));
        assert_eq!(node.actions(), vec![&Action::Navigate(Route::Doctors)]);
        assert_eq!(styles.title.font_family.as_deref(), Some("Inter-SemiBold"));
        assert_eq!(styles.link.color.as_deref(), Some("#3B82F6"));
    }

    // ==========================================================================
    // Theme Toggle Tests
    // ==========================================================================

    #[test]
    fn test_theme_toggle_reflects_mode() {
        let light = ThemeToggle::new(ThemeMode::Light)
            .render(&ThemeToggle::computed_styles(&light_tokens()));
        assert!(light.contains_text("Light Mode"));

        let dark = ThemeToggle::new(ThemeMode::Dark)
            .render(&ThemeToggle::computed_styles(&dark_tokens()));
        assert!(dark.contains_text("Dark Mode"));

        let mut switch_value = None;
        dark.walk(&mut |node| {
            if let Node::Switch { value, .. } = node {
                switch_value = Some(*value);
            }
        });
        assert_eq!(switch_value, Some(true));
    }

    #[test]
    fn test_theme_toggle_dispatches_toggle() {
        let node = ThemeToggle::new(ThemeMode::Light)
            .render(&ThemeToggle::computed_styles(&light_tokens()));
        assert_eq!(node.actions(), vec![&Action::ToggleTheme]);
    }

    // ==========================================================================
    // Health Score Meter Tests
    // ==========================================================================

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(59), ScoreBand::NeedsAttention);
        assert_eq!(ScoreBand::for_score(0), ScoreBand::NeedsAttention);
    }

    #[test]
    fn test_health_score_clamped() {
        assert_eq!(HealthScoreMeter::new(140, 150.0).score, 100);
        assert_eq!(HealthScoreMeter::new(-5, 150.0).score, 0);
    }

    #[test]
    fn test_health_score_ring_color() {
        let tokens = light_tokens();
        let meter = HealthScoreMeter::new(75, 150.0);
        let styles = meter.computed_styles(&tokens);

        assert_eq!(styles.ring.border_color.as_deref(), Some("#F59E0B"));
        assert_eq!(styles.ring.border_radius, Some(75.0));

        let node = meter.render(&styles);
        assert!(node.contains_text("75"));
        assert!(node.contains_text("Good"));
    }

    // ==========================================================================
    // Tab Bar Tests
    // ==========================================================================

    #[test]
    fn test_tab_bar_styles() {
        let tokens = light_tokens();
        let styles = TabBar::computed_styles(&tokens);

        assert_eq!(styles.container.background_color, Some(tokens.colors.surface.clone()));
        assert_eq!(styles.container.border_top_color, Some(tokens.colors.border.clone()));
        assert_eq!(styles.label.font_family.as_deref(), Some("Inter-Medium"));
        assert_eq!(styles.label.font_size, Some(12.0));
        assert_eq!(styles.active_tint, tokens.colors.primary);
        assert_eq!(styles.inactive_tint, tokens.colors.text_secondary);
    }

    #[test]
    fn test_tab_bar_render() {
        let tokens = dark_tokens();
        let styles = TabBar::computed_styles(&tokens);
        let bar = TabBar::new(NavigationTab::LabTests);
        let node = bar.render(&styles);

        assert_eq!(node.texts(), vec!["Explorer", "Lab Tests", "Consult", "Profile"]);
        assert_eq!(node.actions().len(), 4);

        let lab = node.find_text("Lab Tests").and_then(Node::style).unwrap();
        assert_eq!(lab.color.as_deref(), Some(tokens.colors.primary.as_str()));
        let profile = node.find_text("Profile").and_then(Node::style).unwrap();
        assert_eq!(profile.color.as_deref(), Some(tokens.colors.text_secondary.as_str()));
    }
}
