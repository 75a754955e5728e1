//! Render every screen through the shell and summarize the trees

use app_ui::{Action, NavigationTab, Node, Route, Shell, ThemeConfig, ThemeMode, ThemeStore};
use serde::Serialize;

/// One rendered screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSummary {
    /// Route path the screen was rendered for
    pub screen: String,
    /// Mode it was rendered in
    pub mode: ThemeMode,
    /// Nodes in the rendered tree
    pub nodes: usize,
    /// First background color in the tree
    pub background: Option<String>,
}

impl ScreenSummary {
    /// Summarize a rendered tree
    pub fn of(route: &Route, mode: ThemeMode, node: &Node) -> Self {
        let mut background = None;
        node.walk(&mut |n| {
            if background.is_none() {
                background = n.style().and_then(|s| s.background_color.clone());
            }
        });
        Self {
            screen: route.to_path(),
            mode,
            nodes: node.count(),
            background,
        }
    }
}

/// Renders before and after a theme toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewReport {
    /// Screens in the initial mode
    pub before: Vec<ScreenSummary>,
    /// Screens after toggling
    pub after: Vec<ScreenSummary>,
    /// Style derivations of the tab screens, in tab order
    pub derivations: [usize; 4],
}

/// Detail routes rendered after the tab roots
fn detail_routes() -> [Route; 2] {
    [Route::doctor(1), Route::diagnostic_center(1)]
}

fn render_all(shell: &mut Shell) -> Vec<ScreenSummary> {
    let mode = shell.store().mode();
    let mut summaries = Vec::new();

    for tab in NavigationTab::all() {
        shell.dispatch(&Action::SwitchTab(tab));
        let node = shell.render_current();
        summaries.push(ScreenSummary::of(&tab.root_route(), mode, &node));
    }

    shell.dispatch(&Action::SwitchTab(NavigationTab::Explorer));
    for route in detail_routes() {
        shell.dispatch(&Action::Navigate(route.clone()));
        let node = shell.render_current();
        summaries.push(ScreenSummary::of(&route, mode, &node));
        shell.dispatch(&Action::Back);
    }

    tracing::info!(mode = %mode, screens = summaries.len(), "rendered screens");
    summaries
}

/// Render all screens, toggle the theme, and render them again
pub fn run_preview(config: &ThemeConfig) -> PreviewReport {
    let mut shell = Shell::new(ThemeStore::from_config(config));

    let before = render_all(&mut shell);
    shell.dispatch(&Action::ToggleTheme);
    let after = render_all(&mut shell);

    PreviewReport {
        before,
        after,
        derivations: shell.derivations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_covers_every_screen() {
        let report = run_preview(&ThemeConfig::default());
        let screens: Vec<&str> = report.before.iter().map(|s| s.screen.as_str()).collect();
        assert_eq!(
            screens,
            vec![
                "/",
                "/lab-tests",
                "/consult",
                "/profile",
                "/doctor/1",
                "/diagnostic-center/1"
            ]
        );
        assert_eq!(report.after.len(), report.before.len());
    }

    #[test]
    fn test_preview_toggles_mode_and_backgrounds() {
        let report = run_preview(&ThemeConfig::default());
        assert!(report.before.iter().all(|s| s.mode == ThemeMode::Light));
        assert!(report.after.iter().all(|s| s.mode == ThemeMode::Dark));
        assert!(report
            .before
            .iter()
            .all(|s| s.background.as_deref() == Some("#F8FAFC")));
        assert!(report
            .after
            .iter()
            .all(|s| s.background.as_deref() == Some("#0F172A")));
        assert_eq!(report.derivations, [2, 2, 2, 2]);
    }

    #[test]
    fn test_summary_serialization() {
        let report = run_preview(&ThemeConfig::default());
        let json = serde_json::to_value(&report.before[0]).unwrap();
        assert_eq!(json["screen"], "/");
        assert_eq!(json["mode"], "light");
        assert!(json["nodes"].as_u64().unwrap() > 50);
    }
}
