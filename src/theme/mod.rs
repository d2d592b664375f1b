//! Theme system for human-mode output.

use console::Style;

/// Visual theme for `ssa` human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
pub struct SsaTheme {
    // Status colors
    pub success: Style,
    pub warning: Style,
    pub muted: Style,

    // Component styles
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub index: Style,
    pub appid: Style,
    pub path: Style,

    // Diagnostics go to stderr, so their colors follow stderr's terminal
    pub diag_error: Style,
    pub diag_warning: Style,
    pub diag_hint: Style,
}

impl Default for SsaTheme {
    fn default() -> Self {
        Self {
            success: Style::new().green().bold(),
            warning: Style::new().yellow().bold(),
            muted: Style::new().dim(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            index: Style::new().yellow().bold(),
            appid: Style::new().magenta(),
            path: Style::new().italic(),
            diag_error: Style::new().for_stderr().red().bold(),
            diag_warning: Style::new().for_stderr().yellow().bold(),
            diag_hint: Style::new().for_stderr().dim(),
        }
    }
}
