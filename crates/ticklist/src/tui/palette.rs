use ratatui::style::{Color, Modifier, Style};
use ticklist_core::Theme;

/// Styles derived from the persisted theme preference.
pub(super) struct Palette {
    /// Whole-screen background and default foreground.
    pub(super) base: Style,
    /// Regular list entry.
    pub(super) item: Style,
    /// Completed list entry.
    pub(super) done: Style,
    /// Highlight applied on top of the selected entry.
    pub(super) selection: Style,
    /// Titles, tabs, and the progress gauge.
    pub(super) accent: Style,
}

impl Palette {
    pub(super) const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::new().bg(Color::Black).fg(Color::White),
                item: Style::new().fg(Color::White),
                done: Style::new()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
                selection: Style::new().bg(Color::Blue).fg(Color::White),
                accent: Style::new().fg(Color::Cyan),
            },
            Theme::Light => Self {
                base: Style::new().bg(Color::White).fg(Color::Black),
                item: Style::new().fg(Color::Black),
                done: Style::new()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::CROSSED_OUT),
                selection: Style::new().bg(Color::LightBlue).fg(Color::Black),
                accent: Style::new().fg(Color::Blue),
            },
        }
    }
}
