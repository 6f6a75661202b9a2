use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
};
use ticklist_app::TaskStore;
use ticklist_core::StatusFilter;

use super::super::app::Mode;
use super::super::input::InputLine;
use super::super::palette::Palette;
use super::super::view::Ui;

const HELP: &str = "a add, / search, space toggle, e edit, d delete, c clear done, f filter, t theme, q quit";

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn draw_filter_bar(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let selected = StatusFilter::ALL
            .iter()
            .position(|&filter| filter == self.app.criteria.filter)
            .unwrap_or(0);
        let tabs = Tabs::new(StatusFilter::ALL.map(StatusFilter::as_str))
            .select(selected)
            .style(palette.item)
            .highlight_style(palette.selection)
            .block(Block::default().title("filter").borders(Borders::ALL));
        f.render_widget(tabs, columns[0]);

        let search = Paragraph::new(self.app.criteria.search.as_str())
            .style(palette.item)
            .block(Block::default().title("search").borders(Borders::ALL));
        f.render_widget(search, columns[1]);
    }

    pub(in crate::tui) fn draw_input(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let (title, line): (Cow<'_, str>, Option<&InputLine>) = match &self.app.mode {
            Mode::Browse => (Cow::Borrowed("input"), None),
            Mode::NewTask(line) => (Cow::Borrowed("new task (Enter save, Esc cancel)"), Some(line)),
            Mode::Search(line) => (Cow::Borrowed("search (Enter keep, Esc clear)"), Some(line)),
            Mode::Edit(state) => (
                Cow::Owned(format!("edit task {} (Enter save, Esc cancel)", state.id)),
                Some(&state.line),
            ),
        };

        let text = line.map_or("", InputLine::text);
        let paragraph = Paragraph::new(text)
            .style(palette.item)
            .block(Block::default().title(title.into_owned()).borders(Borders::ALL));
        f.render_widget(paragraph, area);

        // Show the terminal cursor inside the box while typing.
        if let Some(line) = line {
            let column = u16::try_from(line.cursor_column()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(column);
            f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }

    pub(in crate::tui) fn draw_progress(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let view = &self.app.view;
        let label = format!(
            "{}% done, {} pending, {} completed",
            view.percent_complete, view.pending, view.completed
        );
        let gauge = Gauge::default()
            .percent(u16::from(view.percent_complete))
            .label(label)
            .gauge_style(palette.accent)
            .block(Block::default().title("progress").borders(Borders::ALL));
        f.render_widget(gauge, area);
    }

    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let (text, style): (Cow<'_, str>, Style) = self.message.as_ref().map_or(
            (Cow::Borrowed(HELP), palette.item),
            |msg| (Cow::Borrowed(msg.text.as_str()), msg.style()),
        );

        let title = format!("status [{} theme]", self.app.book.theme());
        let paragraph = Paragraph::new(text)
            .style(style)
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
