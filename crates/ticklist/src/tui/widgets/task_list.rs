use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use ticklist_app::TaskStore;

use super::super::palette::Palette;
use super::super::view::Ui;
use super::util::truncate_with_ellipsis;

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect, palette: &Palette) {
        let view = &self.app.view;
        let title = format!("tasks ({}/{})", view.len(), view.total);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(palette.accent);

        if view.is_empty() {
            let hint = if view.total == 0 {
                "no tasks yet, press a to add one"
            } else {
                "no tasks match the current filter and search"
            };
            f.render_widget(Paragraph::new(hint).style(palette.item).block(block), area);
            return;
        }

        // Room inside the borders, minus the "[x] " marker.
        let text_width = usize::from(area.width.saturating_sub(6));
        let items: Vec<ListItem<'_>> = view
            .visible_tasks(self.app.book.tasks())
            .enumerate()
            .map(|(pos, task)| {
                let mark = if task.completed { "[x]" } else { "[ ]" };
                let text = truncate_with_ellipsis(&task.text, text_width);
                let mut style = if task.completed { palette.done } else { palette.item };
                if pos == self.app.selected_index() {
                    style = style.patch(palette.selection);
                }
                ListItem::new(Line::from(format!("{mark} {text}"))).style(style)
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
    }
}
