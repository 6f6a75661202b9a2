use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};
use ticklist_app::TaskStore;

use super::palette::Palette;
use super::view::Ui;

impl<S: TaskStore> Ui<S> {
    pub(super) const LIST_MIN_HEIGHT: u16 = 5;
    pub(super) const BAR_HEIGHT: u16 = 3;

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let palette = Palette::for_theme(self.app.book.theme());
        let area = f.area();
        f.render_widget(Block::default().style(palette.base), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::BAR_HEIGHT),
                Constraint::Min(Self::LIST_MIN_HEIGHT),
                Constraint::Length(Self::BAR_HEIGHT),
                Constraint::Length(Self::BAR_HEIGHT),
                Constraint::Length(Self::BAR_HEIGHT),
            ])
            .split(area);

        self.draw_filter_bar(f, chunks[0], &palette);
        self.draw_task_list(f, chunks[1], &palette);
        self.draw_input(f, chunks[2], &palette);
        self.draw_progress(f, chunks[3], &palette);
        self.draw_status(f, chunks[4], &palette);
    }
}
