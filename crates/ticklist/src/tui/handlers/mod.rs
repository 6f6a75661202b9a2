use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use ticklist_app::TaskStore;

use super::app::Mode;
use super::view::Ui;

mod browse;
mod editing;

impl<S: TaskStore> Ui<S> {
    /// Dispatch a key press to the handler for the current input mode.
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.app.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::NewTask(_) => self.handle_new_task_key(key),
            Mode::Search(_) => self.handle_search_key(key),
            Mode::Edit(_) => self.handle_edit_key(key),
        }
    }
}
