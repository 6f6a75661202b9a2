use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ticklist_app::TaskStore;
use ticklist_core::StatusFilter;

use super::super::app::Mode;
use super::super::input::InputLine;
use super::super::view::Ui;

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn handle_browse_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => self.app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.app.select_prev(),

            KeyCode::Char('a') => self.app.mode = Mode::NewTask(InputLine::default()),

            KeyCode::Char('/') => {
                let current = self.app.criteria.search.clone();
                self.app.mode = Mode::Search(InputLine::with_text(&current));
            }

            KeyCode::Char('e') => {
                if !self.app.start_edit() {
                    self.error("no task selected to edit");
                }
            }

            KeyCode::Char(' ') => match self.app.toggle_selected()? {
                Some(true) => self.info("task completed"),
                Some(false) => self.info("task reopened"),
                None => self.error("no task selected"),
            },

            KeyCode::Char('d') => match self.app.delete_selected()? {
                Some(id) => self.info(format!("deleted task {id}")),
                None => self.error("no task selected"),
            },

            KeyCode::Char('c') => {
                let cleared = self.app.clear_completed()?;
                self.info(format!("cleared {cleared} completed task(s)"));
            }

            KeyCode::Char('f') => self.app.cycle_filter(),
            KeyCode::Char('1') => self.app.set_filter(StatusFilter::All),
            KeyCode::Char('2') => self.app.set_filter(StatusFilter::Pending),
            KeyCode::Char('3') => self.app.set_filter(StatusFilter::Completed),

            KeyCode::Char('t') => {
                let theme = self.app.toggle_theme()?;
                self.info(format!("theme set to {theme}"));
            }

            KeyCode::Esc => {
                if !self.app.criteria.search.is_empty() {
                    self.app.set_search(String::new());
                    self.info("search cleared");
                }
            }

            _ => {}
        }
        Ok(())
    }
}
