use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ticklist_app::TaskStore;

use super::super::app::{EditOutcome, Mode};
use super::super::view::Ui;

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn handle_new_task_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => {
                let Mode::NewTask(line) = std::mem::replace(&mut self.app.mode, Mode::Browse)
                else {
                    return Ok(());
                };
                match self.app.add_task(line.text())? {
                    Some(id) => self.info(format!("added task {id}")),
                    None => self.info("nothing added: task text is empty"),
                }
            }

            KeyCode::Esc => {
                self.app.mode = Mode::Browse;
                self.info("new task cancelled");
            }

            _ => {
                if let Mode::NewTask(line) = &mut self.app.mode {
                    line.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub(in crate::tui) fn handle_search_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.app.mode = Mode::Browse,

            KeyCode::Esc => {
                self.app.mode = Mode::Browse;
                self.app.set_search(String::new());
                self.info("search cleared");
            }

            _ => {
                // The list narrows live while the search box is typed into.
                let typed = if let Mode::Search(line) = &mut self.app.mode {
                    line.handle_key(key);
                    Some(line.text().to_owned())
                } else {
                    None
                };
                if let Some(search) = typed {
                    self.app.set_search(search);
                }
            }
        }
        Ok(())
    }

    pub(in crate::tui) fn handle_edit_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => match self.app.commit_edit()? {
                EditOutcome::Saved => self.info("task updated"),
                EditOutcome::Deleted => self.info("empty text, task deleted"),
                EditOutcome::NotEditing => {}
            },

            KeyCode::Esc => {
                if let Some(original) = self.app.cancel_edit() {
                    self.info(format!("edit cancelled, kept {original:?}"));
                }
            }

            _ => {
                if let Mode::Edit(state) = &mut self.app.mode {
                    state.line.handle_key(key);
                }
            }
        }
        Ok(())
    }
}
