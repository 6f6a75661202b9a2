//! Non-interactive command handling.

use std::fmt::Write as _;

use anyhow::Result;
use ticklist_app::{TaskBook, TaskPatch, TaskStore};
use ticklist_core::{StatusFilter, TaskListView, ViewCriteria};

use crate::Command;

/// Execute a non-interactive command against the loaded task book.
pub fn run<S: TaskStore>(command: &Command, mut book: TaskBook<S>) -> Result<()> {
    match command {
        Command::Add { text } => {
            let text = text.join(" ");
            match book.add_task(&text)? {
                Some(id) => println!("added task {id}"),
                None => println!("nothing to add: task text is empty"),
            }
        }

        Command::Ls { filter, search } => {
            print!("{}", render_list(&book, *filter, search));
        }

        Command::Toggle { id } => match book.toggle_task(*id)? {
            Some(true) => println!("task {id} completed"),
            Some(false) => println!("task {id} reopened"),
            None => println!("no task with id {id}"),
        },

        Command::Edit { id, text } => {
            let text = text.join(" ");
            let trimmed = text.trim();
            if trimmed.is_empty() {
                // Empty replacement text means delete, same as the TUI edit flow.
                if book.remove_task(*id)? {
                    println!("task {id} deleted (empty text)");
                } else {
                    println!("no task with id {id}");
                }
            } else if book.update_task(*id, TaskPatch::text(trimmed))? {
                println!("task {id} updated");
            } else {
                println!("no task with id {id}");
            }
        }

        Command::Rm { id } => {
            if book.remove_task(*id)? {
                println!("task {id} deleted");
            } else {
                println!("no task with id {id}");
            }
        }

        Command::Clear => {
            let cleared = book.clear_completed()?;
            println!("cleared {cleared} completed task(s)");
        }

        Command::Theme => {
            let theme = book.toggle_theme()?;
            println!("theme set to {theme}");
        }

        // Routed to the TUI before this function is reached.
        Command::Tui => {}
    }
    Ok(())
}

fn render_list<S: TaskStore>(book: &TaskBook<S>, filter: StatusFilter, search: &str) -> String {
    let criteria = ViewCriteria {
        filter,
        search: search.to_owned(),
    };
    let view = TaskListView::compute(book.tasks(), &criteria);

    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "no tasks match");
    } else {
        for task in view.visible_tasks(book.tasks()) {
            let mark = if task.completed { "x" } else { " " };
            let _ = writeln!(out, "[{mark}] {:>13}  {}", task.id, task.text);
        }
    }
    let _ = writeln!(
        out,
        "{} pending, {} completed, {}% done",
        view.pending, view.completed, view.percent_complete
    );
    out
}
