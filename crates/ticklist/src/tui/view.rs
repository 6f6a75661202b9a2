use std::time::{Duration, Instant};

use ratatui::style::{Color, Style};
use ticklist_app::TaskStore;

use super::app::App;
use super::UI_MESSAGE_TTL_SECS;

/// UI chrome around the application state: transient status messages
/// and the quit flag.
pub(super) struct Ui<S: TaskStore> {
    pub(super) app: App<S>,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
}

impl<S: TaskStore> Ui<S> {
    pub(super) const fn new(app: App<S>) -> Self {
        Self {
            app,
            message: None,
            should_quit: false,
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    /// Expire stale status messages.
    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) const fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::new().fg(Color::Green),
            MessageLevel::Error => Style::new().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
