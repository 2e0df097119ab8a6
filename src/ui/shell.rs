//! Shell-owned interaction state: cursor, deep-link prompt, quit flag.
//!
//! Components never see this; it lives beside the view model and is reset
//! whenever the active screen changes.

use crate::navigation::AppHost;
use crate::ui::dispatch::dispatch;
use crate::ui::input::UiAction;
use crate::ui::view::{Affordance, AppView};

#[derive(Debug, Default)]
pub struct Shell {
    cursor: usize,
    screen_key: String,
    prompt: Option<String>,
    quit: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Align the cursor with a freshly built view.
    pub fn sync(&mut self, view: &AppView) {
        if view.key != self.screen_key {
            self.screen_key = view.key.clone();
            self.cursor = 0;
        }
        let count = view.body.selectable().len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    pub fn handle(&mut self, host: &mut AppHost, view: &AppView, action: UiAction) {
        match action {
            UiAction::Quit => self.quit = true,
            UiAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            UiAction::MoveDown => {
                let count = view.body.selectable().len();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            UiAction::OpenDeepLink if view.offers(Affordance::DeepLink) => {
                self.prompt = Some(String::new());
            }
            UiAction::PromptChar(ch) => {
                if let Some(text) = self.prompt.as_mut() {
                    text.push(ch);
                }
            }
            UiAction::PromptBackspace => {
                if let Some(text) = self.prompt.as_mut() {
                    text.pop();
                }
            }
            UiAction::PromptCancel => self.prompt = None,
            UiAction::PromptSubmit => {
                let id = self.prompt.take().unwrap_or_default();
                let id = id.trim();
                if !id.is_empty() {
                    host.on_conference_deep_link(id);
                }
            }
            other => {
                if let Err(err) = dispatch(host.root(), view, other, self.cursor) {
                    tracing::warn!(action = ?other, error = %err, "action failed");
                }
            }
        }
    }
}
