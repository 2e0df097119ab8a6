use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::view::Affordance;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the affordances of the current screen.
pub struct Footer<'a> {
    affordances: &'a [Affordance],
    prompt_open: bool,
}

impl<'a> Footer<'a> {
    pub fn new(affordances: &'a [Affordance], prompt_open: bool) -> Self {
        Self {
            affordances,
            prompt_open,
        }
    }

    pub fn hints(&self) -> String {
        if self.prompt_open {
            return " Enter: Open │ Esc: Cancel".to_string();
        }
        let mut hints: Vec<&str> = self
            .affordances
            .iter()
            .map(|&affordance| hint(affordance))
            .collect();
        hints.push("q: Quit");
        format!(" {}", hints.join(" │ "))
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: hints contain box-drawing separators.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hint(affordance: Affordance) -> &'static str {
    match affordance {
        Affordance::Select => "Enter: Open",
        Affordance::Back => "Esc: Back",
        Affordance::Tabs => "Tab: Switch tab",
        Affordance::Refresh => "r: Refresh",
        Affordance::Retry => "r: Retry",
        Affordance::Bookmark => "b: Bookmark",
        Affordance::SignIn => "i: Sign in",
        Affordance::SignOut => "o: Sign out",
        Affordance::SwitchConference => "c: Conferences",
        Affordance::Settings => "s: Settings",
        Affordance::DeepLink => "g: Go to",
    }
}
