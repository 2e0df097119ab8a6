use crate::ui::theme::{accent, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    accent: Option<u32>,
    signed_in: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, accent: Option<u32>, signed_in: bool) -> Self {
        Self {
            title,
            accent,
            signed_in,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(accent(self.accent))
            .add_modifier(Modifier::BOLD);
        let (marker, account) = if self.signed_in {
            (Span::styled("●", Style::default().fg(STATUS_OK)), "Signed in")
        } else {
            (Span::styled("○", separator_style), "Guest")
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(self.title.to_string(), title_style),
            Span::styled("  │  ", separator_style),
            marker,
            Span::styled(" ", text_style),
            Span::styled(account, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
