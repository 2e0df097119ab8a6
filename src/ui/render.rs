use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, home_regions, layout_regions};
use crate::ui::shell::Shell;
use crate::ui::theme::{
    accent, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER,
    STATUS_ERROR,
};
use crate::ui::view::{AppView, Body, Item, Presentation, Section, TabBar, TabPlacement};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const GRID_CELL_WIDTH: usize = 32;

pub fn draw(frame: &mut Frame<'_>, view: &AppView, shell: &Shell) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&view.title, view.accent, view.signed_in);
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let content = match &view.tabs {
        Some(tabs) => {
            let (content, tab_area) = home_regions(body, view.layout);
            frame.render_widget(tab_widget(tabs, view.accent), tab_area);
            content
        }
        None => body,
    };
    draw_body(frame, content, view, shell.cursor());

    let footer_widget = Footer::new(&view.affordances, shell.prompt_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(text) = shell.prompt() {
        let popup_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup_area);
        let popup = Block::default()
            .title(Span::styled(
                "Open conference",
                Style::default().fg(accent(view.accent)),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let lines = vec![
            Line::from(format!("> {text}_")),
            Line::from(""),
            Line::from(Span::styled(
                "Conference id, e.g. kotlinconf24",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(popup), popup_area);
    }
}

fn tab_widget(tabs: &TabBar, rgb: Option<u32>) -> Paragraph<'static> {
    let selected = Style::default()
        .fg(accent(rgb))
        .add_modifier(Modifier::BOLD);
    let normal = Style::default().fg(HEADER_TEXT);
    let border = Style::default().fg(GLOBAL_BORDER);
    let style_of = |is_selected: bool| if is_selected { selected } else { normal };

    match tabs.placement {
        TabPlacement::Rail => {
            let lines: Vec<Line> = tabs
                .items
                .iter()
                .map(|item| {
                    let marker = if item.selected { "▶ " } else { "  " };
                    Line::from(Span::styled(
                        format!("{marker}{}", item.label),
                        style_of(item.selected),
                    ))
                })
                .collect();
            Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT).border_style(border))
        }
        TabPlacement::BottomBar => {
            let mut spans = Vec::new();
            for (idx, item) in tabs.items.iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
                }
                spans.push(Span::styled(item.label, style_of(item.selected)));
            }
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::TOP).border_style(border))
        }
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, view: &AppView, cursor: usize) {
    let dim = Style::default().fg(HEADER_SEPARATOR);
    match &view.body {
        Body::Loading => {
            let widget = Paragraph::new(Line::from(Span::styled("Loading…", dim)))
                .alignment(Alignment::Center);
            frame.render_widget(widget, vertical_middle(area));
        }
        Body::Error { reason } => {
            let lines = vec![
                Line::from(Span::styled(
                    reason.clone(),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(""),
                Line::from(Span::styled("Press r to retry", dim)),
            ];
            let widget = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(widget, vertical_middle(area));
        }
        Body::Notice(text) => {
            let widget = Paragraph::new(text.clone())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(widget, vertical_middle(area));
        }
        Body::Empty => {
            let widget = Paragraph::new(Line::from(Span::styled("Nothing here yet", dim)))
                .alignment(Alignment::Center);
            frame.render_widget(widget, vertical_middle(area));
        }
        Body::Items {
            presentation,
            sections,
        } => {
            let (lines, selected_line) = match presentation {
                Presentation::List => list_lines(sections, cursor, view.accent),
                Presentation::Grid => grid_lines(sections, cursor, view.accent, area.width),
            };
            let widget = Paragraph::new(lines).scroll((scroll_offset(selected_line, area), 0));
            frame.render_widget(widget, padded(area));
        }
        Body::Detail {
            heading,
            subheading,
            paragraphs,
            links_title,
            links,
        } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    heading.clone(),
                    Style::default()
                        .fg(accent(view.accent))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(subheading.clone(), dim)),
                Line::from(""),
            ];
            lines.extend(paragraphs.iter().map(|p| Line::from(p.clone())));
            let mut selected_line = None;
            if !links.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    links_title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                for (idx, link) in links.iter().enumerate() {
                    if idx == cursor {
                        selected_line = Some(lines.len());
                    }
                    lines.push(item_line(link, idx == cursor, view.accent, None));
                }
            }
            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll_offset(selected_line, area), 0));
            frame.render_widget(widget, padded(area));
        }
    }
}

fn list_lines(
    sections: &[Section],
    cursor: usize,
    rgb: Option<u32>,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut index = 0;
    for section in sections {
        if let Some(heading) = &section.heading {
            lines.push(heading_line(heading));
        }
        for item in &section.items {
            if index == cursor {
                selected_line = Some(lines.len());
            }
            lines.push(item_line(item, index == cursor, rgb, None));
            index += 1;
        }
    }
    (lines, selected_line)
}

fn grid_lines(
    sections: &[Section],
    cursor: usize,
    rgb: Option<u32>,
    width: u16,
) -> (Vec<Line<'static>>, Option<usize>) {
    let columns = (width as usize / GRID_CELL_WIDTH).max(1);
    let mut lines = Vec::new();
    let mut selected_line = None;
    let mut index = 0;
    for section in sections {
        if let Some(heading) = &section.heading {
            lines.push(heading_line(heading));
        }
        for row in section.items.chunks(columns) {
            let mut spans = Vec::new();
            for item in row {
                if index == cursor {
                    selected_line = Some(lines.len());
                }
                spans.extend(item_line(item, index == cursor, rgb, Some(GRID_CELL_WIDTH)).spans);
                index += 1;
            }
            lines.push(Line::from(spans));
        }
    }
    (lines, selected_line)
}

fn heading_line(heading: &str) -> Line<'static> {
    Line::from(Span::styled(
        heading.to_string(),
        Style::default()
            .fg(HEADER_SEPARATOR)
            .add_modifier(Modifier::BOLD),
    ))
}

/// One item; `cell` pads or truncates to a fixed width for grid layout.
fn item_line(item: &Item, selected: bool, rgb: Option<u32>, cell: Option<usize>) -> Line<'static> {
    let marker = if item.marked { "★ " } else { "  " };
    let mut text = format!("{marker}{}", item.label);
    if !item.detail.is_empty() {
        text.push_str(&format!("  · {}", item.detail));
    }
    if let Some(width) = cell {
        let body = width.saturating_sub(1);
        text = text.chars().take(body).collect();
        let used = text.chars().count();
        text.push_str(&" ".repeat(width - used));
    }
    let style = if selected {
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .fg(accent(rgb))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(Span::styled(text, style))
}

fn scroll_offset(selected_line: Option<usize>, area: Rect) -> u16 {
    let visible = area.height.max(1) as usize;
    match selected_line {
        Some(line) if line >= visible => (line + 1 - visible) as u16,
        _ => 0,
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1).min(area.x + area.width),
        width: area.width.saturating_sub(2),
        ..area
    }
}

fn vertical_middle(area: Rect) -> Rect {
    let top = area.height / 3;
    Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    }
}
