use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::UiConfig;

/// Coarse device class derived from the measured terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSizeClass {
    Compact,
    Medium,
    Expanded,
}

impl WindowSizeClass {
    /// Recomputed on every frame; never cached across resizes.
    pub fn classify(width: u16, config: &UiConfig) -> Self {
        if width >= config.expanded_min_columns {
            WindowSizeClass::Expanded
        } else if width >= config.medium_min_columns {
            WindowSizeClass::Medium
        } else {
            WindowSizeClass::Compact
        }
    }

    pub fn is_expanded(self) -> bool {
        self == WindowSizeClass::Expanded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeLayout {
    /// Side rail for tabs, content laid out as a grid.
    RailGrid,
    /// Bottom tab bar, content laid out as a list.
    BottomBarList,
}

impl HomeLayout {
    pub fn for_class(class: WindowSizeClass) -> Self {
        if class.is_expanded() {
            HomeLayout::RailGrid
        } else {
            HomeLayout::BottomBarList
        }
    }
}

const RAIL_WIDTH: u16 = 20;
const BOTTOM_BAR_HEIGHT: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into (content, tab area) for the given home layout.
pub fn home_regions(body: Rect, layout: HomeLayout) -> (Rect, Rect) {
    match layout {
        HomeLayout::RailGrid => {
            let rail = RAIL_WIDTH.min(body.width);
            let tabs = Rect {
                width: rail,
                ..body
            };
            let content = Rect {
                x: body.x + rail,
                width: body.width.saturating_sub(rail),
                ..body
            };
            (content, tabs)
        }
        HomeLayout::BottomBarList => {
            let bar = BOTTOM_BAR_HEIGHT.min(body.height);
            let content = Rect {
                height: body.height.saturating_sub(bar),
                ..body
            };
            let tabs = Rect {
                y: body.y + body.height.saturating_sub(bar),
                height: bar,
                ..body
            };
            (content, tabs)
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
