use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    MoveUp,
    MoveDown,
    Select,
    Back,
    NextTab,
    PrevTab,
    Refresh,
    ToggleBookmark,
    SwitchConference,
    SignIn,
    SignOut,
    Settings,
    OpenDeepLink,
    PromptChar(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    Quit,
}

/// Map a key to an action. While the deep-link prompt is open, printable
/// keys go to the prompt.
pub fn map_key(key: KeyEvent, prompt_open: bool) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return Some(UiAction::Quit);
    }

    if prompt_open {
        return match key.code {
            KeyCode::Esc => Some(UiAction::PromptCancel),
            KeyCode::Enter => Some(UiAction::PromptSubmit),
            KeyCode::Backspace => Some(UiAction::PromptBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(UiAction::PromptChar(ch))
            }
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => UiAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => UiAction::MoveDown,
        KeyCode::Enter => UiAction::Select,
        KeyCode::Esc | KeyCode::Backspace => UiAction::Back,
        KeyCode::Tab | KeyCode::Right => UiAction::NextTab,
        KeyCode::BackTab | KeyCode::Left => UiAction::PrevTab,
        KeyCode::Char('r') => UiAction::Refresh,
        KeyCode::Char('b') => UiAction::ToggleBookmark,
        KeyCode::Char('c') => UiAction::SwitchConference,
        KeyCode::Char('i') => UiAction::SignIn,
        KeyCode::Char('o') => UiAction::SignOut,
        KeyCode::Char('s') => UiAction::Settings,
        KeyCode::Char('g') => UiAction::OpenDeepLink,
        KeyCode::Char('q') => UiAction::Quit,
        _ => return None,
    };
    Some(action)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
