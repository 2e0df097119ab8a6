//! Turns shell actions into component intents.

use crate::error::NavError;
use crate::navigation::{AppComponent, HomeChild, HomeTab};
use crate::ui::input::UiAction;
use crate::ui::view::{active_screen, ActiveScreen, Affordance, AppView, Body};

/// Apply `action` to the screen described by `view`.
///
/// Actions the view does not offer are ignored. `view` must have been built
/// from the current tree; the shell rebuilds it after every task it runs.
pub fn dispatch(
    root: &AppComponent,
    view: &AppView,
    action: UiAction,
    cursor: usize,
) -> Result<(), NavError> {
    let screen = active_screen(root);
    let selected = view.selected(cursor).map(|item| item.id.clone());

    match action {
        UiAction::Refresh | UiAction::Select
            if view.offers(Affordance::Retry) && matches!(view.body, Body::Error { .. }) =>
        {
            refresh(&screen)
        }
        UiAction::Refresh if view.offers(Affordance::Refresh) => refresh(&screen),
        UiAction::Select if view.offers(Affordance::Select) => match selected {
            Some(id) => select(&screen, &id),
            None => Ok(()),
        },
        UiAction::Back if view.offers(Affordance::Back) => back(&screen),
        UiAction::NextTab | UiAction::PrevTab if view.offers(Affordance::Tabs) => {
            if let ActiveScreen::Home { home, .. } = &screen {
                home.on_tab_clicked(step_tab(home.active_tab(), action == UiAction::NextTab))
            } else {
                Ok(())
            }
        }
        UiAction::ToggleBookmark if view.offers(Affordance::Bookmark) => {
            match (&screen, selected, view.selected(cursor)) {
                (
                    ActiveScreen::Home {
                        child: HomeChild::Sessions(sessions),
                        ..
                    },
                    Some(id),
                    Some(item),
                ) => {
                    if item.marked {
                        sessions.remove_bookmark(&id)
                    } else {
                        sessions.add_bookmark(&id)
                    }
                }
                _ => Ok(()),
            }
        }
        UiAction::SignIn if view.offers(Affordance::SignIn) => {
            if let ActiveScreen::Home {
                child: HomeChild::Sessions(sessions),
                ..
            } = &screen
            {
                sessions.on_sign_in_clicked();
            }
            Ok(())
        }
        UiAction::SignOut if view.offers(Affordance::SignOut) => root.sign_out(),
        UiAction::SwitchConference if view.offers(Affordance::SwitchConference) => {
            if let ActiveScreen::Home { home, .. } = &screen {
                home.on_switch_conference_clicked();
            }
            Ok(())
        }
        UiAction::Settings if view.offers(Affordance::Settings) => match &screen {
            ActiveScreen::Home { conference, .. } => conference.show_settings(),
            _ => Ok(()),
        },
        other => {
            tracing::trace!(action = ?other, screen = %view.key, "action not offered");
            Ok(())
        }
    }
}

fn refresh(screen: &ActiveScreen) -> Result<(), NavError> {
    match screen {
        ActiveScreen::Conferences(c) => c.refresh(),
        ActiveScreen::Home { child, .. } => match child {
            HomeChild::Sessions(c) => c.refresh(),
            HomeChild::Speakers(c) => c.refresh(),
            HomeChild::Venue(c) => c.refresh(),
            _ => Ok(()),
        },
        ActiveScreen::SessionDetails { component, .. } => component.refresh(),
        ActiveScreen::SpeakerDetails { component, .. } => component.refresh(),
        ActiveScreen::Loading | ActiveScreen::Settings { .. } => Ok(()),
    }
}

fn select(screen: &ActiveScreen, id: &str) -> Result<(), NavError> {
    match screen {
        ActiveScreen::Conferences(c) => c.on_conference_clicked(id),
        ActiveScreen::Home { child, .. } => match child {
            HomeChild::Sessions(c) => c.on_session_clicked(id),
            HomeChild::Speakers(c) => c.on_speaker_clicked(id),
            _ => {}
        },
        ActiveScreen::SessionDetails { component, .. } => component.on_speaker_clicked(id),
        ActiveScreen::SpeakerDetails { component, .. } => component.on_session_clicked(id),
        ActiveScreen::Loading | ActiveScreen::Settings { .. } => {}
    }
    Ok(())
}

fn back(screen: &ActiveScreen) -> Result<(), NavError> {
    match screen {
        ActiveScreen::SessionDetails { component, .. } => component.on_close_clicked(),
        ActiveScreen::SpeakerDetails { component, .. } => component.on_close_clicked(),
        ActiveScreen::Settings { conference } => return conference.close(),
        _ => {}
    }
    Ok(())
}

fn step_tab(current: HomeTab, forward: bool) -> HomeTab {
    let count = HomeTab::ALL.len();
    let index = HomeTab::ALL
        .iter()
        .position(|&t| t == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    };
    HomeTab::ALL[next]
}
