//! Whole-tree scenarios driven through the root component and the shell view.

mod common;

use common::*;
use confetti::component::callback;
use confetti::data::SelectionStore;
use confetti::error::NavError;
use confetti::navigation::{
    AppConfig, AppHost, AppOptions, ConferenceConfig, HomeChild, HomeConfig, HomeTab,
};
use confetti::screens::{LoadState, SessionsComponent};
use confetti::ui::dispatch::dispatch;
use confetti::ui::input::UiAction;
use confetti::ui::layout::{HomeLayout, WindowSizeClass};
use confetti::ui::view::{
    active_screen, build, ActiveScreen, Affordance, Body, Presentation, TabPlacement,
    MULTI_PANE_NOTICE,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn sessions(host: &AppHost) -> SessionsComponent {
    match active_screen(host.root()) {
        ActiveScreen::Home {
            child: HomeChild::Sessions(sessions),
            ..
        } => sessions,
        _ => panic!("schedule is not active"),
    }
}

fn conference_configs(host: &AppHost) -> Vec<ConferenceConfig> {
    match host.root().stack().value().active().instance.clone() {
        confetti::navigation::AppChild::Conference(conference) => {
            conference.stack().value().configurations()
        }
        _ => panic!("no conference open"),
    }
}

#[tokio::test]
async fn persisted_selection_is_restored_after_loading() {
    let mut h = Harness::with_selection(Some("kotlinconf24"));
    let host = h.host(None);
    assert_eq!(active_app(&host), AppConfig::Loading);

    h.settle().await;
    assert_eq!(active_app(&host), conference("kotlinconf24"));
}

#[tokio::test]
async fn choosing_before_the_stored_selection_resolves_wins() {
    let mut h = Harness::with_selection(Some("kotlinconf24"));
    let host = h.host(None);
    assert_eq!(active_app(&host), AppConfig::Loading);

    host.root().select_conference("devfest23").unwrap();
    h.settle().await;

    assert_eq!(active_app(&host), conference("devfest23"));
    assert_eq!(h.selection.load().unwrap().as_deref(), Some("devfest23"));
    host.destroy();
}

#[tokio::test]
async fn no_selection_opens_the_list_and_choosing_persists() {
    let mut h = Harness::new();
    let host = h.host(None);
    h.settle().await;
    assert_eq!(active_app(&host), AppConfig::Conferences);

    let view = build(host.root(), WindowSizeClass::Compact);
    dispatch(host.root(), &view, UiAction::Select, 0).unwrap();
    h.settle().await;

    assert_eq!(active_app(&host), conference("devfest23"));
    assert_eq!(h.selection.load().unwrap().as_deref(), Some("devfest23"));
    host.destroy();
}

#[tokio::test]
async fn deep_link_discards_the_old_tree() {
    let mut h = Harness::new();
    h.repository = h.repository.clone().with_latency(Duration::from_millis(10));
    let mut host = h.host(Some("devfest23"));
    h.settle().await;

    let old_lifecycle = host.lifecycle().clone();
    let old_sessions = sessions(&host);
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let _subscription = old_sessions.state().subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // A load is in flight when the link arrives.
    old_sessions.refresh().unwrap();
    let before = fired.load(Ordering::SeqCst);
    host.on_conference_deep_link("kotlinconf24");

    assert!(old_lifecycle.is_destroyed());
    assert!(!host.lifecycle().is_destroyed());
    assert_eq!(active_app(&host), conference("kotlinconf24"));
    assert_eq!(h.selection.load().unwrap().as_deref(), Some("kotlinconf24"));

    tokio::time::sleep(Duration::from_millis(40)).await;
    h.settle().await;

    assert_eq!(fired.load(Ordering::SeqCst), before);
    assert!(matches!(
        old_sessions.refresh(),
        Err(NavError::LifecycleViolation { .. })
    ));
    assert_eq!(
        sessions(&host).state().value().content().map(|c| c.conference_name.clone()),
        Some("KotlinConf 2024".to_string())
    );
}

#[tokio::test]
async fn layout_flip_changes_presentation_only() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    let stack_before = host.root().stack().value().configurations();
    let conference_before = conference_configs(&host);
    let state_before = sessions(&host).state().value();

    let compact = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(compact.layout, HomeLayout::BottomBarList);
    assert_eq!(
        compact.tabs.as_ref().map(|t| t.placement),
        Some(TabPlacement::BottomBar)
    );
    assert!(matches!(
        compact.body,
        Body::Items {
            presentation: Presentation::List,
            ..
        }
    ));

    let expanded = build(host.root(), WindowSizeClass::Expanded);
    assert_eq!(expanded.layout, HomeLayout::RailGrid);
    assert_eq!(
        expanded.tabs.as_ref().map(|t| t.placement),
        Some(TabPlacement::Rail)
    );
    assert!(matches!(
        expanded.body,
        Body::Items {
            presentation: Presentation::Grid,
            ..
        }
    ));
    assert_eq!(expanded.key, compact.key);
    assert_eq!(expanded.body.selectable(), compact.body.selectable());

    assert_eq!(host.root().stack().value().configurations(), stack_before);
    assert_eq!(conference_configs(&host), conference_before);
    assert_eq!(sessions(&host).state().value(), state_before);
}

#[tokio::test]
async fn grid_schedule_only_offers_opening_sessions() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    let grid = build(host.root(), WindowSizeClass::Expanded);
    assert!(grid.offers(Affordance::Select));
    assert!(!grid.offers(Affordance::Refresh));
    assert!(!grid.offers(Affordance::Bookmark));
    assert!(!grid.offers(Affordance::SignIn));

    let list = build(host.root(), WindowSizeClass::Medium);
    assert!(list.offers(Affordance::Refresh));
    assert!(list.offers(Affordance::Bookmark));
    assert!(list.offers(Affordance::SignIn));
}

#[tokio::test]
async fn session_and_speaker_details_stack_and_close() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    sessions(&host).on_session_clicked("df-compose");
    h.settle().await;
    assert_eq!(
        conference_configs(&host),
        vec![
            ConferenceConfig::Home,
            ConferenceConfig::SessionDetails {
                session_id: "df-compose".to_string()
            }
        ]
    );

    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.key, "session:df-compose");
    let speakers: Vec<String> = view.body.selectable().iter().map(|i| i.id.clone()).collect();
    assert_eq!(speakers, vec!["tomas", "ines"]);

    dispatch(host.root(), &view, UiAction::Select, 1).unwrap();
    h.settle().await;
    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.key, "speaker:ines");
    let talks: Vec<String> = view.body.selectable().iter().map(|i| i.id.clone()).collect();
    assert_eq!(talks, vec!["df-keynote", "df-compose"]);

    dispatch(host.root(), &view, UiAction::Back, 0).unwrap();
    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.key, "session:df-compose");
    dispatch(host.root(), &view, UiAction::Back, 0).unwrap();
    assert_eq!(conference_configs(&host), vec![ConferenceConfig::Home]);
}

#[tokio::test]
async fn unknown_session_is_an_inline_error() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    sessions(&host).on_session_clicked("missing");
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(
        view.body,
        Body::Error {
            reason: "session 'missing' not found".to_string()
        }
    );
    assert!(view.offers(Affordance::Retry));
    assert!(view.offers(Affordance::Back));
}

#[tokio::test]
async fn tabs_reuse_screens_and_speakers_title_names_the_conference() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;
    let schedule = sessions(&host);

    let view = build(host.root(), WindowSizeClass::Compact);
    dispatch(host.root(), &view, UiAction::NextTab, 0).unwrap();
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.title, "Speakers (DevFest 2023)");
    let names: Vec<String> = view.body.selectable().iter().map(|i| i.label.clone()).collect();
    assert_eq!(names, vec!["Ines Duarte", "Mei Tanaka", "Tomas Novak"]);

    let home = match active_screen(host.root()) {
        ActiveScreen::Home { home, .. } => home,
        _ => panic!("home is not active"),
    };
    home.on_tab_clicked(HomeTab::Schedule).unwrap();
    assert_eq!(
        home.stack().value().configurations(),
        vec![HomeConfig::Speakers, HomeConfig::Sessions]
    );
    // Brought back, not rebuilt: the original screen is still alive.
    assert!(schedule.refresh().is_ok());
}

#[tokio::test]
async fn multi_pane_schedule_shows_a_notice() {
    let mut h = Harness::new();
    let options = AppOptions {
        multi_pane: true,
        ..AppOptions::default()
    };
    let host = h.host_with(options, Some("devfest23"));
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Expanded);
    assert_eq!(view.body, Body::Notice(MULTI_PANE_NOTICE.to_string()));

    // Every destination stays reachable and the schedule slot reads as selected.
    let tabs = view.tabs.expect("home shows tabs");
    let listed: Vec<HomeTab> = tabs.items.iter().map(|item| item.tab).collect();
    assert_eq!(listed, HomeTab::ALL.to_vec());
    let selected: Vec<HomeTab> = tabs
        .items
        .iter()
        .filter(|item| item.selected)
        .map(|item| item.tab)
        .collect();
    assert_eq!(selected, vec![HomeTab::Schedule]);
}

#[tokio::test]
async fn venue_tab_shows_the_venue() {
    let mut h = Harness::new();
    let host = h.host(Some("kotlinconf24"));
    h.settle().await;

    let home = match active_screen(host.root()) {
        ActiveScreen::Home { home, .. } => home,
        _ => panic!("home is not active"),
    };
    home.on_tab_clicked(HomeTab::Venue).unwrap();
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Compact);
    match view.body {
        Body::Detail { heading, .. } => assert_eq!(heading, "Bella Center"),
        other => panic!("expected venue detail, got {other:?}"),
    }
}

#[tokio::test]
async fn switching_conference_clears_the_selection() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Compact);
    dispatch(host.root(), &view, UiAction::SwitchConference, 0).unwrap();
    h.settle().await;

    assert_eq!(active_app(&host), AppConfig::Conferences);
    assert_eq!(h.selection.load().unwrap(), None);
}

#[tokio::test]
async fn settings_and_theme_color() {
    let mut h = Harness::new();
    let host = h.host(Some("kotlinconf24"));
    h.settle().await;

    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.accent, Some(0x7f52ff));
    dispatch(host.root(), &view, UiAction::Settings, 0).unwrap();
    assert_eq!(
        conference_configs(&host),
        vec![ConferenceConfig::Home, ConferenceConfig::Settings]
    );

    let view = build(host.root(), WindowSizeClass::Compact);
    assert_eq!(view.key, "settings");
    dispatch(host.root(), &view, UiAction::Back, 0).unwrap();
    assert_eq!(conference_configs(&host), vec![ConferenceConfig::Home]);
}

#[tokio::test]
async fn sign_in_and_out_rebuild_the_session() {
    let mut h = Harness::new();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let signed_in = Arc::clone(&calls);
    let signed_out = Arc::clone(&calls);
    let options = AppOptions {
        multi_pane: false,
        on_sign_in: callback(move || signed_in.lock().push("in")),
        on_sign_out: callback(move || signed_out.lock().push("out")),
    };
    let host = h.host_with(options, Some("devfest23"));
    h.settle().await;

    let guest_schedule = sessions(&host);
    let view = build(host.root(), WindowSizeClass::Compact);
    assert!(!view.offers(Affordance::SignOut));

    // Bookmarking as a guest asks for sign-in instead.
    dispatch(host.root(), &view, UiAction::ToggleBookmark, 0).unwrap();
    h.settle().await;

    assert_eq!(*calls.lock(), vec!["in"]);
    assert!(host.root().is_signed_in());
    assert!(guest_schedule.refresh().is_err());
    assert_eq!(active_app(&host), conference("devfest23"));

    let member_schedule = sessions(&host);
    member_schedule.add_bookmark("df-keynote").unwrap();
    h.settle().await;
    let state = member_schedule.state().value();
    assert!(state.content().is_some_and(|c| c.is_bookmarked("df-keynote")));

    let view = build(host.root(), WindowSizeClass::Compact);
    assert!(view.offers(Affordance::SignOut));
    assert!(!view.offers(Affordance::SignIn));
    dispatch(host.root(), &view, UiAction::SignOut, 0).unwrap();
    h.settle().await;

    assert_eq!(*calls.lock(), vec!["in", "out"]);
    assert!(!host.root().is_signed_in());
    assert!(member_schedule.refresh().is_err());
    let state = sessions(&host).state().value();
    assert!(matches!(state, LoadState::Success(ref c) if c.bookmarks.is_empty()));
}

#[tokio::test]
async fn root_and_home_commands() {
    let mut h = Harness::new();
    let host = h.host(Some("devfest23"));
    h.settle().await;

    let home = match active_screen(host.root()) {
        ActiveScreen::Home { home, .. } => home,
        _ => panic!("home is not active"),
    };
    assert!(!home.is_multi_pane());
    home.on_speakers_tab_clicked().unwrap();
    assert_eq!(home.active_tab(), HomeTab::Speakers);
    home.on_sessions_tab_clicked().unwrap();
    assert_eq!(home.active_tab(), HomeTab::Schedule);

    host.root().show_conferences().unwrap();
    assert_eq!(active_app(&host), AppConfig::Conferences);
    assert_eq!(h.selection.load().unwrap(), None);

    host.root().select_conference("kotlinconf24").unwrap();
    assert_eq!(active_app(&host), conference("kotlinconf24"));
    assert_eq!(h.selection.load().unwrap().as_deref(), Some("kotlinconf24"));
}
