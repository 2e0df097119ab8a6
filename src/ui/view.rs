//! Pure view model of the component tree.
//!
//! [`build`] reads the active entry at every navigation level plus that
//! entry's current state and produces an [`AppView`]. It holds no state and
//! mutates nothing, so it can run on every frame. Which layout is used
//! depends only on the window class passed in.

use crate::data::{Conference, Session, Speaker, Venue};
use crate::navigation::{
    AppChild, AppComponent, ConferenceChild, ConferenceComponent, HomeChild, HomeComponent,
    HomeTab,
};
use crate::screens::{
    ConferencesComponent, LoadState, SessionDetails, SessionDetailsComponent, SessionsComponent,
    SessionsContent, SpeakerDetails, SpeakerDetailsComponent, SpeakersComponent,
    SpeakersContent, VenueComponent,
};
use crate::ui::layout::{HomeLayout, WindowSizeClass};

pub const MULTI_PANE_NOTICE: &str = "Multi-pane mode is not yet supported";

/// The leaf the user is looking at, with the components needed to act on it.
#[derive(Clone)]
pub enum ActiveScreen {
    Loading,
    Conferences(ConferencesComponent),
    Home {
        conference: ConferenceComponent,
        home: HomeComponent,
        child: HomeChild,
    },
    SessionDetails {
        conference: ConferenceComponent,
        component: SessionDetailsComponent,
    },
    SpeakerDetails {
        conference: ConferenceComponent,
        component: SpeakerDetailsComponent,
    },
    Settings {
        conference: ConferenceComponent,
    },
}

pub fn active_screen(root: &AppComponent) -> ActiveScreen {
    match root.stack().value().active().instance.clone() {
        AppChild::Loading => ActiveScreen::Loading,
        AppChild::Conferences(component) => ActiveScreen::Conferences(component),
        AppChild::Conference(conference) => {
            match conference.stack().value().active().instance.clone() {
                ConferenceChild::Home(home) => {
                    let child = home.stack().value().active().instance.clone();
                    ActiveScreen::Home {
                        conference,
                        home,
                        child,
                    }
                }
                ConferenceChild::SessionDetails(component) => ActiveScreen::SessionDetails {
                    conference,
                    component,
                },
                ConferenceChild::SpeakerDetails(component) => ActiveScreen::SpeakerDetails {
                    conference,
                    component,
                },
                ConferenceChild::Settings => ActiveScreen::Settings { conference },
            }
        }
    }
}

/// Interactions the current screen offers. Key presses for anything not
/// listed here are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Select,
    Back,
    Tabs,
    Refresh,
    Retry,
    Bookmark,
    SignIn,
    SignOut,
    SwitchConference,
    Settings,
    DeepLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    List,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPlacement {
    Rail,
    BottomBar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub tab: HomeTab,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    pub placement: TabPlacement,
    pub items: Vec<TabItem>,
}

/// One selectable row or grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub label: String,
    pub detail: String,
    /// Bookmarked.
    pub marked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Error {
        reason: String,
    },
    Notice(String),
    /// Declared screen without content.
    Empty,
    Items {
        presentation: Presentation,
        sections: Vec<Section>,
    },
    Detail {
        heading: String,
        subheading: String,
        paragraphs: Vec<String>,
        links_title: String,
        links: Vec<Item>,
    },
}

impl Body {
    /// Selectable items in display order.
    pub fn selectable(&self) -> Vec<&Item> {
        match self {
            Body::Items { sections, .. } => sections.iter().flat_map(|s| s.items.iter()).collect(),
            Body::Detail { links, .. } => links.iter().collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppView {
    /// Identifies the screen; the shell resets its cursor when it changes.
    pub key: String,
    pub title: String,
    pub accent: Option<u32>,
    pub layout: HomeLayout,
    pub tabs: Option<TabBar>,
    pub body: Body,
    pub affordances: Vec<Affordance>,
    pub signed_in: bool,
}

impl AppView {
    pub fn offers(&self, affordance: Affordance) -> bool {
        self.affordances.contains(&affordance)
    }

    pub fn selected(&self, cursor: usize) -> Option<&Item> {
        self.body.selectable().get(cursor).copied()
    }
}

pub fn build(root: &AppComponent, class: WindowSizeClass) -> AppView {
    let layout = HomeLayout::for_class(class);
    let signed_in = root.is_signed_in();
    let mut view = match active_screen(root) {
        ActiveScreen::Loading => AppView {
            key: "loading".to_string(),
            title: "Confetti".to_string(),
            accent: None,
            layout,
            tabs: None,
            body: Body::Loading,
            affordances: Vec::new(),
            signed_in,
        },
        ActiveScreen::Conferences(component) => conferences_view(&component, layout, signed_in),
        ActiveScreen::Home {
            conference,
            home,
            child,
        } => home_view(&conference, &home, &child, layout, signed_in),
        ActiveScreen::SessionDetails {
            conference,
            component,
        } => session_details_view(&conference, &component, layout, signed_in),
        ActiveScreen::SpeakerDetails {
            conference,
            component,
        } => speaker_details_view(&conference, &component, layout, signed_in),
        ActiveScreen::Settings { conference } => AppView {
            key: "settings".to_string(),
            title: "Settings".to_string(),
            accent: conference.theme_color().value(),
            layout,
            tabs: None,
            body: Body::Empty,
            affordances: vec![Affordance::Back],
            signed_in,
        },
    };

    if signed_in && view.key != "loading" {
        view.affordances.push(Affordance::SignOut);
    }
    view.affordances.push(Affordance::DeepLink);
    view
}

/// Body plus affordances for a load state; `content` renders the success case.
fn load_body<T>(
    state: &LoadState<T>,
    affordances: &mut Vec<Affordance>,
    content: impl FnOnce(&T, &mut Vec<Affordance>) -> Body,
) -> Body {
    match state {
        LoadState::Loading => Body::Loading,
        LoadState::Error(reason) => {
            affordances.push(Affordance::Retry);
            Body::Error {
                reason: reason.clone(),
            }
        }
        LoadState::Success(value) => content(value, affordances),
    }
}

fn presentation_for(layout: HomeLayout) -> Presentation {
    match layout {
        HomeLayout::RailGrid => Presentation::Grid,
        HomeLayout::BottomBarList => Presentation::List,
    }
}

fn conferences_view(component: &ConferencesComponent, layout: HomeLayout, signed_in: bool) -> AppView {
    let mut affordances = Vec::new();
    let body = load_body(&component.state().value(), &mut affordances, |list, aff| {
        aff.extend([Affordance::Select, Affordance::Refresh]);
        Body::Items {
            presentation: Presentation::List,
            sections: vec![Section {
                heading: None,
                items: list.iter().map(conference_item).collect(),
            }],
        }
    });
    AppView {
        key: "conferences".to_string(),
        title: "Choose a conference".to_string(),
        accent: None,
        layout,
        tabs: None,
        body,
        affordances,
        signed_in,
    }
}

fn conference_item(conference: &Conference) -> Item {
    Item {
        id: conference.id.clone(),
        label: conference.name.clone(),
        detail: conference.dates.join(", "),
        marked: false,
    }
}

fn tab_bar(home: &HomeComponent, layout: HomeLayout) -> TabBar {
    let active = home.active_tab();
    TabBar {
        placement: match layout {
            HomeLayout::RailGrid => TabPlacement::Rail,
            HomeLayout::BottomBarList => TabPlacement::BottomBar,
        },
        items: HomeTab::ALL
            .iter()
            .map(|&tab| TabItem {
                tab,
                label: tab.title(),
                selected: tab == active,
            })
            .collect(),
    }
}

fn home_view(
    conference: &ConferenceComponent,
    home: &HomeComponent,
    child: &HomeChild,
    layout: HomeLayout,
    signed_in: bool,
) -> AppView {
    let mut affordances = vec![
        Affordance::Tabs,
        Affordance::SwitchConference,
        Affordance::Settings,
    ];
    let tab = home.active_tab();
    let (title, body) = match child {
        HomeChild::Sessions(sessions) => sessions_body(sessions, layout, &mut affordances),
        HomeChild::MultiPane => (
            tab.title().to_string(),
            Body::Notice(MULTI_PANE_NOTICE.to_string()),
        ),
        HomeChild::Speakers(speakers) => speakers_body(speakers, layout, &mut affordances),
        HomeChild::Venue(venue) => venue_body(venue, &mut affordances),
        HomeChild::Bookmarks | HomeChild::Search | HomeChild::Recommendations => {
            (tab.title().to_string(), Body::Empty)
        }
    };

    AppView {
        key: format!("home:{}:{}", conference.conference_id(), tab.title()),
        title,
        accent: conference.theme_color().value(),
        layout,
        tabs: Some(tab_bar(home, layout)),
        body,
        affordances,
        signed_in,
    }
}

/// The wide grid only supports opening a session; refresh, bookmarks and
/// sign-in are offered by the list alone.
fn sessions_body(
    component: &SessionsComponent,
    layout: HomeLayout,
    affordances: &mut Vec<Affordance>,
) -> (String, Body) {
    let state = component.state().value();
    let presentation = presentation_for(layout);
    let signed_in = component.is_logged_in();
    let title = state
        .content()
        .map(|c| c.conference_name.clone())
        .unwrap_or_default();
    let body = load_body(&state, affordances, |content, aff| {
        aff.push(Affordance::Select);
        if presentation == Presentation::List {
            aff.extend([Affordance::Refresh, Affordance::Bookmark]);
            if !signed_in {
                aff.push(Affordance::SignIn);
            }
        }
        Body::Items {
            presentation,
            sections: session_sections(content),
        }
    });
    (title, body)
}

fn session_sections(content: &SessionsContent) -> Vec<Section> {
    content
        .days
        .iter()
        .map(|day| Section {
            heading: Some(day.date.clone()),
            items: day
                .sessions
                .iter()
                .map(|s| session_item(s, content.is_bookmarked(&s.id)))
                .collect(),
        })
        .collect()
}

fn session_item(session: &Session, marked: bool) -> Item {
    Item {
        id: session.id.clone(),
        label: format!("{}  {}", session.start_time(), session.title),
        detail: session.room.clone().unwrap_or_default(),
        marked,
    }
}

fn speakers_body(
    component: &SpeakersComponent,
    layout: HomeLayout,
    affordances: &mut Vec<Affordance>,
) -> (String, Body) {
    let state = component.state().value();
    let conference = state
        .content()
        .map(|c| c.conference_name.as_str())
        .unwrap_or_default();
    let title = format!("Speakers ({conference})");
    let presentation = presentation_for(layout);
    let body = load_body(&state, affordances, |content: &SpeakersContent, aff| {
        aff.extend([Affordance::Select, Affordance::Refresh]);
        Body::Items {
            presentation,
            sections: vec![Section {
                heading: None,
                items: content.speakers.iter().map(speaker_item).collect(),
            }],
        }
    });
    (title, body)
}

fn speaker_item(speaker: &Speaker) -> Item {
    Item {
        id: speaker.id.clone(),
        label: speaker.name.clone(),
        detail: speaker.company.clone().unwrap_or_default(),
        marked: false,
    }
}

fn venue_body(component: &VenueComponent, affordances: &mut Vec<Affordance>) -> (String, Body) {
    let body = load_body(&component.state().value(), affordances, |venue: &Venue, aff| {
        aff.push(Affordance::Refresh);
        let mut paragraphs = Vec::new();
        if !venue.description.is_empty() {
            paragraphs.push(venue.description.clone());
        }
        if let (Some(lat), Some(lon)) = (venue.latitude, venue.longitude) {
            paragraphs.push(format!("{lat:.4}, {lon:.4}"));
        }
        Body::Detail {
            heading: venue.name.clone(),
            subheading: venue.address.clone(),
            paragraphs,
            links_title: String::new(),
            links: Vec::new(),
        }
    });
    ("Venue".to_string(), body)
}

fn session_details_view(
    conference: &ConferenceComponent,
    component: &SessionDetailsComponent,
    layout: HomeLayout,
    signed_in: bool,
) -> AppView {
    let mut affordances = vec![Affordance::Back];
    let state = component.state().value();
    let title = state
        .content()
        .map(|d| d.conference_name.clone())
        .unwrap_or_default();
    let body = load_body(&state, &mut affordances, |details: &SessionDetails, aff| {
        if !details.speakers.is_empty() {
            aff.push(Affordance::Select);
        }
        let session = &details.session;
        let mut subheading = format!("{} {}", session.day(), session.start_time());
        if let Some((_, end)) = session.end.split_once('T') {
            subheading.push_str(&format!("-{end}"));
        }
        if let Some(room) = &session.room {
            subheading.push_str(&format!(" · {room}"));
        }
        Body::Detail {
            heading: session.title.clone(),
            subheading,
            paragraphs: vec![session.description.clone()],
            links_title: "Speakers".to_string(),
            links: details.speakers.iter().map(speaker_item).collect(),
        }
    });
    AppView {
        key: format!("session:{}", component.session_id()),
        title,
        accent: conference.theme_color().value(),
        layout,
        tabs: None,
        body,
        affordances,
        signed_in,
    }
}

fn speaker_details_view(
    conference: &ConferenceComponent,
    component: &SpeakerDetailsComponent,
    layout: HomeLayout,
    signed_in: bool,
) -> AppView {
    let mut affordances = vec![Affordance::Back];
    let state = component.state().value();
    let title = state
        .content()
        .map(|d| d.conference_name.clone())
        .unwrap_or_default();
    let body = load_body(&state, &mut affordances, |details: &SpeakerDetails, aff| {
        if !details.sessions.is_empty() {
            aff.push(Affordance::Select);
        }
        let speaker = &details.speaker;
        let subheading = [speaker.company.as_deref(), speaker.tagline.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ");
        Body::Detail {
            heading: speaker.name.clone(),
            subheading,
            paragraphs: vec![speaker.bio.clone()],
            links_title: "Sessions".to_string(),
            links: details
                .sessions
                .iter()
                .map(|s| session_item(s, false))
                .collect(),
        }
    });
    AppView {
        key: format!("speaker:{}", component.speaker_id()),
        title,
        accent: conference.theme_color().value(),
        layout,
        tabs: None,
        body,
        affordances,
        signed_in,
    }
}
