use std::sync::Arc;

use crate::component::{
    Callback, ChildStack, ComponentContext, IdCallback, Navigator, StackNavigation, StateFlow,
};
use crate::data::{AuthState, ConferenceRepository};
use crate::error::NavError;
use crate::screens::{SessionsCallbacks, SessionsComponent, SpeakersComponent, VenueComponent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeConfig {
    Sessions,
    MultiPane,
    Speakers,
    Bookmarks,
    Venue,
    Search,
    Recommendations,
}

#[derive(Clone)]
pub enum HomeChild {
    Sessions(SessionsComponent),
    /// Wide-screen schedule. Not implemented yet; renders a notice.
    MultiPane,
    Speakers(SpeakersComponent),
    Bookmarks,
    Venue(VenueComponent),
    Search,
    Recommendations,
}

/// Tabs offered by the home screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeTab {
    Schedule,
    Speakers,
    Bookmarks,
    Venue,
    Search,
    Recommendations,
}

impl HomeTab {
    pub const ALL: [HomeTab; 6] = [
        HomeTab::Schedule,
        HomeTab::Speakers,
        HomeTab::Bookmarks,
        HomeTab::Venue,
        HomeTab::Search,
        HomeTab::Recommendations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            HomeTab::Schedule => "Schedule",
            HomeTab::Speakers => "Speakers",
            HomeTab::Bookmarks => "Bookmarks",
            HomeTab::Venue => "Venue",
            HomeTab::Search => "Search",
            HomeTab::Recommendations => "Recommendations",
        }
    }

    fn of(config: &HomeConfig) -> HomeTab {
        match config {
            HomeConfig::Sessions | HomeConfig::MultiPane => HomeTab::Schedule,
            HomeConfig::Speakers => HomeTab::Speakers,
            HomeConfig::Bookmarks => HomeTab::Bookmarks,
            HomeConfig::Venue => HomeTab::Venue,
            HomeConfig::Search => HomeTab::Search,
            HomeConfig::Recommendations => HomeTab::Recommendations,
        }
    }
}

/// What the home level reports upwards.
#[derive(Clone)]
pub struct HomeCallbacks {
    pub on_session_selected: IdCallback,
    pub on_speaker_selected: IdCallback,
    pub on_sign_in: Callback,
    pub on_switch_conference: Callback,
}

#[derive(Clone)]
pub struct HomeComponent {
    inner: Arc<HomeInner>,
}

struct HomeInner {
    stack: StackNavigation<HomeConfig, HomeChild>,
    multi_pane: bool,
    on_switch_conference: Callback,
}

impl HomeComponent {
    pub fn new(
        ctx: &ComponentContext,
        conference_id: &str,
        repository: Arc<dyn ConferenceRepository>,
        auth: AuthState,
        multi_pane: bool,
        callbacks: HomeCallbacks,
    ) -> Self {
        let initial = schedule_config(multi_pane);
        let conference_id = conference_id.to_string();
        let on_switch_conference = Arc::clone(&callbacks.on_switch_conference);

        let stack = StackNavigation::new(
            ctx,
            "home",
            initial,
            move |config, child_ctx, _nav: Navigator<HomeConfig>| match config {
                HomeConfig::Sessions => HomeChild::Sessions(SessionsComponent::new(
                    child_ctx,
                    conference_id.clone(),
                    Arc::clone(&repository),
                    auth.clone(),
                    SessionsCallbacks {
                        on_session_selected: Arc::clone(&callbacks.on_session_selected),
                        on_sign_in: Arc::clone(&callbacks.on_sign_in),
                    },
                )),
                HomeConfig::MultiPane => HomeChild::MultiPane,
                HomeConfig::Speakers => HomeChild::Speakers(SpeakersComponent::new(
                    child_ctx,
                    conference_id.clone(),
                    Arc::clone(&repository),
                    Arc::clone(&callbacks.on_speaker_selected),
                )),
                HomeConfig::Bookmarks => HomeChild::Bookmarks,
                HomeConfig::Venue => HomeChild::Venue(VenueComponent::new(
                    child_ctx,
                    conference_id.clone(),
                    Arc::clone(&repository),
                )),
                HomeConfig::Search => HomeChild::Search,
                HomeConfig::Recommendations => HomeChild::Recommendations,
            },
        );

        Self {
            inner: Arc::new(HomeInner {
                stack,
                multi_pane,
                on_switch_conference,
            }),
        }
    }

    pub fn stack(&self) -> &StateFlow<ChildStack<HomeConfig, HomeChild>> {
        self.inner.stack.state()
    }

    pub fn is_multi_pane(&self) -> bool {
        self.inner.multi_pane
    }

    pub fn active_tab(&self) -> HomeTab {
        HomeTab::of(&self.inner.stack.value().active().configuration)
    }

    /// Switch tabs, keeping any tab already visited alive.
    pub fn on_tab_clicked(&self, tab: HomeTab) -> Result<(), NavError> {
        let config = match tab {
            HomeTab::Schedule => schedule_config(self.inner.multi_pane),
            HomeTab::Speakers => HomeConfig::Speakers,
            HomeTab::Bookmarks => HomeConfig::Bookmarks,
            HomeTab::Venue => HomeConfig::Venue,
            HomeTab::Search => HomeConfig::Search,
            HomeTab::Recommendations => HomeConfig::Recommendations,
        };
        self.inner.stack.bring_to_front(config)
    }

    pub fn on_sessions_tab_clicked(&self) -> Result<(), NavError> {
        self.on_tab_clicked(HomeTab::Schedule)
    }

    pub fn on_speakers_tab_clicked(&self) -> Result<(), NavError> {
        self.on_tab_clicked(HomeTab::Speakers)
    }

    pub fn on_switch_conference_clicked(&self) {
        (self.inner.on_switch_conference)();
    }
}

fn schedule_config(multi_pane: bool) -> HomeConfig {
    if multi_pane {
        HomeConfig::MultiPane
    } else {
        HomeConfig::Sessions
    }
}
