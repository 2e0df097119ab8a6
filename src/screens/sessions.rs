use std::collections::BTreeSet;
use std::sync::Arc;

use crate::component::{Callback, ComponentContext, IdCallback, StateFlow};
use crate::data::{AuthState, ConferenceData, ConferenceRepository, Session};
use crate::dispatch_mvi;
use crate::error::{LoadError, NavError};
use crate::screens::load::{LoadState, ScreenModel};
use crate::ui::mvi::{Intent, Reducer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDay {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionsContent {
    pub conference_name: String,
    pub days: Vec<SessionDay>,
    pub bookmarks: BTreeSet<String>,
}

impl SessionsContent {
    pub fn new(data: ConferenceData, bookmarks: BTreeSet<String>) -> Self {
        let mut sessions = data.sessions;
        sessions.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.title.cmp(&b.title)));

        let mut days: Vec<SessionDay> = Vec::new();
        for session in sessions {
            let same_day = days.last().is_some_and(|d| d.date == session.day());
            match days.last_mut() {
                Some(day) if same_day => day.sessions.push(session),
                _ => days.push(SessionDay {
                    date: session.day().to_string(),
                    sessions: vec![session],
                }),
            }
        }

        Self {
            conference_name: data.conference.name,
            days,
            bookmarks,
        }
    }

    pub fn is_bookmarked(&self, session_id: &str) -> bool {
        self.bookmarks.contains(session_id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }
}

#[derive(Debug, Clone)]
pub enum BookmarkIntent {
    Set { session_id: String, bookmarked: bool },
}

impl Intent for BookmarkIntent {}

/// Applies bookmark changes to loaded content; other states are left alone.
pub struct BookmarkReducer;

impl Reducer for BookmarkReducer {
    type State = LoadState<SessionsContent>;
    type Intent = BookmarkIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (
                LoadState::Success(mut content),
                BookmarkIntent::Set {
                    session_id,
                    bookmarked,
                },
            ) => {
                if bookmarked {
                    content.bookmarks.insert(session_id);
                } else {
                    content.bookmarks.remove(&session_id);
                }
                LoadState::Success(content)
            }
            (other, _) => other,
        }
    }
}

/// Callbacks the schedule screen raises towards its parents.
#[derive(Clone)]
pub struct SessionsCallbacks {
    pub on_session_selected: IdCallback,
    pub on_sign_in: Callback,
}

/// Schedule of one conference, grouped by day.
#[derive(Clone)]
pub struct SessionsComponent {
    model: ScreenModel<SessionsContent>,
    conference_id: String,
    repository: Arc<dyn ConferenceRepository>,
    auth: AuthState,
    callbacks: SessionsCallbacks,
}

impl SessionsComponent {
    pub fn new(
        ctx: ComponentContext,
        conference_id: impl Into<String>,
        repository: Arc<dyn ConferenceRepository>,
        auth: AuthState,
        callbacks: SessionsCallbacks,
    ) -> Self {
        let component = Self {
            model: ScreenModel::new(ctx),
            conference_id: conference_id.into(),
            repository,
            auth,
            callbacks,
        };
        if let Err(err) = component.refresh() {
            tracing::error!(error = %err, "sessions created on a dead lifecycle");
        }
        component
    }

    pub fn state(&self) -> &StateFlow<LoadState<SessionsContent>> {
        self.model.state()
    }

    pub fn conference_id(&self) -> &str {
        &self.conference_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_signed_in()
    }

    pub fn refresh(&self) -> Result<(), NavError> {
        let data = self.repository.conference_data(&self.conference_id);
        let bookmarks = self
            .is_logged_in()
            .then(|| self.repository.bookmarks(&self.conference_id));
        self.model.load(async move {
            let data = data.await?;
            let bookmarks = match bookmarks {
                Some(pending) => pending.await?,
                None => BTreeSet::new(),
            };
            Ok(SessionsContent::new(data, bookmarks))
        })
    }

    pub fn on_session_clicked(&self, session_id: &str) {
        (self.callbacks.on_session_selected)(session_id);
    }

    pub fn on_sign_in_clicked(&self) {
        (self.callbacks.on_sign_in)();
    }

    pub fn add_bookmark(&self, session_id: &str) -> Result<(), NavError> {
        self.set_bookmark(session_id, true)
    }

    pub fn remove_bookmark(&self, session_id: &str) -> Result<(), NavError> {
        self.set_bookmark(session_id, false)
    }

    /// Optimistic: the state changes at once and is reverted if the
    /// repository rejects the change. Signed-out users are sent to sign in.
    fn set_bookmark(&self, session_id: &str, bookmarked: bool) -> Result<(), NavError> {
        let lifecycle = self.model.context().lifecycle();
        lifecycle.ensure_alive()?;

        if !self.is_logged_in() {
            tracing::debug!(session = session_id, "bookmark needs sign-in");
            self.on_sign_in_clicked();
            return Ok(());
        }

        let state = self.state().clone();
        dispatch_mvi!(
            state,
            BookmarkReducer,
            BookmarkIntent::Set {
                session_id: session_id.to_string(),
                bookmarked,
            }
        );

        let request = self
            .repository
            .set_bookmark(&self.conference_id, session_id, bookmarked);
        let session_id = session_id.to_string();
        lifecycle.launch(
            self.model.context().main(),
            request,
            move |result: Result<(), LoadError>| {
                if let Err(err) = result {
                    tracing::warn!(session = %session_id, error = %err, "bookmark change rejected");
                    dispatch_mvi!(
                        state,
                        BookmarkReducer,
                        BookmarkIntent::Set {
                            session_id,
                            bookmarked: !bookmarked,
                        }
                    );
                }
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_catalog;

    fn devfest() -> ConferenceData {
        sample_catalog()
            .conferences
            .into_iter()
            .find(|c| c.conference.id == "devfest23")
            .unwrap()
    }

    #[test]
    fn content_groups_sessions_by_day_in_start_order() {
        let mut data = devfest();
        data.sessions.reverse();
        let content = SessionsContent::new(data, BTreeSet::new());

        assert_eq!(content.conference_name, "DevFest 2023");
        assert_eq!(content.days.len(), 1);
        let starts: Vec<&str> = content.sessions().map(|s| s.start_time()).collect();
        assert_eq!(starts, vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn bookmark_reducer_ignores_non_content_states() {
        let state = BookmarkReducer::reduce(
            LoadState::Loading,
            BookmarkIntent::Set {
                session_id: "s".into(),
                bookmarked: true,
            },
        );
        assert_eq!(state, LoadState::Loading);
    }

    #[test]
    fn bookmark_reducer_toggles_membership() {
        let content = SessionsContent::new(devfest(), BTreeSet::new());
        let on = BookmarkReducer::reduce(
            LoadState::Success(content),
            BookmarkIntent::Set {
                session_id: "df-keynote".into(),
                bookmarked: true,
            },
        );
        assert!(on.content().unwrap().is_bookmarked("df-keynote"));

        let off = BookmarkReducer::reduce(
            on,
            BookmarkIntent::Set {
                session_id: "df-keynote".into(),
                bookmarked: false,
            },
        );
        assert!(!off.content().unwrap().is_bookmarked("df-keynote"));
    }
}
