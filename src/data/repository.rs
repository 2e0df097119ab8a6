//! Conference data collaborator.

use std::collections::{BTreeSet, HashMap};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::data::model::{Conference, ConferenceCatalog, ConferenceData};
use crate::data::sample::sample_catalog;
use crate::error::LoadError;

pub type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<T, LoadError>> + Send + 'static>>;

/// Source of conference data. Calls run off the main thread; implementations
/// must be cheap to clone behind an `Arc`.
pub trait ConferenceRepository: Send + Sync {
    fn conferences(&self) -> LoadFuture<Vec<Conference>>;

    fn conference_data(&self, conference_id: &str) -> LoadFuture<ConferenceData>;

    fn bookmarks(&self, conference_id: &str) -> LoadFuture<BTreeSet<String>>;

    fn set_bookmark(
        &self,
        conference_id: &str,
        session_id: &str,
        bookmarked: bool,
    ) -> LoadFuture<()>;
}

/// Repository backed by an in-process catalog, with optional simulated
/// latency and an offline switch for exercising error paths.
#[derive(Clone)]
pub struct InMemoryRepository {
    inner: Arc<Inner>,
}

struct Inner {
    catalog: ConferenceCatalog,
    bookmarks: Mutex<HashMap<String, BTreeSet<String>>>,
    latency: Duration,
    offline: AtomicBool,
}

impl InMemoryRepository {
    pub fn new(catalog: ConferenceCatalog) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog,
                bookmarks: Mutex::new(HashMap::new()),
                latency: Duration::ZERO,
                offline: AtomicBool::new(false),
            }),
        }
    }

    /// Built-in catalog with `devfest23` and `kotlinconf24`.
    pub fn sample() -> Self {
        Self::new(sample_catalog())
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadError::Decode(format!("{}: {e}", path.display())))?;
        let catalog: ConferenceCatalog = serde_json::from_str(&content)
            .map_err(|e| LoadError::Decode(format!("{}: {e}", path.display())))?;
        Ok(Self::new(catalog))
    }

    pub fn with_latency(self, latency: Duration) -> Self {
        let inner = Inner {
            catalog: self.inner.catalog.clone(),
            bookmarks: Mutex::new(self.inner.bookmarks.lock().clone()),
            latency,
            offline: AtomicBool::new(self.inner.offline.load(Ordering::SeqCst)),
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// While offline every call fails with "network unavailable".
    pub fn set_offline(&self, offline: bool) {
        self.inner.offline.store(offline, Ordering::SeqCst);
    }

    fn respond<T, F>(&self, produce: F) -> LoadFuture<T>
    where
        T: Send + 'static,
        F: FnOnce(&Inner) -> Result<T, LoadError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            if !inner.latency.is_zero() {
                tokio::time::sleep(inner.latency).await;
            }
            if inner.offline.load(Ordering::SeqCst) {
                return Err(LoadError::network_unavailable());
            }
            produce(inner.as_ref())
        })
    }
}

impl Inner {
    fn find(&self, conference_id: &str) -> Result<&ConferenceData, LoadError> {
        self.catalog
            .conferences
            .iter()
            .find(|c| c.conference.id == conference_id)
            .ok_or_else(|| LoadError::not_found("conference", conference_id))
    }
}

impl ConferenceRepository for InMemoryRepository {
    fn conferences(&self) -> LoadFuture<Vec<Conference>> {
        self.respond(|inner| {
            Ok(inner
                .catalog
                .conferences
                .iter()
                .map(|c| c.conference.clone())
                .collect())
        })
    }

    fn conference_data(&self, conference_id: &str) -> LoadFuture<ConferenceData> {
        let id = conference_id.to_string();
        self.respond(move |inner| inner.find(&id).cloned())
    }

    fn bookmarks(&self, conference_id: &str) -> LoadFuture<BTreeSet<String>> {
        let id = conference_id.to_string();
        self.respond(move |inner| {
            inner.find(&id)?;
            Ok(inner.bookmarks.lock().get(&id).cloned().unwrap_or_default())
        })
    }

    fn set_bookmark(
        &self,
        conference_id: &str,
        session_id: &str,
        bookmarked: bool,
    ) -> LoadFuture<()> {
        let id = conference_id.to_string();
        let session = session_id.to_string();
        self.respond(move |inner| {
            let data = inner.find(&id)?;
            if data.session(&session).is_none() {
                return Err(LoadError::not_found("session", session));
            }
            let mut all = inner.bookmarks.lock();
            let set = all.entry(id).or_default();
            if bookmarked {
                set.insert(session);
            } else {
                set.remove(&session);
            }
            Ok(())
        })
    }
}
