//! Hierarchical lifecycle with cascading teardown.
//!
//! Every component owns a node in this tree. Destroying a node destroys its
//! descendants first, then runs the node's own cleanups in reverse order of
//! registration. Background work launched through a lifecycle is aborted on
//! destruction, and any result that still reaches the main thread is dropped.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::component::scheduler::MainHandle;
use crate::error::NavError;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

#[derive(Clone)]
pub struct Lifecycle {
    node: Arc<Node>,
}

struct Node {
    name: String,
    destroyed: AtomicBool,
    inner: Mutex<NodeInner>,
}

#[derive(Default)]
struct NodeInner {
    next_cleanup: u64,
    cleanups: Vec<(u64, Cleanup)>,
    children: Vec<Lifecycle>,
}

impl Lifecycle {
    /// Create a root lifecycle (one per application session).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: Arc::new(Node {
                name: name.into(),
                destroyed: AtomicBool::new(false),
                inner: Mutex::new(NodeInner::default()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Create a child node. A destroyed parent yields an already destroyed child.
    pub fn child(&self, name: impl Into<String>) -> Lifecycle {
        let child = Lifecycle::new(format!("{}/{}", self.node.name, name.into()));
        {
            let mut inner = self.node.inner.lock();
            if !self.is_destroyed() {
                inner.children.retain(|c| !c.is_destroyed());
                inner.children.push(child.clone());
                return child;
            }
        }
        child.destroy();
        child
    }

    /// Register a cleanup. Runs immediately when the node is already destroyed.
    pub fn do_on_destroy(&self, cleanup: impl FnOnce() + Send + 'static) {
        let id = self.next_cleanup_id();
        self.insert_cleanup(id, Box::new(cleanup));
    }

    fn next_cleanup_id(&self) -> u64 {
        let mut inner = self.node.inner.lock();
        let id = inner.next_cleanup;
        inner.next_cleanup += 1;
        id
    }

    fn insert_cleanup(&self, id: u64, cleanup: Cleanup) {
        {
            let mut inner = self.node.inner.lock();
            if !self.is_destroyed() {
                inner.cleanups.push((id, cleanup));
                return;
            }
        }
        cleanup();
    }

    fn remove_cleanup(&self, id: u64) {
        self.node.inner.lock().cleanups.retain(|(cid, _)| *cid != id);
    }

    #[cfg(test)]
    fn cleanup_count(&self) -> usize {
        self.node.inner.lock().cleanups.len()
    }

    pub fn is_destroyed(&self) -> bool {
        self.node.destroyed.load(Ordering::SeqCst)
    }

    pub fn ensure_alive(&self) -> Result<(), NavError> {
        if self.is_destroyed() {
            tracing::error!(lifecycle = %self.node.name, "use after destroy");
            return Err(NavError::violation(self.node.name.clone()));
        }
        Ok(())
    }

    /// Destroy this node and everything below it. Idempotent.
    pub fn destroy(&self) {
        if self.node.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }

        let (children, cleanups) = {
            let mut inner = self.node.inner.lock();
            (
                std::mem::take(&mut inner.children),
                std::mem::take(&mut inner.cleanups),
            )
        };

        for child in children.into_iter().rev() {
            child.destroy();
        }
        for (_, cleanup) in cleanups.into_iter().rev() {
            cleanup();
        }
        tracing::trace!(lifecycle = %self.node.name, "destroyed");
    }

    /// Run `work` in the background and hand its output to `on_main` on the
    /// main thread, unless this lifecycle is destroyed first.
    ///
    /// Must be called on the main thread. The abort hook registered here is
    /// released once the result reaches the main thread.
    pub fn launch<T, F, M>(&self, main: &MainHandle, work: F, on_main: M) -> Result<(), NavError>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) + Send + 'static,
    {
        self.ensure_alive()?;

        let owner = self.clone();
        let main = main.clone();
        let cleanup_id = self.next_cleanup_id();
        let task = tokio::spawn(async move {
            let output = work.await;
            let delivered = main.post(move || {
                owner.remove_cleanup(cleanup_id);
                if owner.is_destroyed() {
                    tracing::trace!(lifecycle = %owner.name(), "dropping late result");
                    return;
                }
                on_main(output);
            });
            if !delivered {
                tracing::debug!("main scheduler gone, result discarded");
            }
        });

        let abort = task.abort_handle();
        self.insert_cleanup(cleanup_id, Box::new(move || abort.abort()));
        Ok(())
    }
}
