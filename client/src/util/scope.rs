//! Screen-lifetime task scoping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submit handlers and the avatar preview reader suspend on network and file
//! I/O. Each screen owns a `ScreenScope`; when the screen's reactive owner is
//! disposed the scope aborts every task it started, so nothing writes to
//! signals of a dismissed screen.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use futures::future::{AbortHandle, Abortable, Aborted};

#[derive(Debug, Default)]
struct ScopeInner {
    disposed: bool,
    next_id: u64,
    handles: HashMap<u64, AbortHandle>,
}

fn lock_inner(inner: &Mutex<ScopeInner>) -> MutexGuard<'_, ScopeInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Unregisters a task's abort handle when the task finishes or is dropped.
struct TaskSlot {
    scope: Weak<Mutex<ScopeInner>>,
    id: u64,
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        if let Some(inner) = self.scope.upgrade() {
            lock_inner(&inner).handles.remove(&self.id);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScreenScope {
    inner: Arc<Mutex<ScopeInner>>,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope that is disposed together with the current reactive owner.
    /// Call from a component body.
    pub fn for_owner() -> Self {
        let scope = Self::new();
        let on_dispose = scope.clone();
        leptos::prelude::on_cleanup(move || on_dispose.dispose());
        scope
    }

    fn lock(&self) -> MutexGuard<'_, ScopeInner> {
        lock_inner(&self.inner)
    }

    pub fn is_active(&self) -> bool {
        !self.lock().disposed
    }

    /// Abort all pending tasks and refuse new ones.
    pub fn dispose(&self) {
        let mut inner = self.lock();
        inner.disposed = true;
        for (_, handle) in inner.handles.drain() {
            handle.abort();
        }
    }

    /// Tasks started through this scope that have not finished yet.
    pub fn pending(&self) -> usize {
        self.lock().handles.len()
    }

    /// Tie `fut` to this scope. Returns `None` once the scope is disposed.
    pub fn wrap<F: Future>(&self, fut: F) -> Option<impl Future<Output = Result<F::Output, Aborted>> + use<F>> {
        let (handle, registration) = AbortHandle::new_pair();
        let id = {
            let mut inner = self.lock();
            if inner.disposed {
                return None;
            }
            inner.next_id += 1;
            let id = inner.next_id;
            inner.handles.insert(id, handle);
            id
        };
        let slot = TaskSlot { scope: Arc::downgrade(&self.inner), id };
        Some(async move {
            let _slot = slot;
            Abortable::new(fut, registration).await
        })
    }

    /// Run `fut` on the local executor until it finishes or the scope ends.
    #[cfg(feature = "hydrate")]
    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        match self.wrap(fut) {
            Some(task) => leptos::task::spawn_local(async move {
                if task.await.is_err() {
                    log::debug!("screen task aborted");
                }
            }),
            None => log::debug!("screen already disposed; task dropped"),
        }
    }
}
