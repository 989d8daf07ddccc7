use crate::client::ApiError;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Lifecycle of one piece of fetched view data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

struct Shared<T> {
    generation: u64,
    state: LoadState<T>,
}

fn lock<T>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Store a finished load unless a newer load or a cancel bumped the generation.
/// Returns whether the outcome was kept.
fn commit<T>(
    shared: &Mutex<Shared<T>>,
    name: &'static str,
    generation: u64,
    outcome: Result<T, ApiError>,
) -> bool {
    let mut guard = lock(shared);
    if guard.generation != generation {
        debug!(slot = name, generation, "discarding superseded load");
        return false;
    }
    guard.state = match outcome {
        Ok(data) => LoadState::Loaded(data),
        Err(err) => {
            warn!(slot = name, error = %err, "view load failed");
            LoadState::Failed(err)
        }
    };
    true
}

/// A single state slot owned by a view, filled by at most one in-flight load.
///
/// Starting a new load aborts the previous one, and each load carries a generation so a
/// response that races the abort can never overwrite newer state. Dropping the slot
/// aborts whatever is still running.
pub struct ViewSlot<T> {
    name: &'static str,
    shared: Arc<Mutex<Shared<T>>>,
    task: Option<JoinHandle<()>>,
}

impl<T> ViewSlot<T>
where
    T: Send + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            shared: Arc::new(Mutex::new(Shared {
                generation: 0,
                state: LoadState::Idle,
            })),
            task: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, load: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        self.abort_task();

        let generation = {
            let mut guard = lock(&self.shared);
            guard.generation += 1;
            guard.state = LoadState::Loading;
            guard.generation
        };

        let shared = Arc::clone(&self.shared);
        let name = self.name;
        self.task = Some(tokio::spawn(async move {
            let outcome = load.await;
            commit(&shared, name, generation, outcome);
        }));
    }

    /// Abort the in-flight load; a slot that was still loading returns to idle.
    pub fn cancel(&mut self) {
        self.abort_task();
        let mut guard = lock(&self.shared);
        guard.generation += 1;
        if matches!(guard.state, LoadState::Loading) {
            guard.state = LoadState::Idle;
        }
    }

    /// Wait for the current load, if any, to finish writing its state.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    warn!(slot = self.name, "view load panicked");
                }
            }
        }
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&LoadState<T>) -> R) -> R {
        f(&lock(&self.shared).state)
    }

    pub fn snapshot(&self) -> LoadState<T>
    where
        T: Clone,
    {
        self.with_state(LoadState::clone)
    }
}

impl<T> ViewSlot<T> {
    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl<T> Drop for ViewSlot<T> {
    fn drop(&mut self) {
        self.abort_task();
    }
}
