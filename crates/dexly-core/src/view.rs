// ── Per-screen fetch state ──
//
// A `ViewController` owns one screen's `FetchState` and the key it was
// loaded for. Changing the key starts a new fetch under a fresh
// generation; a fetch whose generation is no longer current when it
// finishes is dropped on the floor. In-flight requests are not aborted.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::CoreError;

/// What a screen shows. Exactly one of the three at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

type Loader<K, T> = Arc<dyn Fn(K) -> BoxFuture<'static, Result<T, CoreError>> + Send + Sync>;

/// Drives a [`FetchState`] from a keyed async loader.
pub struct ViewController<K, T> {
    label: &'static str,
    loader: Loader<K, T>,
    key: Option<K>,
    generation: Arc<AtomicU64>,
    state: Arc<watch::Sender<FetchState<T>>>,
}

impl<K, T> ViewController<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Send + Sync + 'static,
{
    /// Create an idle controller in the `Loading` state. No fetch starts
    /// until a key is set.
    pub fn new<F, Fut>(label: &'static str, loader: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            label,
            loader: Arc::new(move |key| loader(key).boxed()),
            key: None,
            generation: Arc::new(AtomicU64::new(0)),
            state: Arc::new(state),
        }
    }

    /// Generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Receiver that sees every committed transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    /// Point the screen at `key`. Returns the spawned fetch, or `None`
    /// when the key is unchanged.
    pub fn set_key(&mut self, key: K) -> Option<JoinHandle<()>> {
        if self.key.as_ref() == Some(&key) {
            return None;
        }
        self.key = Some(key.clone());
        Some(self.start(key))
    }

    /// Fetch the current key again under a new generation.
    pub fn reload(&mut self) -> Option<JoinHandle<()>> {
        let key = self.key.clone()?;
        Some(self.start(key))
    }

    fn start(&self, key: K) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(FetchState::Loading);

        let fetch = (self.loader)(key);
        let current = Arc::clone(&self.generation);
        let state = Arc::clone(&self.state);
        let label = self.label;

        debug!(view = label, generation, "fetch started");

        tokio::spawn(async move {
            let next = match fetch.await {
                Ok(value) => FetchState::Ready(value),
                Err(e) => {
                    warn!(view = label, generation, error = %e, "fetch failed");
                    FetchState::Failed(e.user_message())
                }
            };

            let committed = state.send_if_modified(|slot| {
                if current.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = next;
                true
            });

            if !committed {
                debug!(view = label, generation, "discarding stale result");
            }
        })
    }
}

impl<K, T: Clone> ViewController<K, T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }
}
