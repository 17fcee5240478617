//! Deferred section loading.
//!
//! A [`DeferredSection`] owns one section's loader and its resolved value. The
//! first render attempt requests the section and shows its placeholder; the
//! driver then resolves every requested section; later renders show the
//! content. The loader runs at most once, and a failure is terminal.
//!
//! ```text
//! Unresolved --render/resolve--> Resolving --ok--> Resolved
//!                                          \--err--> Failed
//! ```
//!
//! Sections share nothing, so any number of them can be awaited together in
//! any order.

use std::future::Future;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Why a section could not be resolved.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The content file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The content file is not valid JSON for this section
    #[error("invalid content in {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Lifecycle of one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Nobody has asked for the section yet
    Unresolved,
    /// Requested; the loader has not settled
    Resolving,
    /// Content is available
    Resolved,
    /// Loader failed; terminal
    Failed,
}

impl LoadState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Unresolved,
            1 => Self::Resolving,
            2 => Self::Resolved,
            _ => Self::Failed,
        }
    }

    /// Lowercase name for logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Resolving => "resolving",
            Self::Resolved => "resolved",
            Self::Failed => "failed",
        }
    }
}

/// What a render sees: the placeholder or the resolved content, never both.
#[derive(Debug, PartialEq, Eq)]
pub enum Deferred<T> {
    /// Show the placeholder
    Pending,
    /// Show the content
    Ready(T),
}

enum Failure<'a> {
    Stored(&'a LoadError),
    Fresh(LoadError),
}

type Loader<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T, LoadError>> + Send + Sync>;

/// One lazily loaded page section.
pub struct DeferredSection<T> {
    name: &'static str,
    placeholder: &'static str,
    loader: Loader<T>,
    value: OnceCell<T>,
    error: OnceLock<LoadError>,
    state: AtomicU8,
}

impl<T> DeferredSection<T> {
    /// Section name, used in logs and `data-section`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Text shown while the section is pending.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        LoadState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// The stored failure, once the section has failed.
    pub fn error(&self) -> Option<&LoadError> {
        self.error.get()
    }

    /// Current view without side effects.
    pub fn snapshot(&self) -> Deferred<&T> {
        match self.value.get() {
            Some(value) => Deferred::Ready(value),
            None => Deferred::Pending,
        }
    }
}

impl<T> std::fmt::Debug for DeferredSection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredSection")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<T: Send + Sync + 'static> DeferredSection<T> {
    /// Create an unresolved section. `loader` runs at most once.
    pub fn new<F, Fut>(name: &'static str, placeholder: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, LoadError>> + Send + 'static,
    {
        Self {
            name,
            placeholder,
            loader: Box::new(move || loader().boxed()),
            value: OnceCell::new(),
            error: OnceLock::new(),
            state: AtomicU8::new(LoadState::Unresolved as u8),
        }
    }

    /// A render attempt. Requests resolution if nobody has yet.
    pub fn render(&self) -> Deferred<&T> {
        if self.request() {
            debug!(section = self.name, "requested by render");
        }
        self.snapshot()
    }

    /// Unresolved -> Resolving. Returns true if this call made the transition.
    fn request(&self) -> bool {
        self.state
            .compare_exchange(
                LoadState::Unresolved as u8,
                LoadState::Resolving as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Resolve the section, running the loader if it has not run yet.
    pub async fn resolve(&self) -> Result<&T, &LoadError> {
        if let Some(err) = self.error.get() {
            return Err(err);
        }
        self.request();

        let result = self
            .value
            .get_or_try_init(|| async {
                // A concurrent caller may have failed while we waited on the cell.
                if let Some(err) = self.error.get() {
                    return Err(Failure::Stored(err));
                }
                (self.loader)().await.map_err(Failure::Fresh)
            })
            .await;

        match result {
            Ok(value) => {
                let previous = self.state.swap(LoadState::Resolved as u8, Ordering::AcqRel);
                if previous != LoadState::Resolved as u8 {
                    debug!(section = self.name, "resolved");
                }
                Ok(value)
            }
            Err(Failure::Stored(err)) => Err(err),
            Err(Failure::Fresh(err)) => {
                warn!(section = self.name, error = %err, "section failed to load");
                let err = self.error.get_or_init(|| err);
                self.state.store(LoadState::Failed as u8, Ordering::Release);
                Err(err)
            }
        }
    }

    /// Resolve only if a render asked for this section.
    pub async fn resolve_if_requested(&self) {
        if self.state() == LoadState::Resolving {
            let _ = self.resolve().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    fn counting(calls: Arc<AtomicUsize>, value: u32) -> DeferredSection<u32> {
        DeferredSection::new("numbers", "Loading numbers...", move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(value) }
        })
    }

    fn missing_file() -> LoadError {
        LoadError::Io {
            path: PathBuf::from("content/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }
    }

    #[test]
    fn first_render_shows_placeholder_and_requests() {
        let section = counting(Arc::default(), 1);
        assert_eq!(section.state(), LoadState::Unresolved);

        assert_eq!(section.render(), Deferred::Pending);
        assert_eq!(section.state(), LoadState::Resolving);
        assert_eq!(section.placeholder(), "Loading numbers...");
    }

    #[test]
    fn debug_shows_name_and_state() {
        let section = counting(Arc::default(), 1);
        let out = format!("{:?}", section);
        assert!(out.contains("numbers"));
        assert!(out.contains("Unresolved"));

        section.render();
        assert!(format!("{:?}", section).contains("Resolving"));
    }

    #[test]
    fn snapshot_does_not_request() {
        let section = counting(Arc::default(), 1);
        assert_eq!(section.snapshot(), Deferred::Pending);
        assert_eq!(section.state(), LoadState::Unresolved);
    }

    #[tokio::test]
    async fn resolves_once_and_reuses_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let section = counting(calls.clone(), 42);

        assert_eq!(section.render(), Deferred::Pending);
        assert_eq!(section.resolve().await.ok(), Some(&42));
        assert_eq!(section.resolve().await.ok(), Some(&42));
        assert_eq!(section.render(), Deferred::Ready(&42));
        assert_eq!(section.state(), LoadState::Resolved);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_resolves_share_one_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let section = counting(calls.clone(), 7);

        let (a, b) = tokio::join!(section.resolve(), section.resolve());
        assert_eq!(a.ok(), Some(&7));
        assert_eq!(b.ok(), Some(&7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolve_without_render_goes_straight_through() {
        let section = counting(Arc::default(), 3);
        assert_eq!(section.resolve().await.ok(), Some(&3));
        assert_eq!(section.state(), LoadState::Resolved);
    }

    #[tokio::test]
    async fn failure_is_terminal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let section: DeferredSection<u32> = DeferredSection::new("broken", "Loading...", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err(missing_file()) }
        });

        section.render();
        let err = section.resolve().await.unwrap_err();
        assert!(err.to_string().contains("content/missing.json"));
        assert_eq!(section.state(), LoadState::Failed);

        assert!(section.resolve().await.is_err());
        assert_eq!(section.render(), Deferred::Pending);
        assert_eq!(section.state(), LoadState::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unrequested_sections_stay_unresolved() {
        let calls = Arc::new(AtomicUsize::new(0));
        let section = counting(calls.clone(), 5);

        section.resolve_if_requested().await;
        assert_eq!(section.state(), LoadState::Unresolved);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        section.render();
        section.resolve_if_requested().await;
        assert_eq!(section.state(), LoadState::Resolved);
    }

    #[tokio::test]
    async fn sections_resolve_independently() {
        let (tx, rx) = oneshot::channel::<u32>();
        let rx = std::sync::Mutex::new(Some(rx));
        let slow: DeferredSection<u32> = DeferredSection::new("slow", "Loading slow...", move || {
            let rx = rx.lock().unwrap().take();
            async move { Ok(rx.expect("loader runs once").await.unwrap_or(0)) }
        });
        let fast = counting(Arc::default(), 1);

        slow.render();
        fast.render();

        let release_after_fast = async {
            let value = *fast.resolve().await.unwrap();
            // fast finished while slow is still in flight
            assert_eq!(slow.snapshot(), Deferred::Pending);
            assert_eq!(slow.state(), LoadState::Resolving);
            tx.send(9).unwrap();
            value
        };

        let (slow_value, fast_value) = tokio::join!(slow.resolve(), release_after_fast);
        assert_eq!(slow_value.ok(), Some(&9));
        assert_eq!(fast_value, 1);
        assert_eq!(slow.render(), Deferred::Ready(&9));
    }
}
