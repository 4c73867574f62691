//! Gallery Module
//!
//! The browsing session a view layer drives.
//!
//! ## Responsibilities
//! - Phase machine: Loading -> Ready | Failed, Ready -> Loading on refresh
//! - Discard responses from superseded fetches (generation counter)
//! - Route page/sort/filter/delete actions through the pagination reducers
//! - Track the photo shown in the enlarged view

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError};
use parking_lot::RwLock;

use crate::client::PhotoSource;
use crate::config::Config;
use crate::error::{PagerError, Result};
use crate::model::{Filter, Photo, SortKey};
use crate::pagination::{self, PaginationState};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is in flight
    Loading,

    /// Collection loaded, actions accepted
    Ready,

    /// The fetch failed; terminal
    Failed { message: String },
}

/// Issued by `begin_load`, redeemed by `complete_load`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result became the session state
    Applied,

    /// A newer fetch was started in the meantime; result dropped
    Superseded,
}

/// Cloned snapshot of the session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub phase: Phase,
    pub pagination: PaginationState,
    pub selected: Option<Photo>,
    pub sort: SortKey,
    pub filter: Filter,

    /// Size of the full collection, before filtering
    pub collection_len: usize,
}

impl GalleryView {
    /// Inline status message, `None` once ready
    pub fn status_line(&self) -> Option<String> {
        match &self.phase {
            Phase::Loading => Some("Loading...".to_string()),
            Phase::Failed { message } => Some(format!("Error: {}", message)),
            Phase::Ready => None,
        }
    }
}

/// Handle on a fetch running on a worker thread
pub struct LoadHandle {
    generation: u64,
    receiver: Receiver<LoadOutcome>,
}

impl LoadHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Block until the worker has completed the load
    pub fn wait(self) -> Result<LoadOutcome> {
        self.receiver.recv().map_err(|_| {
            PagerError::Fetch(format!("Load worker {} exited without reporting", self.generation))
        })
    }

    /// Block for at most `timeout`; `Ok(None)` if still running
    pub fn wait_timeout(&self, timeout: Duration) -> Result<Option<LoadOutcome>> {
        match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => Ok(Some(outcome)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(PagerError::Fetch(format!(
                "Load worker {} exited without reporting",
                self.generation
            ))),
        }
    }
}

/// Mutable session data, guarded by the gallery's lock
struct SessionState {
    phase: Phase,

    /// Newest generation handed out by `begin_load`
    generation: u64,

    /// Full collection in fetch order, minus deletions
    collection: Vec<Photo>,

    /// Filtered, sorted, paginated view of `collection`
    pagination: PaginationState,

    sort: SortKey,
    filter: Filter,
    selected: Option<u64>,
}

/// A photo browsing session
///
/// ## Concurrency
/// - All state sits behind one `RwLock`; every action is a single
///   recomputation under the write lock
/// - Network calls never run with the lock held
/// - Overlapping fetches: only the newest ticket's result is applied
pub struct Gallery {
    per_page: usize,
    state: RwLock<SessionState>,
}

impl Gallery {
    /// Create an empty session in `Loading`
    pub fn new(per_page: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(PagerError::InvalidInput(
                "per_page must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            per_page,
            state: RwLock::new(SessionState {
                phase: Phase::Loading,
                generation: 0,
                collection: Vec::new(),
                pagination: PaginationState::empty(per_page),
                sort: SortKey::default(),
                filter: Filter::default(),
                selected: None,
            }),
        })
    }

    /// Create a session using the configured page size
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.per_page)
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Start a fetch, superseding any fetch still in flight
    pub fn begin_load(&self) -> Result<LoadTicket> {
        self.start_load().map(|(ticket, _)| ticket)
    }

    /// `begin_load`, also returning the phase it replaced
    fn start_load(&self) -> Result<(LoadTicket, Phase)> {
        let mut state = self.state.write();

        if let Phase::Failed { message } = &state.phase {
            return Err(PagerError::InvalidTransition(format!(
                "gallery failed to load ({}); open a new session",
                message
            )));
        }

        state.generation += 1;
        let previous = std::mem::replace(&mut state.phase, Phase::Loading);
        tracing::debug!("Load {} started", state.generation);

        let ticket = LoadTicket {
            generation: state.generation,
        };
        Ok((ticket, previous))
    }

    /// Undo `start_load` for a fetch that never ran
    ///
    /// No-op once a newer load has started.
    fn abandon_load(&self, ticket: LoadTicket, previous: Phase) {
        let mut state = self.state.write();
        if ticket.generation == state.generation && state.phase == Phase::Loading {
            tracing::debug!("Load {} abandoned; back to {:?}", ticket.generation, previous);
            state.phase = previous;
        }
    }

    /// Apply the result of the fetch identified by `ticket`
    pub fn complete_load(&self, ticket: LoadTicket, result: Result<Vec<Photo>>) -> LoadOutcome {
        let mut state = self.state.write();

        if ticket.generation != state.generation || state.phase != Phase::Loading {
            tracing::debug!(
                "Dropping result of load {} (current load {})",
                ticket.generation,
                state.generation
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(photos) => {
                tracing::debug!("Load {} ready with {} photos", ticket.generation, photos.len());
                state.pagination = derive(&photos, &state.filter, state.sort, 1, self.per_page);
                state.collection = photos;
                state.selected = None;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                tracing::warn!("Load {} failed: {}", ticket.generation, e);
                state.phase = Phase::Failed {
                    message: e.to_string(),
                };
            }
        }

        LoadOutcome::Applied
    }

    /// Fetch from `source` on the calling thread
    ///
    /// A failed fetch is not an `Err` here: it moves the session to
    /// `Failed`, which `view().status_line()` reports.
    pub fn load(&self, source: &dyn PhotoSource) -> Result<LoadOutcome> {
        let ticket = self.begin_load()?;
        tracing::debug!("Load {} fetching from {}", ticket.generation, source.describe());
        let result = source.fetch_photos();
        Ok(self.complete_load(ticket, result))
    }

    /// Fetch from `source` on a worker thread
    pub fn spawn_load(self: &Arc<Self>, source: Arc<dyn PhotoSource>) -> Result<LoadHandle> {
        let (ticket, previous) = self.start_load()?;
        let (sender, receiver) = channel::bounded(1);
        let gallery = Arc::clone(self);

        let spawned = thread::Builder::new()
            .name(format!("photopager-load-{}", ticket.generation))
            .spawn(move || {
                let result = source.fetch_photos();
                let outcome = gallery.complete_load(ticket, result);
                let _ = sender.send(outcome);
            });

        if let Err(e) = spawned {
            self.abandon_load(ticket, previous);
            return Err(e.into());
        }

        Ok(LoadHandle {
            generation: ticket.generation,
            receiver,
        })
    }

    // =========================================================================
    // Actions (Ready only)
    // =========================================================================

    /// Show another page
    pub fn change_page(&self, page: usize) -> Result<()> {
        let mut state = self.state.write();
        ensure_ready(&state.phase, "change page")?;
        state.pagination = pagination::change_page(&state.pagination, page);
        Ok(())
    }

    /// Reorder and go back to page 1
    pub fn sort_by(&self, key: SortKey) -> Result<()> {
        let mut state = self.state.write();
        ensure_ready(&state.phase, "sort")?;
        state.sort = key;
        state.pagination = pagination::sort_by(&state.pagination, key);
        Ok(())
    }

    /// Narrow the collection and go back to page 1
    pub fn filter(&self, filter: Filter) -> Result<()> {
        let mut state = self.state.write();
        ensure_ready(&state.phase, "filter")?;
        state.pagination = derive(&state.collection, &filter, state.sort, 1, self.per_page);
        state.filter = filter;
        Ok(())
    }

    /// Drop any filter and go back to page 1
    pub fn clear_filter(&self) -> Result<()> {
        self.filter(Filter::default())
    }

    /// Delete a photo remotely, then locally
    ///
    /// Remote failures are logged and leave the state untouched
    /// (`Ok(false)`). Returns `Ok(true)` if a photo was removed.
    pub fn delete(&self, source: &dyn PhotoSource, id: u64) -> Result<bool> {
        ensure_ready(&self.state.read().phase, "delete")?;

        if let Err(e) = source.delete_photo(id) {
            tracing::warn!("Failed to delete photo {} via {}: {}", id, source.describe(), e);
            return Ok(false);
        }

        let mut state = self.state.write();
        if state.phase != Phase::Ready {
            tracing::debug!("Session reloaded while deleting photo {}; skipping local removal", id);
            return Ok(false);
        }

        let before = state.collection.len();
        state.collection.retain(|p| p.id != id);
        let removed = state.collection.len() != before;

        state.pagination = pagination::remove(&state.pagination, id);
        if state.selected == Some(id) {
            state.selected = None;
        }

        tracing::debug!("Deleted photo {} (present locally: {})", id, removed);
        Ok(removed)
    }

    /// Open the enlarged view of a photo
    pub fn select(&self, id: u64) -> Result<Photo> {
        let mut state = self.state.write();
        ensure_ready(&state.phase, "select")?;

        let photo = state
            .collection
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| PagerError::InvalidInput(format!("No photo with id {}", id)))?;
        state.selected = Some(id);
        Ok(photo)
    }

    /// Close the enlarged view
    pub fn close_detail(&self) {
        self.state.write().selected = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Snapshot everything a view needs
    pub fn view(&self) -> GalleryView {
        let state = self.state.read();
        let selected = state
            .selected
            .and_then(|id| state.collection.iter().find(|p| p.id == id).cloned());

        GalleryView {
            phase: state.phase.clone(),
            pagination: state.pagination.clone(),
            selected,
            sort: state.sort,
            filter: state.filter.clone(),
            collection_len: state.collection.len(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.read().phase.clone()
    }

    /// Newest generation issued so far (0 before the first load)
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }
}

fn ensure_ready(phase: &Phase, action: &str) -> Result<()> {
    match phase {
        Phase::Ready => Ok(()),
        Phase::Loading => Err(PagerError::InvalidTransition(format!(
            "cannot {} while loading",
            action
        ))),
        Phase::Failed { .. } => Err(PagerError::InvalidTransition(format!(
            "cannot {} after a failed load",
            action
        ))),
    }
}

/// Filter, sort and paginate the full collection
fn derive(
    collection: &[Photo],
    filter: &Filter,
    sort: SortKey,
    page: usize,
    per_page: usize,
) -> PaginationState {
    let items = if filter.is_empty() {
        collection.to_vec()
    } else {
        filter.apply(collection)
    };
    let state = pagination::sort_by(&PaginationState::build(items, 1, per_page), sort);
    pagination::change_page(&state, page)
}
