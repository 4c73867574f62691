//! Tests for Gallery
//!
//! These tests verify:
//! - Phase transitions (Loading -> Ready | Failed, Failed is terminal)
//! - Stale fetch results being dropped
//! - Actions routed through the pagination reducers
//! - Delete semantics (remote first, failures swallowed)
//! - Enlarged-view selection
//! - Background loads

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver};
use photopager::client::{MemorySource, PhotoSource};
use photopager::gallery::{Gallery, LoadOutcome, Phase};
use photopager::model::{Filter, Photo, SortKey};
use photopager::{Config, PagerError};

// =============================================================================
// Helper Functions
// =============================================================================

fn photos(n: u64) -> Vec<Photo> {
    (1..=n)
        .map(|i| Photo::new(i, (i - 1) / 10 + 1, format!("photo {}", n + 1 - i)))
        .collect()
}

fn ready_gallery(n: u64) -> (Gallery, MemorySource) {
    let source = MemorySource::new(photos(n));
    let gallery = Gallery::new(10).unwrap();
    assert_eq!(gallery.load(&source).unwrap(), LoadOutcome::Applied);
    (gallery, source)
}

/// Source that starts a refresh of `gallery` from inside its delete call
struct ReloadingSource<'a> {
    gallery: &'a Gallery,
    inner: MemorySource,
}

impl PhotoSource for ReloadingSource<'_> {
    fn fetch_photos(&self) -> photopager::Result<Vec<Photo>> {
        self.inner.fetch_photos()
    }

    fn delete_photo(&self, id: u64) -> photopager::Result<()> {
        self.gallery.begin_load()?;
        self.inner.delete_photo(id)
    }

    fn describe(&self) -> String {
        "reloading".to_string()
    }
}

/// Source whose fetch blocks until the gate opens; a closed gate panics
struct GatedSource {
    gate: Receiver<()>,
    photos: Vec<Photo>,
}

impl PhotoSource for GatedSource {
    fn fetch_photos(&self) -> photopager::Result<Vec<Photo>> {
        self.gate.recv().expect("gate closed");
        Ok(self.photos.clone())
    }

    fn delete_photo(&self, _id: u64) -> photopager::Result<()> {
        Ok(())
    }

    fn describe(&self) -> String {
        "gated".to_string()
    }
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_new_gallery_is_loading() {
    let gallery = Gallery::new(10).unwrap();
    let view = gallery.view();

    assert_eq!(view.phase, Phase::Loading);
    assert_eq!(view.status_line().as_deref(), Some("Loading..."));
    assert!(view.pagination.is_empty());
    assert_eq!(gallery.generation(), 0);
}

#[test]
fn test_zero_per_page_rejected() {
    assert!(matches!(Gallery::new(0), Err(PagerError::InvalidInput(_))));
}

#[test]
fn test_from_config_uses_per_page() {
    let config = Config::builder().per_page(4).build();
    let gallery = Gallery::from_config(&config).unwrap();
    assert_eq!(gallery.per_page(), 4);
}

#[test]
fn test_load_success_becomes_ready() {
    let (gallery, source) = ready_gallery(25);
    let view = gallery.view();

    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.status_line(), None);
    assert_eq!(view.collection_len, 25);
    assert_eq!(view.pagination.total_pages(), 3);
    assert_eq!(view.pagination.current_page(), 1);
    assert_eq!(source.fetch_count(), 1);
}

#[test]
fn test_load_failure_is_terminal() {
    let source = MemorySource::failing("connection refused");
    let gallery = Gallery::new(10).unwrap();

    assert_eq!(gallery.load(&source).unwrap(), LoadOutcome::Applied);

    let view = gallery.view();
    assert!(matches!(view.phase, Phase::Failed { .. }));
    let status = view.status_line().unwrap();
    assert!(status.starts_with("Error: "));
    assert!(status.contains("connection refused"));

    // No transition leaves Failed
    assert!(matches!(gallery.begin_load(), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.change_page(1), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.sort_by(SortKey::Title), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.delete(&source, 1), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.phase(), Phase::Failed { .. }));
}

#[test]
fn test_actions_rejected_while_loading() {
    let gallery = Gallery::new(10).unwrap();
    assert!(matches!(gallery.change_page(2), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.filter(Filter::album(1)), Err(PagerError::InvalidTransition(_))));
    assert!(matches!(gallery.select(1), Err(PagerError::InvalidTransition(_))));
}

#[test]
fn test_refresh_from_ready_replaces_collection() {
    let (gallery, _source) = ready_gallery(25);
    gallery.change_page(3).unwrap();

    let newer = MemorySource::new(photos(5));
    assert_eq!(gallery.load(&newer).unwrap(), LoadOutcome::Applied);

    let view = gallery.view();
    assert_eq!(view.collection_len, 5);
    assert_eq!(view.pagination.current_page(), 1);
    assert_eq!(gallery.generation(), 2);
}

// =============================================================================
// Generation Tests
// =============================================================================

#[test]
fn test_stale_result_is_dropped() {
    let gallery = Gallery::new(10).unwrap();

    let first = gallery.begin_load().unwrap();
    let second = gallery.begin_load().unwrap();
    assert!(second.generation() > first.generation());

    // Newer response arrives first
    assert_eq!(gallery.complete_load(second, Ok(photos(3))), LoadOutcome::Applied);
    // Older response arrives late and must not win
    assert_eq!(gallery.complete_load(first, Ok(photos(30))), LoadOutcome::Superseded);

    assert_eq!(gallery.view().collection_len, 3);
}

#[test]
fn test_stale_failure_does_not_fail_session() {
    let gallery = Gallery::new(10).unwrap();

    let first = gallery.begin_load().unwrap();
    let second = gallery.begin_load().unwrap();

    let late_error = Err(PagerError::Fetch("timeout".to_string()));
    assert_eq!(gallery.complete_load(first, late_error), LoadOutcome::Superseded);
    assert_eq!(gallery.phase(), Phase::Loading);

    assert_eq!(gallery.complete_load(second, Ok(photos(2))), LoadOutcome::Applied);
    assert_eq!(gallery.phase(), Phase::Ready);
}

#[test]
fn test_ticket_cannot_be_redeemed_twice() {
    let gallery = Gallery::new(10).unwrap();
    let ticket = gallery.begin_load().unwrap();

    assert_eq!(gallery.complete_load(ticket, Ok(photos(2))), LoadOutcome::Applied);
    assert_eq!(gallery.complete_load(ticket, Ok(photos(9))), LoadOutcome::Superseded);
    assert_eq!(gallery.view().collection_len, 2);
}

// =============================================================================
// Action Tests
// =============================================================================

#[test]
fn test_change_page() {
    let (gallery, _source) = ready_gallery(25);
    gallery.change_page(3).unwrap();

    let view = gallery.view();
    assert_eq!(view.pagination.current_page(), 3);
    assert_eq!(view.pagination.visible().len(), 5);
}

#[test]
fn test_sort_by_title_resets_page() {
    let (gallery, _source) = ready_gallery(25);
    gallery.change_page(2).unwrap();
    gallery.sort_by(SortKey::Title).unwrap();

    let view = gallery.view();
    assert_eq!(view.sort, SortKey::Title);
    assert_eq!(view.pagination.current_page(), 1);
    let titles: Vec<&str> = view.pagination.items().iter().map(|p| p.title.as_str()).collect();
    assert!(titles.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_filter_and_clear() {
    let (gallery, _source) = ready_gallery(25);

    gallery.filter(Filter::album(3)).unwrap();
    let view = gallery.view();
    assert_eq!(view.pagination.len(), 5);
    assert!(view.pagination.items().iter().all(|p| p.album_id == 3));
    assert_eq!(view.collection_len, 25);

    gallery.clear_filter().unwrap();
    assert_eq!(gallery.view().pagination.len(), 25);
}

#[test]
fn test_filter_keeps_sort_order() {
    let (gallery, _source) = ready_gallery(25);
    gallery.sort_by(SortKey::Title).unwrap();
    gallery.filter(Filter::album(1)).unwrap();

    let view = gallery.view();
    let titles: Vec<&str> = view.pagination.items().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles.len(), 10);
    assert!(titles.windows(2).all(|w| w[0] <= w[1]));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_locally_and_remotely() {
    let (gallery, source) = ready_gallery(25);
    gallery.change_page(2).unwrap();

    assert!(gallery.delete(&source, 12).unwrap());

    let view = gallery.view();
    assert_eq!(view.collection_len, 24);
    assert_eq!(view.pagination.len(), 24);
    assert!(view.pagination.find(12).is_none());
    assert_eq!(view.pagination.current_page(), 2);
    assert_eq!(source.photos().len(), 24);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let (gallery, source) = ready_gallery(5);
    assert!(!gallery.delete(&source, 404).unwrap());
    assert_eq!(gallery.view().collection_len, 5);
}

#[test]
fn test_delete_failure_leaves_state_unchanged() {
    let (gallery, source) = ready_gallery(25);
    let before = gallery.view();

    source.fail_deletes("HTTP 500");
    assert!(!gallery.delete(&source, 3).unwrap());

    assert_eq!(gallery.view(), before);
}

#[test]
fn test_delete_last_item_of_last_page() {
    let (gallery, source) = ready_gallery(21);
    gallery.change_page(3).unwrap();

    assert!(gallery.delete(&source, 21).unwrap());

    let view = gallery.view();
    assert_eq!(view.pagination.total_pages(), 2);
    assert_eq!(view.pagination.current_page(), 2);
}

#[test]
fn test_delete_during_refresh_skips_local_removal() {
    let gallery = Gallery::new(10).unwrap();
    let source = ReloadingSource {
        gallery: &gallery,
        inner: MemorySource::new(photos(5)),
    };
    gallery.load(&source).unwrap();
    assert_eq!(gallery.phase(), Phase::Ready);

    assert!(!gallery.delete(&source, 3).unwrap());

    let view = gallery.view();
    assert_eq!(view.phase, Phase::Loading);
    assert_eq!(view.collection_len, 5);
    assert!(view.pagination.find(3).is_some());
    // Remote side did go through
    assert_eq!(source.inner.photos().len(), 4);
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test]
fn test_select_and_close_detail() {
    let (gallery, _source) = ready_gallery(5);

    let photo = gallery.select(4).unwrap();
    assert_eq!(photo.id, 4);
    assert_eq!(gallery.view().selected.map(|p| p.id), Some(4));

    gallery.close_detail();
    assert_eq!(gallery.view().selected, None);
}

#[test]
fn test_select_unknown_id() {
    let (gallery, _source) = ready_gallery(5);
    assert!(matches!(gallery.select(77), Err(PagerError::InvalidInput(_))));
}

#[test]
fn test_deleting_selected_photo_closes_detail() {
    let (gallery, source) = ready_gallery(5);
    gallery.select(2).unwrap();
    gallery.delete(&source, 2).unwrap();
    assert_eq!(gallery.view().selected, None);
}

// =============================================================================
// Background Load Tests
// =============================================================================

#[test]
fn test_spawn_load_applies_result() {
    let gallery = Arc::new(Gallery::new(10).unwrap());
    let source: Arc<dyn PhotoSource> = Arc::new(MemorySource::new(photos(12)));

    let handle = gallery.spawn_load(source).unwrap();
    assert_eq!(handle.generation(), 1);
    assert_eq!(handle.wait().unwrap(), LoadOutcome::Applied);

    let view = gallery.view();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.pagination.total_pages(), 2);
}

#[test]
fn test_wait_timeout_while_fetch_blocked() {
    let gallery = Arc::new(Gallery::new(10).unwrap());
    let (open, gate) = channel::bounded(1);
    let source: Arc<dyn PhotoSource> = Arc::new(GatedSource {
        gate,
        photos: photos(3),
    });

    let handle = gallery.spawn_load(source).unwrap();
    assert_eq!(handle.wait_timeout(Duration::from_millis(50)).unwrap(), None);
    assert_eq!(gallery.phase(), Phase::Loading);

    open.send(()).unwrap();
    assert_eq!(
        handle.wait_timeout(Duration::from_secs(5)).unwrap(),
        Some(LoadOutcome::Applied)
    );
    assert_eq!(gallery.view().collection_len, 3);
}

#[test]
fn test_wait_timeout_reports_dead_worker() {
    let gallery = Arc::new(Gallery::new(10).unwrap());
    let (open, gate) = channel::bounded::<()>(1);
    let source: Arc<dyn PhotoSource> = Arc::new(GatedSource {
        gate,
        photos: Vec::new(),
    });

    let handle = gallery.spawn_load(source).unwrap();
    // Closing the gate makes the worker panic before it reports
    drop(open);

    assert!(matches!(
        handle.wait_timeout(Duration::from_secs(5)),
        Err(PagerError::Fetch(_))
    ));
    assert_eq!(gallery.phase(), Phase::Loading);
}

#[test]
fn test_overlapping_spawned_loads_keep_newest() {
    let gallery = Arc::new(Gallery::new(10).unwrap());
    let older: Arc<dyn PhotoSource> = Arc::new(MemorySource::new(photos(40)));
    let newer: Arc<dyn PhotoSource> = Arc::new(MemorySource::new(photos(7)));

    let first = gallery.spawn_load(older).unwrap();
    let second = gallery.spawn_load(newer).unwrap();

    let first_outcome = first.wait().unwrap();
    let second_outcome = second.wait().unwrap();

    // The first worker may finish before the second ticket exists; either way
    // the newest load decides the final state.
    assert!(matches!(first_outcome, LoadOutcome::Applied | LoadOutcome::Superseded));
    assert_eq!(second_outcome, LoadOutcome::Applied);
    assert_eq!(gallery.view().collection_len, 7);
}

#[test]
fn test_concurrent_readers_during_actions() {
    let (gallery, _source) = ready_gallery(100);
    let gallery = Arc::new(gallery);

    let mut handles = Vec::new();
    for i in 0..4 {
        let gallery = Arc::clone(&gallery);
        handles.push(thread::spawn(move || {
            for page in 1..=10 {
                if i == 0 {
                    gallery.change_page(page).unwrap();
                }
                let view = gallery.view();
                let state = &view.pagination;
                assert!(state.current_page() >= 1);
                assert!(state.current_page() <= state.total_pages().max(1));
                assert_eq!(state.visible().len(), 10);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
