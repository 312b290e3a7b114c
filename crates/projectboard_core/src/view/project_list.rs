//! Status-filtered project list.
//!
//! # Invariants
//! - Every broadcast fully replaces the cached list; nothing is merged.
//! - Cached order equals snapshot order.
//! - No initial push: the list stays empty and `AwaitingFirstBroadcast`
//!   until the store next mutates.

use crate::model::project::Project;
use crate::state::project_state::ProjectState;
use crate::ui::surface::{ListKind, ProjectRenderer};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Whether a list has received any broadcast yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSyncState {
    AwaitingFirstBroadcast,
    Synced,
}

#[derive(Debug)]
struct ListCache {
    assigned: Vec<Project>,
    sync_state: ListSyncState,
}

/// One category view bound to the store at construction.
pub struct ProjectList {
    kind: ListKind,
    cache: Rc<RefCell<ListCache>>,
}

impl ProjectList {
    /// Binds a list to `kind`, renders its heading and subscribes to `state`.
    pub fn new(kind: ListKind, state: &mut ProjectState, renderer: Rc<dyn ProjectRenderer>) -> Self {
        let cache = Rc::new(RefCell::new(ListCache {
            assigned: Vec::new(),
            sync_state: ListSyncState::AwaitingFirstBroadcast,
        }));

        renderer.render_heading(kind);

        let listener_cache = Rc::clone(&cache);
        state.add_listener(move |projects: &[Project]| {
            let relevant = filter_by_kind(projects, kind);
            debug!(
                "event=list_synced module=view status=ok list={} assigned={} snapshot={}",
                kind,
                relevant.len(),
                projects.len()
            );
            {
                let mut cache = listener_cache.borrow_mut();
                cache.assigned = relevant;
                cache.sync_state = ListSyncState::Synced;
            }
            renderer.render(&listener_cache.borrow().assigned, kind);
        });

        Self { kind, cache }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Copy of the projects currently assigned to this list.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.cache.borrow().assigned.clone()
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().assigned.is_empty()
    }

    pub fn sync_state(&self) -> ListSyncState {
        self.cache.borrow().sync_state
    }
}

/// Projects in `snapshot` whose status matches `kind`, in snapshot order.
pub fn filter_by_kind(snapshot: &[Project], kind: ListKind) -> Vec<Project> {
    snapshot
        .iter()
        .filter(|project| project.has_status(kind.status()))
        .cloned()
        .collect()
}
