//! Project store with synchronous listener broadcast.
//!
//! # Invariants
//! - The project sequence only grows; insertion order is iteration order.
//! - Listeners run in registration order, synchronously inside
//!   `add_project`, each receiving the full post-mutation snapshot.
//! - Listeners receive an immutable slice and cannot mutate store state.
//! - Registering the same listener twice yields two invocations.
//! - The store performs no input validation; callers validate first.

use crate::model::project::{Project, ProjectId};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with the full snapshot after each mutation.
pub type Listener = Box<dyn FnMut(&[Project])>;

/// Shared single-threaded handle to the one store instance.
///
/// Listeners must not borrow the store again while a broadcast is running.
pub type SharedProjectState = Rc<RefCell<ProjectState>>;

/// Owner of every submitted project and of the listener list.
#[derive(Default)]
pub struct ProjectState {
    listeners: Vec<Listener>,
    projects: Vec<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the store wrapped in its shared handle.
    pub fn shared() -> SharedProjectState {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a listener for future mutations.
    ///
    /// The listener is not invoked on registration. There is no way to
    /// unsubscribe.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&[Project]) + 'static,
    {
        self.listeners.push(Box::new(listener));
        debug!(
            "event=listener_added module=state status=ok listeners={}",
            self.listeners.len()
        );
    }

    /// Appends a new active project and broadcasts the updated snapshot.
    ///
    /// Returns the generated project id.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let project_id = project.id;
        self.projects.push(project);

        debug!(
            "event=project_added module=state status=ok project_id={} total={} listeners={}",
            project_id,
            self.projects.len(),
            self.listeners.len()
        );

        let snapshot = self.projects.as_slice();
        for listener in self.listeners.iter_mut() {
            listener(snapshot);
        }
        project_id
    }

    /// Current snapshot in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectState;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn listener_is_not_invoked_on_registration() {
        let calls = Rc::new(Cell::new(0));
        let mut state = ProjectState::new();
        let seen = Rc::clone(&calls);
        state.add_listener(move |_| seen.set(seen.get() + 1));

        assert_eq!(calls.get(), 0);
        assert_eq!(state.listener_count(), 1);
    }

    #[test]
    fn add_project_returns_id_of_appended_record() {
        let mut state = ProjectState::new();
        let id = state.add_project("title", "description", 2);

        assert_eq!(state.len(), 1);
        assert_eq!(state.projects()[0].id, id);
    }
}
