//! Application wiring.
//!
//! Builds the one store and attaches the form controller and both list
//! views to it, in the order the front-end shows them.

use crate::model::project::Project;
use crate::service::project_input::ProjectInput;
use crate::state::project_state::{ProjectState, SharedProjectState};
use crate::ui::surface::{FormSurface, ListKind, ProjectRenderer};
use crate::view::project_list::ProjectList;
use log::info;
use std::rc::Rc;

/// Fully wired project board.
pub struct ProjectBoard {
    state: SharedProjectState,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
}

impl ProjectBoard {
    pub fn new(renderer: Rc<dyn ProjectRenderer>, form: Rc<dyn FormSurface>) -> Self {
        let state = ProjectState::shared();
        let input = ProjectInput::new(Rc::clone(&state), form);
        let (active, finished) = {
            let mut store = state.borrow_mut();
            let active = ProjectList::new(ListKind::Active, &mut store, Rc::clone(&renderer));
            let finished = ProjectList::new(ListKind::Finished, &mut store, renderer);
            (active, finished)
        };

        info!(
            "event=board_ready module=app status=ok lists={}",
            ListKind::ALL.len()
        );

        Self {
            state,
            input,
            active,
            finished,
        }
    }

    pub fn state(&self) -> &SharedProjectState {
        &self.state
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn list(&self, kind: ListKind) -> &ProjectList {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Finished => &self.finished,
        }
    }

    /// Copy of the full store snapshot.
    pub fn snapshot(&self) -> Vec<Project> {
        self.state.borrow().projects().to_vec()
    }
}
