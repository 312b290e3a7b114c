//! Core domain logic for the project board.
//! This crate is the single source of truth for store and list invariants.

pub mod app;
pub mod logging;
pub mod model;
pub mod service;
pub mod state;
pub mod ui;
pub mod validation;
pub mod view;

pub use app::ProjectBoard;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus, ProjectValidationError};
pub use service::project_input::{
    gather_user_input, InputError, ProjectDraft, ProjectInput, INVALID_INPUT_MESSAGE,
};
pub use state::project_state::{Listener, ProjectState, SharedProjectState};
pub use ui::surface::{FieldId, FormSurface, ListKind, ProjectRenderer};
pub use validation::rules::{validate, FieldValue, Validatable};
pub use view::project_list::{filter_by_kind, ListSyncState, ProjectList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
