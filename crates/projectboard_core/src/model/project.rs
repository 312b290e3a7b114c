//! Project domain model.
//!
//! # Responsibility
//! - Define the record produced by one successful form submission.
//! - Map record status onto the list category that displays it.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - `status` starts as `Active`; no transition operation exists yet.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
pub type ProjectId = Uuid;

/// Lifecycle category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly submitted, still being worked on.
    Active,
    /// Completed.
    Finished,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model-level errors for projects built from external identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilUuid,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "project id must not be nil"),
        }
    }
}

impl Error for ProjectValidationError {}

/// One submitted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Team size. Serialized as `people` to match the form field name.
    #[serde(rename = "people")]
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated random id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Creates an active project with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `ProjectValidationError::NilUuid` for the nil UUID.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<Self, ProjectValidationError> {
        if id.is_nil() {
            return Err(ProjectValidationError::NilUuid);
        }
        Ok(Self {
            id,
            ..Self::new(title, description, people)
        })
    }

    /// Returns whether this project belongs to the given status category.
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
