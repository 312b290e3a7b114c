//! Form and list surface traits plus the identifiers they are keyed by.

use crate::model::project::{Project, ProjectStatus};
use std::fmt::{Display, Formatter};

/// Input fields of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    Description,
    People,
}

impl FieldId {
    /// All form fields in display order.
    pub const ALL: [FieldId; 3] = [FieldId::Title, FieldId::Description, FieldId::People];

    /// Element id of the field in the form template.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category label of one rendered project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Active, ListKind::Finished];

    /// Project status shown by this list.
    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.status().as_str()
    }

    /// Element id of the list body, e.g. `active-projects-list`.
    pub fn list_id(self) -> String {
        format!("{}-projects-list", self.as_str())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_uppercase())
    }
}

impl Display for ListKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displays project lists.
pub trait ProjectRenderer {
    /// Prepares the static chrome of one list (heading, list id).
    ///
    /// Called once when the list is created. Default is a no-op.
    fn render_heading(&self, _target: ListKind) {}

    /// Replaces the visible content of `target` with `projects`.
    fn render(&self, projects: &[Project], target: ListKind);
}

/// Reads and resets form fields and surfaces user-facing errors.
pub trait FormSurface {
    fn read_field(&self, field: FieldId) -> String;
    fn clear_field(&self, field: FieldId);
    fn report_error(&self, message: &str);
}
