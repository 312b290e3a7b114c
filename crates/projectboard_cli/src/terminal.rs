//! Terminal implementation of the form and list surfaces.

use projectboard_core::{FieldId, FormSurface, ListKind, Project, ProjectRenderer};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

/// Form fields kept in memory; lists and errors written to stdout/stderr.
#[derive(Default)]
pub struct TerminalSurface {
    fields: RefCell<HashMap<FieldId, String>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field as if the user typed into it.
    pub fn set_field(&self, field: FieldId, value: String) {
        self.fields.borrow_mut().insert(field, value);
    }
}

impl FormSurface for TerminalSurface {
    fn read_field(&self, field: FieldId) -> String {
        self.fields
            .borrow()
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn clear_field(&self, field: FieldId) {
        self.fields.borrow_mut().insert(field, String::new());
    }

    fn report_error(&self, message: &str) {
        eprintln!("! {message}");
    }
}

impl ProjectRenderer for TerminalSurface {
    fn render_heading(&self, target: ListKind) {
        println!("[{}] {}", target.list_id(), target.heading());
    }

    fn render(&self, projects: &[Project], target: ListKind) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{} ({})", target.heading(), projects.len());
        for project in projects {
            let _ = writeln!(out, "  - {} ({} people)", project.title, project.people);
        }
    }
}
