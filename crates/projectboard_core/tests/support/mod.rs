#![allow(dead_code)]

use projectboard_core::{FieldId, FormSurface, ListKind, Project, ProjectRenderer};
use std::cell::RefCell;
use std::collections::HashMap;

/// Renderer double that records every call.
#[derive(Default)]
pub struct RecordingRenderer {
    pub headings: RefCell<Vec<ListKind>>,
    pub renders: RefCell<Vec<(ListKind, Vec<Project>)>>,
}

impl RecordingRenderer {
    pub fn renders_for(&self, kind: ListKind) -> Vec<Vec<Project>> {
        self.renders
            .borrow()
            .iter()
            .filter(|(target, _)| *target == kind)
            .map(|(_, projects)| projects.clone())
            .collect()
    }
}

impl ProjectRenderer for RecordingRenderer {
    fn render_heading(&self, target: ListKind) {
        self.headings.borrow_mut().push(target);
    }

    fn render(&self, projects: &[Project], target: ListKind) {
        self.renders.borrow_mut().push((target, projects.to_vec()));
    }
}

/// In-memory form with recorded error reports.
#[derive(Default)]
pub struct FakeForm {
    pub fields: RefCell<HashMap<FieldId, String>>,
    pub errors: RefCell<Vec<String>>,
}

impl FakeForm {
    pub fn fill(&self, title: &str, description: &str, people: &str) {
        let mut fields = self.fields.borrow_mut();
        fields.insert(FieldId::Title, title.to_string());
        fields.insert(FieldId::Description, description.to_string());
        fields.insert(FieldId::People, people.to_string());
    }

    pub fn value(&self, field: FieldId) -> String {
        self.read_field(field)
    }
}

impl FormSurface for FakeForm {
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
        self.errors.borrow_mut().push(message.to_string());
    }
}
