//! Project form submission use-case.
//!
//! # Responsibility
//! - Validate raw form input before anything reaches the store.
//! - Add valid submissions to the store and reset the form.
//!
//! # Invariants
//! - A rejected submission never mutates the store and leaves the form
//!   fields untouched so the user can correct them.
//! - Fields are checked in form order; the first failing field is reported.

use crate::model::project::ProjectId;
use crate::state::project_state::SharedProjectState;
use crate::ui::surface::{FieldId, FormSurface};
use crate::validation::rules::{validate, FieldValue, Validatable};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Message shown to the user for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input value";

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: f64 = 1.0;
const PEOPLE_MAX: f64 = 5.0;

/// Submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A field failed its constraint set.
    ValidationFailure { field: FieldId },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailure { field } => {
                write!(f, "{}: `{field}`", INVALID_INPUT_MESSAGE.to_lowercase())
            }
        }
    }
}

impl Error for InputError {}

impl InputError {
    /// Field that caused the rejection.
    pub fn field(&self) -> FieldId {
        match self {
            Self::ValidationFailure { field } => *field,
        }
    }
}

/// Validated form values ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form controller bound to the store and the form surface.
pub struct ProjectInput {
    state: SharedProjectState,
    form: Rc<dyn FormSurface>,
}

impl ProjectInput {
    pub fn new(state: SharedProjectState, form: Rc<dyn FormSurface>) -> Self {
        Self { state, form }
    }

    /// Reads the three form fields and submits them.
    pub fn submit_form(&self) -> Result<ProjectId, InputError> {
        let title = self.form.read_field(FieldId::Title);
        let description = self.form.read_field(FieldId::Description);
        let people = self.form.read_field(FieldId::People);
        self.submit(&title, &description, &people)
    }

    /// Validates raw input, then adds the project and clears the form.
    ///
    /// # Errors
    /// - Returns `InputError::ValidationFailure` naming the first invalid
    ///   field; the error is also reported through the form surface.
    pub fn submit(
        &self,
        raw_title: &str,
        raw_description: &str,
        raw_people: &str,
    ) -> Result<ProjectId, InputError> {
        let draft = match gather_user_input(raw_title, raw_description, raw_people) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    "event=submit_rejected module=input status=invalid field={}",
                    err.field()
                );
                self.form.report_error(INVALID_INPUT_MESSAGE);
                return Err(err);
            }
        };

        let project_id =
            self.state
                .borrow_mut()
                .add_project(draft.title, draft.description, draft.people);
        info!(
            "event=project_submitted module=input status=ok project_id={} people={}",
            project_id, draft.people
        );

        self.clear_input();
        Ok(project_id)
    }

    fn clear_input(&self) {
        for field in FieldId::ALL {
            self.form.clear_field(field);
        }
    }
}

/// Checks raw form values and converts them into a draft.
///
/// Team size is coerced to a number before its range check, while its
/// `required` check runs on the raw text.
pub fn gather_user_input(
    raw_title: &str,
    raw_description: &str,
    raw_people: &str,
) -> Result<ProjectDraft, InputError> {
    let title_valid = validate(&Validatable::new(raw_title).required());
    if !title_valid {
        return Err(InputError::ValidationFailure {
            field: FieldId::Title,
        });
    }

    let description_valid = validate(
        &Validatable::new(raw_description)
            .required()
            .min_length(DESCRIPTION_MIN_LENGTH),
    );
    if !description_valid {
        return Err(InputError::ValidationFailure {
            field: FieldId::Description,
        });
    }

    let people = FieldValue::coerce_number(raw_people);
    let people_valid = validate(&Validatable::new(raw_people).required())
        && validate(&Validatable::new(people.clone()).min(PEOPLE_MIN).max(PEOPLE_MAX));
    let people = match people {
        FieldValue::Number(value) if people_valid && value.fract() == 0.0 => value as u32,
        _ => {
            return Err(InputError::ValidationFailure {
                field: FieldId::People,
            })
        }
    };

    Ok(ProjectDraft {
        title: raw_title.to_string(),
        description: raw_description.to_string(),
        people,
    })
}
