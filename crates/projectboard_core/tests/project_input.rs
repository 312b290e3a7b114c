mod support;

use projectboard_core::{
    FieldId, FormSurface, InputError, ListKind, ProjectBoard, ProjectStatus,
    INVALID_INPUT_MESSAGE,
};
use std::rc::Rc;
use support::{FakeForm, RecordingRenderer};

fn board() -> (ProjectBoard, Rc<RecordingRenderer>, Rc<FakeForm>) {
    let renderer = Rc::new(RecordingRenderer::default());
    let form = Rc::new(FakeForm::default());
    let board = ProjectBoard::new(renderer.clone(), form.clone());
    (board, renderer, form)
}

#[test]
fn board_wires_both_lists_in_order() {
    let (board, renderer, _form) = board();

    assert_eq!(
        *renderer.headings.borrow(),
        vec![ListKind::Active, ListKind::Finished]
    );
    assert_eq!(board.state().borrow().listener_count(), 2);
    assert!(board.snapshot().is_empty());
}

#[test]
fn valid_submission_adds_active_project_and_clears_form() {
    let (board, _renderer, form) = board();
    form.fill("Build API", "Implement REST endpoints", "3");

    let project_id = board.input().submit_form().expect("valid input");

    let snapshot = board.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, project_id);
    assert_eq!(snapshot[0].title, "Build API");
    assert_eq!(snapshot[0].people, 3);
    assert_eq!(snapshot[0].status, ProjectStatus::Active);

    let active = board.list(ListKind::Active).assigned_projects();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, project_id);
    assert!(board.list(ListKind::Finished).is_empty());

    for field in FieldId::ALL {
        assert_eq!(form.value(field), "");
    }
    assert!(form.errors.borrow().is_empty());
}

#[test]
fn short_description_is_rejected_without_mutation() {
    let (board, renderer, form) = board();
    form.fill("Build API", "hi", "3");

    let err = board.input().submit_form().expect_err("short description");

    assert_eq!(
        err,
        InputError::ValidationFailure {
            field: FieldId::Description
        }
    );
    assert!(board.snapshot().is_empty());
    assert!(renderer.renders.borrow().is_empty());
    assert_eq!(*form.errors.borrow(), vec![INVALID_INPUT_MESSAGE.to_string()]);
    assert_eq!(form.value(FieldId::Title), "Build API");
    assert_eq!(form.value(FieldId::Description), "hi");
    assert_eq!(form.value(FieldId::People), "3");
}

#[test]
fn user_can_resubmit_after_rejection() {
    let (board, _renderer, form) = board();
    form.fill("Build API", "Implement REST endpoints", "9");
    assert!(board.input().submit_form().is_err());

    form.clear_field(FieldId::People);
    form.fill("Build API", "Implement REST endpoints", "2");
    board.input().submit_form().expect("corrected input");

    assert_eq!(board.snapshot().len(), 1);
    assert_eq!(form.errors.borrow().len(), 1);
}

#[test]
fn direct_submit_validates_raw_values() {
    let (board, _renderer, form) = board();

    let err = board
        .input()
        .submit("", "Implement REST endpoints", "3")
        .expect_err("blank title");
    assert_eq!(err.field(), FieldId::Title);

    board
        .input()
        .submit("Docs", "Write the user guide", "4")
        .expect("valid input");
    assert_eq!(board.list(ListKind::Active).len(), 1);
    assert_eq!(form.errors.borrow().len(), 1);
}
