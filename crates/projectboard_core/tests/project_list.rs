mod support;

use projectboard_core::{ListKind, ListSyncState, ProjectList, ProjectState};
use std::collections::HashSet;
use std::rc::Rc;
use support::RecordingRenderer;

#[test]
fn list_renders_heading_once_and_waits_for_first_broadcast() {
    let renderer = Rc::new(RecordingRenderer::default());
    let mut state = ProjectState::new();
    let list = ProjectList::new(ListKind::Active, &mut state, renderer.clone());

    assert_eq!(list.kind(), ListKind::Active);
    assert_eq!(list.sync_state(), ListSyncState::AwaitingFirstBroadcast);
    assert!(list.is_empty());
    assert_eq!(*renderer.headings.borrow(), vec![ListKind::Active]);
    assert!(renderer.renders.borrow().is_empty());
}

#[test]
fn lists_partition_every_snapshot() {
    let renderer = Rc::new(RecordingRenderer::default());
    let mut state = ProjectState::new();
    let active = ProjectList::new(ListKind::Active, &mut state, renderer.clone());
    let finished = ProjectList::new(ListKind::Finished, &mut state, renderer.clone());

    for index in 0..4 {
        state.add_project(format!("project {index}"), "long enough", 2);

        let snapshot_ids: HashSet<_> = state.projects().iter().map(|p| p.id).collect();
        let active_ids: HashSet<_> = active.assigned_projects().iter().map(|p| p.id).collect();
        let finished_ids: HashSet<_> =
            finished.assigned_projects().iter().map(|p| p.id).collect();

        assert!(active_ids.is_disjoint(&finished_ids));
        let union: HashSet<_> = active_ids.union(&finished_ids).copied().collect();
        assert_eq!(union, snapshot_ids);
    }

    assert_eq!(active.len(), 4);
    assert!(finished.is_empty());
    assert_eq!(active.sync_state(), ListSyncState::Synced);
    assert_eq!(finished.sync_state(), ListSyncState::Synced);
}

#[test]
fn each_broadcast_renders_full_recomputed_list_per_kind() {
    let renderer = Rc::new(RecordingRenderer::default());
    let mut state = ProjectState::new();
    let _active = ProjectList::new(ListKind::Active, &mut state, renderer.clone());
    let _finished = ProjectList::new(ListKind::Finished, &mut state, renderer.clone());

    state.add_project("one", "first description", 2);
    state.add_project("two", "second description", 3);

    let targets: Vec<ListKind> = renderer.renders.borrow().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        targets,
        vec![
            ListKind::Active,
            ListKind::Finished,
            ListKind::Active,
            ListKind::Finished
        ]
    );

    let active_renders = renderer.renders_for(ListKind::Active);
    let titles: Vec<&str> = active_renders[1].iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two"]);
    assert!(renderer
        .renders_for(ListKind::Finished)
        .iter()
        .all(|projects| projects.is_empty()));
}
