use super::*;

use std::cell::RefCell;

use crate::net::api::RequestError;
use crate::net::types::EntityKind;

#[derive(Default)]
struct Recorder {
    notices: RefCell<Vec<Notice>>,
    reloads: RefCell<u32>,
}

impl Presenter for Recorder {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn reload(&self) {
        *self.reloads.borrow_mut() += 1;
    }
}

fn texts(recorder: &Recorder) -> Vec<String> {
    recorder.notices.borrow().iter().map(|n| n.text.clone()).collect()
}

#[test]
fn created_outcome_notifies_and_reloads_once() {
    let recorder = Recorder::default();
    present(&recorder, &Outcome::Created { kind: EntityKind::Gang, id: Some(4) });
    assert_eq!(texts(&recorder), ["Gang created successfully!"]);
    assert_eq!(*recorder.reloads.borrow(), 1);
}

#[test]
fn success_texts_use_entity_label() {
    let updated = Outcome::Updated { kind: EntityKind::Case, id: "1".to_owned() }.notice().unwrap();
    assert_eq!(updated.text, "Case updated successfully!");
    assert_eq!(updated.level, NoticeLevel::Success);

    let deleted = Outcome::Deleted { kind: EntityKind::Relationship, id: "2".to_owned() }.notice().unwrap();
    assert_eq!(deleted.text, "Relationship deleted successfully!");
}

#[test]
fn failure_shows_backend_message_without_reload() {
    let recorder = Recorder::default();
    let error = RequestError::Status { status: 400, message: "Name is required".to_owned() };
    present(&recorder, &Outcome::Failed(error));
    assert_eq!(texts(&recorder), ["Error: Name is required"]);
    assert_eq!(recorder.notices.borrow()[0].level, NoticeLevel::Error);
    assert_eq!(*recorder.reloads.borrow(), 0);
}

#[test]
fn aborted_and_busy_are_silent() {
    let recorder = Recorder::default();
    present(&recorder, &Outcome::Aborted);
    present(&recorder, &Outcome::Busy);
    assert!(texts(&recorder).is_empty());
    assert_eq!(*recorder.reloads.borrow(), 0);
}

#[test]
fn notice_ids_are_unique_and_dismissable() {
    let mut state = NoticeState::default();
    let first = Notice::success("one");
    let second = Notice::success("two");
    assert_ne!(first.id, second.id);

    state.push(first.clone());
    state.push(second.clone());
    state.dismiss(&first.id);

    assert_eq!(state.items, vec![second]);
}

#[test]
fn tray_keeps_only_newest_notices() {
    let mut state = NoticeState::default();
    let pushed: Vec<Notice> = (0..MAX_NOTICES + 3).map(|i| Notice::error(format!("failure {i}"))).collect();
    for notice in &pushed {
        state.push(notice.clone());
    }

    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items, pushed[3..]);
    assert_eq!(state.items[0].text, "Error: failure 3");
}
