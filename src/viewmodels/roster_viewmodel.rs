// ============================================================================
// ROSTER VIEWMODEL - drives RosterState around the student API calls
// ============================================================================
// Every successful mutation is followed by a full re-fetch. Results arriving
// after the view has been disposed are dropped.
// ============================================================================

use std::rc::Rc;

use crate::models::student::parse_required_marks;
use crate::models::{DraftField, Student};
use crate::services::{ApiClient, FetchTransport, Transport};
use crate::state::{ReactiveState, RosterState, Submission, SubscriptionId};
use crate::utils::Lifetime;

pub struct RosterViewModel<T: Transport = FetchTransport> {
    api: Rc<ApiClient<T>>,
    state: Rc<ReactiveState<RosterState>>,
    lifetime: Lifetime,
}

impl<T: Transport> Clone for RosterViewModel<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            lifetime: self.lifetime.clone(),
        }
    }
}

impl<T: Transport> RosterViewModel<T> {
    pub fn new(api: Rc<ApiClient<T>>) -> Self {
        Self {
            api,
            state: Rc::new(ReactiveState::new(RosterState::default())),
            lifetime: Lifetime::new(),
        }
    }

    pub fn snapshot(&self) -> RosterState {
        self.state.snapshot()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    /// Ends the view's lifetime; in-flight calls finish but change nothing.
    pub fn dispose(&self) {
        log::debug!("Roster view disposed");
        self.lifetime.dispose();
    }

    pub fn open_add(&self) {
        self.state.update(RosterState::open_add);
    }

    pub fn open_edit(&self, student: Student) {
        self.state.update(|s| s.open_edit(student));
    }

    pub fn open_marks(&self, student: Student) {
        self.state.update(|s| s.open_marks(student));
    }

    pub fn close_modal(&self) {
        self.state.update(RosterState::close_modal);
    }

    pub fn set_field(&self, field: DraftField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    pub fn set_marks_draft(&self, value: String) {
        self.state.update(|s| s.set_marks_draft(value));
    }

    /// Fetches the full list and replaces the roster if this is still the
    /// newest fetch.
    pub async fn refresh(&self) {
        let ticket = self.state.update(RosterState::begin_refresh);
        let result = self.api.list_students().await;
        if self.is_disposed() {
            return;
        }
        self.state.update(|s| s.finish_refresh(ticket, result));
    }

    /// Submits the open add/edit/marks modal. On success the roster is
    /// re-fetched and the modal closed; on failure the modal and its draft
    /// stay as they are.
    pub async fn submit(&self) {
        let Some(submission) = self.state.read(RosterState::submission) else {
            return;
        };
        let generation = self.state.read(RosterState::modal_generation);

        let result = match &submission {
            Submission::Create(draft) => self.api.create_student(draft).await.map(drop),
            Submission::Update { id, draft } => self.api.update_student(id, draft).await.map(drop),
            Submission::PatchMarks { id, marks } => match parse_required_marks(marks) {
                Ok(marks) => self.api.patch_marks(id, marks).await.map(drop),
                Err(e) => Err(e),
            },
        };
        if self.is_disposed() {
            return;
        }

        match result {
            Ok(()) => {
                self.refresh().await;
                if self.is_disposed() {
                    return;
                }
                // The admin may have closed this modal and opened another,
                // possibly the same kind, while the request was in flight.
                self.state.update(|s| {
                    if s.modal_generation() == generation {
                        s.close_modal();
                    }
                });
            }
            Err(e) => self.state.update(|s| s.fail(&e)),
        }
    }

    /// Deletes `student` by email once `confirm` agrees. Declining is a no-op.
    pub async fn delete(&self, student: &Student, confirm: impl FnOnce(&Student) -> bool) {
        if !confirm(student) {
            log::info!("Delete of {} cancelled", student.email);
            return;
        }
        let result = self.api.delete_student(&student.email).await;
        if self.is_disposed() {
            return;
        }
        match result {
            Ok(()) => self.refresh().await,
            Err(e) => self.state.update(|s| s.fail(&e)),
        }
    }

    fn is_disposed(&self) -> bool {
        if self.lifetime.is_disposed() {
            log::warn!("⚠️ Roster view gone, dropping response");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentDraft;
    use crate::services::transport::testing::ScriptedTransport;
    use crate::services::HttpMethod;
    use crate::state::UiMode;
    use crate::stores::SessionStore;
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn view_model() -> (RosterViewModel<ScriptedTransport>, ScriptedTransport) {
        let transport = ScriptedTransport::new();
        let session = SessionStore::new(Rc::new(MemoryStorage::new()));
        let api = Rc::new(ApiClient::new("http://api.test", transport.clone(), session));
        (RosterViewModel::new(api), transport)
    }

    fn student_json(id: &str, marks: &str) -> String {
        format!(
            r#"{{"id":"{id}","name":"Student {id}","email":"{id}@school.test","course":"Physics","marks":{marks}}}"#
        )
    }

    fn list_json(students: &[(&str, &str)]) -> String {
        let items: Vec<String> = students.iter().map(|(id, m)| student_json(id, m)).collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn refresh_loads_roster() {
        let (vm, transport) = view_model();
        transport.reply(200, &list_json(&[("a", "null"), ("b", "70")]));

        block_on(vm.refresh());
        let state = vm.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.students.len(), 2);
    }

    #[test]
    fn empty_roster_is_reported_empty() {
        let (vm, transport) = view_model();
        transport.reply(200, "[]");
        block_on(vm.refresh());
        assert!(vm.snapshot().is_empty());
    }

    #[test]
    fn failed_refresh_sets_error_and_keeps_stale_roster() {
        let (vm, transport) = view_model();
        transport.reply(200, &list_json(&[("a", "null")])).fail("offline");

        block_on(vm.refresh());
        block_on(vm.refresh());
        let state = vm.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch students"));
        assert_eq!(state.students[0].id, "a");
    }

    #[test]
    fn successful_add_refreshes_and_closes_modal() {
        let (vm, transport) = view_model();
        transport
            .reply(200, &student_json("new", "null"))
            .reply(200, &list_json(&[("new", "null")]));

        vm.open_add();
        vm.set_field(DraftField::Name, "Student new".into());
        block_on(vm.submit());

        let sent = transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[1].method, HttpMethod::Get);

        let state = vm.snapshot();
        assert_eq!(state.mode(), UiMode::None);
        assert_eq!(state.draft, StudentDraft::default());
        assert_eq!(state.students[0].id, "new");
    }

    #[test]
    fn failed_edit_keeps_modal_and_draft() {
        let (vm, transport) = view_model();
        transport.reply(500, "");
        let target = Student {
            id: "a".into(),
            name: "Old".into(),
            email: "a@school.test".into(),
            course: "Physics".into(),
            marks: None,
        };

        vm.open_edit(target.clone());
        vm.set_field(DraftField::Name, "New".into());
        block_on(vm.submit());

        let state = vm.snapshot();
        assert_eq!(state.error.as_deref(), Some("Failed to update student"));
        assert_eq!(state.mode(), UiMode::Edit);
        assert_eq!(state.target(), Some(&target));
        assert_eq!(state.draft.name, "New");
        assert_eq!(transport.sent().len(), 1);
    }

    #[test]
    fn marks_round_trip_displays_percentage() {
        let (vm, transport) = view_model();
        transport
            .reply(200, &list_json(&[("a", "null")]))
            .reply(200, &student_json("a", "87.5"))
            .reply(200, &list_json(&[("a", "87.5")]));

        block_on(vm.refresh());
        let target = vm.snapshot().students[0].clone();
        vm.open_marks(target);
        vm.set_marks_draft("87.5".into());
        block_on(vm.submit());

        let patch = &transport.sent()[1];
        assert_eq!(patch.method, HttpMethod::Patch);
        let body: serde_json::Value = serde_json::from_str(patch.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["marks"], serde_json::json!(87.5));

        let state = vm.snapshot();
        assert_eq!(state.mode(), UiMode::None);
        assert_eq!(state.students[0].marks_label(), "87.5%");
    }

    #[test]
    fn invalid_marks_text_is_rejected_locally() {
        let (vm, transport) = view_model();
        vm.open_marks(Student {
            id: "a".into(),
            name: "A".into(),
            email: "a@school.test".into(),
            course: "Physics".into(),
            marks: None,
        });
        vm.set_marks_draft("abc".into());
        block_on(vm.submit());

        assert!(transport.sent().is_empty());
        let state = vm.snapshot();
        assert_eq!(state.error.as_deref(), Some("Marks must be a number"));
        assert_eq!(state.mode(), UiMode::Marks);
    }

    #[test]
    fn delete_without_confirmation_sends_nothing() {
        let (vm, transport) = view_model();
        transport.reply(200, &list_json(&[("a", "null")]));
        block_on(vm.refresh());
        let before = vm.snapshot();

        block_on(vm.delete(&before.students[0], |_| false));
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(vm.snapshot(), before);
    }

    #[test]
    fn confirmed_delete_uses_email_then_refreshes() {
        let (vm, transport) = view_model();
        transport
            .reply(200, &list_json(&[("a", "null"), ("b", "null")]))
            .reply(204, "")
            .reply(200, &list_json(&[("b", "null")]));
        block_on(vm.refresh());

        let victim = vm.snapshot().students[0].clone();
        let asked = Cell::new(false);
        block_on(vm.delete(&victim, |s| {
            asked.set(true);
            s.id == "a"
        }));

        assert!(asked.get());
        let sent = transport.sent();
        assert_eq!(sent[1].method, HttpMethod::Delete);
        assert_eq!(sent[1].url, "http://api.test/students/email/a@school.test");
        let ids: Vec<_> = vm.snapshot().students.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["b"]);
    }

    #[test]
    fn failed_delete_leaves_roster_unchanged() {
        let (vm, transport) = view_model();
        transport.reply(200, &list_json(&[("a", "null")])).reply(404, "");
        block_on(vm.refresh());

        let victim = vm.snapshot().students[0].clone();
        block_on(vm.delete(&victim, |_| true));
        let state = vm.snapshot();
        assert_eq!(state.error.as_deref(), Some("Failed to delete student"));
        assert_eq!(state.students.len(), 1);
        assert_eq!(transport.sent().len(), 2);
    }

    #[test]
    fn roster_matches_last_successful_fetch_across_mutations() {
        let (vm, transport) = view_model();
        transport
            .reply(200, &list_json(&[("a", "null"), ("b", "null")]))
            .reply(200, &student_json("c", "null"))
            .reply(200, &list_json(&[("a", "null"), ("b", "null"), ("c", "null")]))
            .reply(204, "")
            .reply(200, &list_json(&[("b", "null"), ("c", "null")]));

        block_on(vm.refresh());
        vm.open_add();
        block_on(vm.submit());
        let first = vm.snapshot().students[0].clone();
        block_on(vm.delete(&first, |_| true));

        let ids: Vec<_> = vm.snapshot().students.into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn closing_modal_clears_even_with_error_present() {
        let (vm, transport) = view_model();
        transport.reply(500, "");
        vm.open_add();
        block_on(vm.submit());
        assert!(vm.snapshot().error.is_some());
        vm.close_modal();
        vm.close_modal();
        let state = vm.snapshot();
        assert_eq!(state.mode(), UiMode::None);
        assert_eq!(state.target(), None);
    }

    #[test]
    fn disposal_during_fetch_drops_the_response() {
        let (vm, transport) = view_model();
        transport.reply(200, &list_json(&[("a", "null")]));
        let disposer = vm.clone();
        transport.on_send(move || disposer.dispose());

        block_on(vm.refresh());
        let state = vm.snapshot();
        assert!(state.students.is_empty());
        // begin_refresh ran before the view went away
        assert!(state.loading);
    }

    #[test]
    fn modal_reopened_during_submit_survives_completion() {
        let (vm, transport) = view_model();
        transport
            .reply(200, &student_json("first", "null"))
            .reply(200, &list_json(&[("first", "null")]));

        vm.open_add();
        vm.set_field(DraftField::Name, "first".into());

        let admin = vm.clone();
        let fired = Cell::new(false);
        transport.on_send(move || {
            if !fired.replace(true) {
                admin.close_modal();
                admin.open_add();
                admin.set_field(DraftField::Name, "second, still typing".into());
            }
        });
        block_on(vm.submit());

        let state = vm.snapshot();
        assert_eq!(state.mode(), UiMode::Add);
        assert_eq!(state.draft.name, "second, still typing");
        assert_eq!(state.students[0].id, "first");
    }

    #[test]
    fn disposal_during_submit_leaves_modal_alone() {
        let (vm, transport) = view_model();
        transport.reply(500, "");
        vm.open_add();
        let disposer = vm.clone();
        transport.on_send(move || disposer.dispose());

        block_on(vm.submit());
        let state = vm.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.mode(), UiMode::Add);
    }

    #[test]
    fn updates_notify_subscribers() {
        let (vm, transport) = view_model();
        transport.reply(200, "[]");
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        let id = vm.subscribe(move || counter.set(counter.get() + 1));

        block_on(vm.refresh());
        assert_eq!(renders.get(), 2);

        vm.unsubscribe(id);
        vm.open_add();
        assert_eq!(renders.get(), 2);
    }
}
