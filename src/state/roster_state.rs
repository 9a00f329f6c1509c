// ============================================================================
// ROSTER STATE - list, loading/error flags and modal state of the roster view
// ============================================================================
// Pure transitions only. The controller in viewmodels drives them around the
// network calls.
// ============================================================================

use crate::models::{DraftField, Student, StudentDraft};
use crate::services::ApiError;

/// Which modal is open. Edit and marks always carry the targeted student.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    None,
    Add,
    Edit(Student),
    Marks(Student),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiMode {
    None,
    Add,
    Edit,
    Marks,
}

/// Identifies one roster fetch. Only the most recently issued ticket may
/// replace the roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Request derived from the open modal and its draft.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(StudentDraft),
    Update { id: String, draft: StudentDraft },
    PatchMarks { id: String, marks: String },
}

/// What the main area of the roster view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterBody {
    /// First load, nothing to show yet.
    Loading,
    Empty,
    Grid,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: Modal,
    pub draft: StudentDraft,
    /// Text of the dedicated marks field, separate from `draft.marks`.
    pub marks_draft: String,
    latest_refresh: u64,
    modal_generation: u64,
}

impl RosterState {
    pub fn mode(&self) -> UiMode {
        match self.modal {
            Modal::None => UiMode::None,
            Modal::Add => UiMode::Add,
            Modal::Edit(_) => UiMode::Edit,
            Modal::Marks(_) => UiMode::Marks,
        }
    }

    pub fn target(&self) -> Option<&Student> {
        match &self.modal {
            Modal::Edit(student) | Modal::Marks(student) => Some(student),
            Modal::None | Modal::Add => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// A refresh over an existing roster keeps the grid on screen.
    pub fn body(&self) -> RosterBody {
        match (self.students.is_empty(), self.loading) {
            (false, _) => RosterBody::Grid,
            (true, true) => RosterBody::Loading,
            (true, false) => RosterBody::Empty,
        }
    }

    /// Changes each time a modal is opened or an open one is closed, so two
    /// openings of the same modal are still told apart.
    pub fn modal_generation(&self) -> u64 {
        self.modal_generation
    }

    pub fn open_add(&mut self) {
        self.modal_generation += 1;
        self.modal = Modal::Add;
        self.draft = StudentDraft::default();
        self.marks_draft.clear();
    }

    pub fn open_edit(&mut self, student: Student) {
        self.modal_generation += 1;
        self.draft = StudentDraft::from_student(&student);
        self.marks_draft.clear();
        self.modal = Modal::Edit(student);
    }

    pub fn open_marks(&mut self, student: Student) {
        self.modal_generation += 1;
        self.draft = StudentDraft::from_student(&student);
        self.marks_draft = self.draft.marks.clone();
        self.modal = Modal::Marks(student);
    }

    /// Idempotent; leaves no target and no draft behind.
    pub fn close_modal(&mut self) {
        if self.modal != Modal::None {
            self.modal_generation += 1;
        }
        self.modal = Modal::None;
        self.draft = StudentDraft::default();
        self.marks_draft.clear();
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn set_marks_draft(&mut self, value: String) {
        self.marks_draft = value;
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_refresh += 1;
        self.loading = true;
        RefreshTicket(self.latest_refresh)
    }

    /// Applies a fetch result unless a newer fetch was issued meanwhile.
    /// On failure the previous roster stays visible.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Student>, ApiError>,
    ) -> bool {
        if ticket.0 != self.latest_refresh {
            log::debug!(
                "Discarding stale roster response #{} (latest #{})",
                ticket.0,
                self.latest_refresh
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(students) => {
                self.students = students;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn fail(&mut self, error: &ApiError) {
        self.error = Some(error.to_string());
    }

    pub fn submission(&self) -> Option<Submission> {
        match &self.modal {
            Modal::None => None,
            Modal::Add => Some(Submission::Create(self.draft.clone())),
            Modal::Edit(student) => Some(Submission::Update {
                id: student.id.clone(),
                draft: self.draft.clone(),
            }),
            Modal::Marks(student) => Some(Submission::PatchMarks {
                id: student.id.clone(),
                marks: self.marks_draft.clone(),
            }),
        }
    }
}
