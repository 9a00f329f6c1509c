// ============================================================================
// DASHBOARD - roster grid, warning banner and the add/edit/marks modals
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_app_context, use_roster};
use crate::router::{navigate, Route};
use crate::state::{Modal, RosterBody};
use crate::viewmodels::AuthViewModel;

use super::{MarksModal, StudentCard, StudentModal};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let context = use_app_context();
    let roster = use_roster();
    let state = &roster.state;

    let admin_name = context
        .session
        .read()
        .map(|s| s.admin_name)
        .unwrap_or_default();

    let on_logout = {
        let api = context.api.clone();
        Callback::from(move |_: MouseEvent| {
            AuthViewModel::new(api.clone()).logout();
            navigate(Route::Login);
        })
    };

    let body = match state.body() {
        RosterBody::Loading => html! {
            <div class="loading">
                <div class="loader"></div>
                <p>{"Loading students..."}</p>
            </div>
        },
        RosterBody::Empty => html! {
            <div class="empty-state">
                <p>{"No students found"}</p>
            </div>
        },
        RosterBody::Grid => html! {
            <div class="student-grid">
                {for state.students.iter().map(|student| html! {
                    <StudentCard
                        key={student.id.clone()}
                        student={student.clone()}
                        on_edit={roster.open_edit.clone()}
                        on_marks={roster.open_marks.clone()}
                        on_delete={roster.delete.clone()}
                    />
                })}
            </div>
        },
    };

    let modal = match &state.modal {
        Modal::None => html! {},
        Modal::Add | Modal::Edit(_) => {
            let (title, label) = if matches!(state.modal, Modal::Add) {
                ("Add Student", "Add")
            } else {
                ("Edit Student", "Save")
            };
            html! {
                <StudentModal
                    title={title}
                    submit_label={label}
                    draft={state.draft.clone()}
                    on_change={roster.set_field.clone()}
                    on_submit={roster.submit.clone()}
                    on_close={roster.close_modal.clone()}
                />
            }
        }
        Modal::Marks(student) => html! {
            <MarksModal
                student={student.clone()}
                marks={state.marks_draft.clone()}
                on_change={roster.set_marks.clone()}
                on_submit={roster.submit.clone()}
                on_close={roster.close_modal.clone()}
            />
        },
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{"Student Management"}</h1>
                    <p class="welcome">{format!("Welcome, {}", admin_name)}</p>
                </div>
                <div class="header-actions">
                    <button class="btn-primary" onclick={roster.open_add.reform(|_: MouseEvent| ())}>
                        {"+ Add Student"}
                    </button>
                    <button class="btn-secondary" onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>

            {if let Some(error) = &state.error {
                html! { <div class="warning-banner">{format!("⚠ {}", error)}</div> }
            } else {
                html! {}
            }}

            <p class="roster-summary">{format!("{} students", state.students.len())}</p>
            {body}
            {modal}
        </div>
    }
}
