// ============================================================================
// STUDENT MODAL - add / edit form over the shared draft
// ============================================================================

use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::{DraftField, StudentDraft};

#[derive(Properties, PartialEq)]
pub struct StudentModalProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub draft: StudentDraft,
    pub on_change: Callback<(DraftField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(StudentModal)]
pub fn student_modal(props: &StudentModalProps) -> Html {
    let field = |field: DraftField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            on_change.emit((field, e.target_unchecked_into::<HtmlInputElement>().value()));
        })
    };

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let close = props.on_close.reform(|_: MouseEvent| ());
    let draft = &props.draft;

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{props.title.clone()}</h2>
                    <button type="button" class="btn-close" onclick={close.clone()}>{"✕"}</button>
                </div>

                <form class="modal-body" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="student-name">{"Name"}</label>
                        <input id="student-name" type="text" required=true
                            value={draft.name.clone()} oninput={field(DraftField::Name)} />
                    </div>
                    <div class="form-group">
                        <label for="student-email">{"Email"}</label>
                        <input id="student-email" type="email" required=true
                            value={draft.email.clone()} oninput={field(DraftField::Email)} />
                    </div>
                    <div class="form-group">
                        <label for="student-course">{"Course"}</label>
                        <input id="student-course" type="text" required=true
                            value={draft.course.clone()} oninput={field(DraftField::Course)} />
                    </div>
                    <div class="form-group">
                        <label for="student-marks">{"Marks"}</label>
                        <input id="student-marks" type="number" min="0" max="100" step="0.01"
                            placeholder="Optional"
                            value={draft.marks.clone()} oninput={field(DraftField::Marks)} />
                    </div>

                    <div class="modal-footer">
                        <button type="button" class="btn-secondary" onclick={close}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary">{props.submit_label.clone()}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
