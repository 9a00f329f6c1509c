use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::models::Student;

#[derive(Properties, PartialEq)]
pub struct MarksModalProps {
    pub student: Student,
    pub marks: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(MarksModal)]
pub fn marks_modal(props: &MarksModalProps) -> Html {
    let on_input = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            cb.emit(e.target_unchecked_into::<HtmlInputElement>().value());
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

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{format!("Update marks: {}", props.student.name)}</h2>
                    <button type="button" class="btn-close" onclick={close.clone()}>{"✕"}</button>
                </div>

                <form class="modal-body" onsubmit={on_submit}>
                    <p class="current-marks">{format!("Current: {}", props.student.marks_label())}</p>
                    <div class="form-group">
                        <label for="marks-value">{"New marks"}</label>
                        <input id="marks-value" type="number" min="0" max="100" step="0.01" required=true
                            value={props.marks.clone()} oninput={on_input} />
                    </div>

                    <div class="modal-footer">
                        <button type="button" class="btn-secondary" onclick={close}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary">{"Update Marks"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
