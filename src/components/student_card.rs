use yew::prelude::*;

use crate::models::Student;

#[derive(Properties, PartialEq, Clone)]
pub struct StudentCardProps {
    pub student: Student,
    pub on_edit: Callback<Student>,
    pub on_marks: Callback<Student>,
    pub on_delete: Callback<Student>,
}

#[function_component(StudentCard)]
pub fn student_card(props: &StudentCardProps) -> Html {
    let s = &props.student;

    let action = |cb: &Callback<Student>| {
        let cb = cb.clone();
        let student = s.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(student.clone());
        })
    };

    let marks_class = classes!("student-marks", s.marks.is_none().then_some("no-marks"));

    html! {
        <div class="student-card" data-id={s.id.clone()}>
            <div class="student-header">
                <h3 class="student-name">{&s.name}</h3>
                <span class={marks_class}>{s.marks_label()}</span>
            </div>
            <div class="student-body">
                <div class="detail-row">
                    <span class="detail-label">{"Email"}</span>
                    <span class="detail-value">{&s.email}</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Course"}</span>
                    <span class="detail-value">{&s.course}</span>
                </div>
            </div>
            <div class="student-actions">
                <button class="btn-edit" onclick={action(&props.on_edit)}>{"Edit"}</button>
                <button class="btn-marks" onclick={action(&props.on_marks)}>{"Marks"}</button>
                <button class="btn-delete" onclick={action(&props.on_delete)}>{"Delete"}</button>
            </div>
        </div>
    }
}
