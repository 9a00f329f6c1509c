// ============================================================================
// USE ROSTER HOOK - binds RosterViewModel to the component lifecycle
// ============================================================================
// The viewmodel is created once per mount; its state changes force a render.
// On unmount the subscription is dropped and the viewmodel disposed so late
// responses cannot touch it.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_app_context;
use crate::models::{DraftField, Student};
use crate::router::{redirect, Route};
use crate::state::RosterState;
use crate::viewmodels::{AuthViewModel, RosterViewModel, SessionCheck};

#[derive(Clone)]
pub struct UseRosterHandle {
    pub state: RosterState,
    pub open_add: Callback<()>,
    pub open_edit: Callback<Student>,
    pub open_marks: Callback<Student>,
    pub close_modal: Callback<()>,
    pub set_field: Callback<(DraftField, String)>,
    pub set_marks: Callback<String>,
    pub submit: Callback<()>,
    pub delete: Callback<Student>,
}

#[hook]
pub fn use_roster() -> UseRosterHandle {
    let context = use_app_context();
    let view_model = {
        let api = context.api.clone();
        use_memo((), move |_| RosterViewModel::new(api))
    };
    let update = use_force_update();

    {
        let view_model = view_model.clone();
        let api = context.api.clone();
        use_effect_with((), move |_| {
            let subscription = view_model.subscribe(move || update.force_update());

            let vm = (*view_model).clone();
            wasm_bindgen_futures::spawn_local(async move {
                if CONFIG.verify_session_on_entry {
                    let auth = AuthViewModel::new(api);
                    if auth.verify().await == SessionCheck::Rejected {
                        redirect(Route::Login);
                        return;
                    }
                }
                vm.refresh().await;
            });

            move || {
                view_model.unsubscribe(subscription);
                view_model.dispose();
            }
        });
    }

    let vm: Rc<RosterViewModel> = view_model;

    let open_add = {
        let vm = vm.clone();
        Callback::from(move |_| vm.open_add())
    };
    let open_edit = {
        let vm = vm.clone();
        Callback::from(move |student: Student| vm.open_edit(student))
    };
    let open_marks = {
        let vm = vm.clone();
        Callback::from(move |student: Student| vm.open_marks(student))
    };
    let close_modal = {
        let vm = vm.clone();
        Callback::from(move |_| vm.close_modal())
    };
    let set_field = {
        let vm = vm.clone();
        Callback::from(move |(field, value): (DraftField, String)| vm.set_field(field, value))
    };
    let set_marks = {
        let vm = vm.clone();
        Callback::from(move |value: String| vm.set_marks_draft(value))
    };
    let submit = {
        let vm = vm.clone();
        Callback::from(move |_| {
            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move { vm.submit().await });
        })
    };
    let delete = {
        let vm = vm.clone();
        Callback::from(move |student: Student| {
            let vm = (*vm).clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.delete(&student, confirm_delete).await;
            });
        })
    };

    UseRosterHandle {
        state: vm.snapshot(),
        open_add,
        open_edit,
        open_marks,
        close_modal,
        set_field,
        set_marks,
        submit,
        delete,
    }
}

fn confirm_delete(student: &Student) -> bool {
    let message = format!("Delete {} ({})?", student.name, student.email);
    web_sys::window()
        .and_then(|w| w.confirm_with_message(&message).ok())
        .unwrap_or(false)
}
