use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::router::{navigate, Route};
use crate::state::LoginState;
use crate::viewmodels::AuthViewModel;

pub struct UseLoginHandle {
    pub state: UseStateHandle<LoginState>,
    pub set_email: Callback<String>,
    pub set_password: Callback<String>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_login() -> UseLoginHandle {
    let context = use_app_context();
    let state = use_state(LoginState::default);

    let set_email = {
        let state = state.clone();
        Callback::from(move |email: String| {
            let mut next = (*state).clone();
            next.email = email;
            state.set(next);
        })
    };

    let set_password = {
        let state = state.clone();
        Callback::from(move |password: String| {
            let mut next = (*state).clone();
            next.password = password;
            state.set(next);
        })
    };

    let submit = {
        let state = state.clone();
        let api = context.api.clone();
        Callback::from(move |_| {
            if state.submitting {
                return;
            }
            let mut current = (*state).clone();
            current.begin_submit();
            state.set(current.clone());

            let state = state.clone();
            let auth = AuthViewModel::new(api.clone());
            wasm_bindgen_futures::spawn_local(async move {
                match auth.login(&current.email, &current.password).await {
                    Ok(_) => {
                        current.finish();
                        current.password.clear();
                        state.set(current);
                        navigate(Route::Dashboard);
                    }
                    Err(e) => {
                        current.fail(e.to_string());
                        state.set(current);
                    }
                }
            });
        })
    };

    UseLoginHandle {
        state,
        set_email,
        set_password,
        submit,
    }
}
