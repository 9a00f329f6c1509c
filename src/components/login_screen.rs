use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::hooks::{use_app_context, use_login};
use crate::router::{gate, GateDecision, Route};

use super::Redirect;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let context = use_app_context();
    let login = use_login();

    // Already signed in: skip the form.
    if let GateDecision::Allow(_) = gate(&context.session) {
        if !login.state.submitting {
            return html! { <Redirect to={Route::Dashboard} /> };
        }
    }

    let on_email = {
        let set_email = login.set_email.clone();
        Callback::from(move |e: InputEvent| {
            set_email.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_password = {
        let set_password = login.set_password.clone();
        Callback::from(move |e: InputEvent| {
            set_password.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let submit = login.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let state = &*login.state;

    html! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>{"ADMIN LOGIN"}</h1>
                    <p>{"Student Management Portal"}</p>
                </div>

                {if let Some(error) = &state.error {
                    html! {
                        <div class="error-box">
                            <p>{format!("⚠ {}", error)}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email Address"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            value={state.email.clone()}
                            oninput={on_email}
                            required=true
                            disabled={state.submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            value={state.password.clone()}
                            oninput={on_password}
                            required=true
                            disabled={state.submitting}
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={state.submitting}>
                        {if state.submitting { "Logging in..." } else { "LOGIN" }}
                    </button>
                </form>

                <div class="login-footer">
                    <p>{"Secure access to student management system"}</p>
                </div>
            </div>
        </div>
    }
}
