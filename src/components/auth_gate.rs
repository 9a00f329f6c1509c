use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::router::{gate, redirect, GateDecision, Route};

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub children: Children,
}

/// Renders its children only while a session token is stored. The check runs
/// on every render, so a cleared session locks the next navigation out.
#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let context = use_app_context();

    match gate(&context.session) {
        GateDecision::Allow(_) => html! { <>{props.children.clone()}</> },
        GateDecision::Deny => html! { <Redirect to={Route::Login} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RedirectProps {
    pub to: Route,
}

/// Replaces the current history entry with `to` once mounted.
#[function_component(Redirect)]
pub fn redirect_to(props: &RedirectProps) -> Html {
    let to = props.to;
    use_effect_with(to, move |to| {
        redirect(*to);
        || ()
    });
    html! {}
}
