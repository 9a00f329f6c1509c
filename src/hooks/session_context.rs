// ============================================================================
// APP CONTEXT - session store and API client shared by every component
// ============================================================================
// Created once by the provider and read through use_app_context().
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::stores::SessionStore;

#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub api: Rc<ApiClient>,
}

impl AppContext {
    pub fn browser() -> Self {
        let session = SessionStore::browser();
        let api = Rc::new(ApiClient::from_config(session.clone()));
        Self { session, api }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && Rc::ptr_eq(&self.api, &other.api)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let context = use_memo((), |_| AppContext::browser());

    html! {
        <ContextProvider<AppContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    let context = use_context::<AppContext>();
    // Outside a provider: fall back to a browser-backed context built once.
    let fallback = use_memo((), |_| AppContext::browser());
    context.unwrap_or_else(|| (*fallback).clone())
}
