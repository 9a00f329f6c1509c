use yew::prelude::*;

use crate::hooks::{use_route, AppContextProvider};
use crate::router::Route;

use super::{AuthGate, Dashboard, LoginScreen, Redirect};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppContextProvider>
            <RouteSwitch />
        </AppContextProvider>
    }
}

#[function_component(RouteSwitch)]
fn route_switch() -> Html {
    let route = use_route();
    log::debug!("Rendering route {:?}", route);

    match route {
        Route::Login => html! { <LoginScreen /> },
        Route::Dashboard => html! {
            <AuthGate>
                <Dashboard />
            </AuthGate>
        },
        Route::NotFound => html! { <Redirect to={Route::Login} /> },
    }
}
