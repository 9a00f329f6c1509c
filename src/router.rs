// ============================================================================
// ROUTER - path <-> Route, history navigation and the auth gate decision
// ============================================================================

use wasm_bindgen::JsValue;

use crate::models::Session;
use crate::stores::SessionStore;
use crate::utils::ROUTE_CHANGED_EVENT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Login,
    /// `/dashboard`, protected
    Dashboard,
    /// Anything else; redirected to `/`
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Login,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login | Route::NotFound => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow(Session),
    Deny,
}

/// Evaluated on every protected render; never cached.
pub fn gate(session: &SessionStore) -> GateDecision {
    match session.read() {
        Some(session) => GateDecision::Allow(session),
        None => {
            log::info!("🔒 No session, redirecting to login");
            GateDecision::Deny
        }
    }
}

pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path)
}

/// Pushes a history entry for `route`.
pub fn navigate(route: Route) {
    change_history(route, false);
}

/// Replaces the current history entry, used for redirects.
pub fn redirect(route: Route) {
    change_history(route, true);
}

fn change_history(route: Route, replace: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(e) => {
            log::error!("❌ History API unavailable: {:?}", e);
            return;
        }
    };

    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
    };
    if let Err(e) = result {
        log::error!("❌ Navigation to {} failed: {:?}", route.path(), e);
        return;
    }

    // pushState/replaceState do not fire popstate; tell the listeners ourselves
    match web_sys::Event::new(ROUTE_CHANGED_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::error!("❌ Could not signal route change: {:?}", e),
    }
}
