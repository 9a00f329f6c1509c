use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::router::{current_route, Route};
use crate::utils::ROUTE_CHANGED_EVENT;

const ROUTE_EVENTS: [&str; 2] = ["popstate", ROUTE_CHANGED_EVENT];

/// Current route, re-read on back/forward and on every programmatic
/// navigation. Always re-renders, even when the route is unchanged.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                for event in ROUTE_EVENTS {
                    if let Err(e) =
                        win.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                    {
                        log::error!("❌ Could not listen to {}: {:?}", event, e);
                    }
                }
            }

            move || {
                if let Some(win) = window {
                    for event in ROUTE_EVENTS {
                        let _ = win.remove_event_listener_with_callback(
                            event,
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
                drop(listener);
            }
        });
    }

    *route
}
