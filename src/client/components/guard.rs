use dioxus::prelude::*;

use crate::client::{router::Route, store::session::SessionState};

/// Layout wrapping every private page. Shows nothing while the initial
/// session hydration is pending and redirects to the login page when no
/// driver is signed in.
#[component]
pub fn Guard() -> Element {
    let session = use_context::<Store<SessionState>>();
    let nav = navigator();

    let state = session.read();

    if !state.loaded {
        return rsx!();
    }

    if !state.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx!();
    }

    rsx!(Outlet::<Route> {})
}
