use dioxus::prelude::*;

use crate::client::{router::Route, store::session::SessionState};

/// Application root: provides the session store (hydrated once from browser
/// storage) and mounts the router.
#[component]
pub fn App() -> Element {
    let session = use_store(SessionState::load);
    use_context_provider(|| session);

    rsx!(Router::<Route> {})
}
