use dioxus::prelude::*;

use crate::client::{router::Route, store::session::SessionState};

#[component]
pub fn Navbar() -> Element {
    let mut session = use_context::<Store<SessionState>>();
    let nav = navigator();

    let authenticated = session.read().is_authenticated();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    Link {
                        to: Route::Dashboard {},
                        p { class: "text-xl",
                            "Fraudwatch"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if authenticated {
                    ul { class: "flex items-center gap-2",
                        li {
                            Link {
                                to: Route::CustomerList {},
                                class: "btn btn-ghost",
                                "Customers"
                            }
                        }
                        li {
                            Link {
                                to: Route::CustomerCreate {},
                                class: "btn btn-ghost",
                                "Report customer"
                            }
                        }
                        li {
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| {
                                    session.write().sign_out();
                                    nav.push(Route::Login {});
                                },
                                "Logout"
                            }
                        }
                    }
                } else {
                    ul { class: "flex items-center gap-2",
                        li {
                            Link {
                                to: Route::Login {},
                                class: "btn btn-ghost",
                                "Login"
                            }
                        }
                        li {
                            Link {
                                to: Route::Register {},
                                class: "btn btn-primary",
                                "Sign up"
                            }
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
