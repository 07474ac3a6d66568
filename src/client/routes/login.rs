use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
};

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut session = use_context::<Store<SessionState>>();
    let nav = navigator();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            loading.set(true);
            error.set(String::new());

            match crate::client::util::auth::login(&email(), &password()).await {
                Ok(auth) => {
                    session.write().sign_in(auth.token, auth.driver);
                    nav.push(Route::Dashboard {});
                }
                Err(message) => error.set(message),
            }

            loading.set(false);
        });
    };

    rsx!(
        Title { "Login | Fraudwatch" }
        Meta {
            name: "description",
            content: "Fraud registry for delivery drivers."
        }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title", "Login" }
                    Alert { variant: "alert-error", message: error() }
                    form { class: "flex flex-col gap-2", onsubmit: submit,
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                    p { class: "text-sm text-center",
                        "No account yet? "
                        Link { to: Route::Register {}, class: "link", "Sign up" }
                    }
                }
            }
        }
    )
}
