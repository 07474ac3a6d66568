use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
};
#[cfg(feature = "web")]
use crate::model::driver::RegisterDriverDto;

#[component]
pub fn Register() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut session = use_context::<Store<SessionState>>();
    let nav = navigator();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        if password() != confirm_password() {
            error.set("Passwords do not match".to_string());
            return;
        }
        if password().len() < 6 {
            error.set("Password must be at least 6 characters".to_string());
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            loading.set(true);
            error.set(String::new());

            let payload = RegisterDriverDto {
                name: name(),
                email: email(),
                password: password(),
                company: company(),
                phone: Some(phone()).filter(|phone| !phone.trim().is_empty()),
            };

            match crate::client::util::auth::register(&payload).await {
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
        Title { "Sign up | Fraudwatch" }
        Meta {
            name: "description",
            content: "Create a driver account on the fraud registry."
        }
        Page { class: "flex justify-center",
            div { class: "card shadow-sm w-full max-w-96",
                div { class: "card-body",
                    h2 { class: "card-title", "Create account" }
                    Alert { variant: "alert-error", message: error() }
                    form { class: "flex flex-col gap-2", onsubmit: submit,
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Full name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            placeholder: "Delivery company",
                            value: "{company}",
                            oninput: move |evt| company.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "tel",
                            placeholder: "Phone (optional)",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-full",
                            r#type: "password",
                            placeholder: "Confirm password",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Sign up" }
                        }
                    }
                    p { class: "text-sm text-center",
                        "Already registered? "
                        Link { to: Route::Login {}, class: "link", "Login" }
                    }
                }
            }
        }
    )
}
