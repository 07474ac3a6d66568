use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
};
#[cfg(feature = "web")]
use crate::model::customer::{AddressDto, CreateCustomerDto};

#[component]
pub fn CustomerCreate() -> Element {
    let mut name = use_signal(String::new);
    let mut street = use_signal(String::new);
    let mut number = use_signal(String::new);
    let mut complement = use_signal(String::new);
    let mut neighborhood = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut state = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut tax_id = use_signal(String::new);
    let mut fraud_description = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let session = use_context::<Store<SessionState>>();
    let nav = navigator();
    let _ = (session, nav);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        spawn(async move {
            loading.set(true);
            error.set(String::new());

            let optional = |value: String| Some(value).filter(|value| !value.trim().is_empty());

            let payload = CreateCustomerDto {
                name: name(),
                address: AddressDto {
                    street: optional(street()),
                    number: optional(number()),
                    complement: optional(complement()),
                    neighborhood: optional(neighborhood()),
                    city: optional(city()),
                    state: optional(state()),
                    postal_code: optional(postal_code()),
                },
                phone: optional(phone()),
                email: optional(email()),
                tax_id: optional(tax_id()),
                fraud_description: fraud_description(),
            };

            let token = session.read().token.clone().unwrap_or_default();
            match crate::client::util::customer::create(&token, &payload).await {
                Ok(envelope) => {
                    nav.push(Route::CustomerDetail {
                        id: envelope.customer.id,
                    });
                }
                Err(message) => error.set(message),
            }

            loading.set(false);
        });
    };

    rsx!(
        Title { "Report customer | Fraudwatch" }
        Meta {
            name: "description",
            content: "Register a customer suspected of delivery fraud."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[768px] p-6 flex flex-col gap-4",
                h2 { class: "text-2xl", "Report a fraudulent customer" }
                Alert { variant: "alert-error", message: error() }
                form { class: "flex flex-col gap-2", onsubmit: submit,
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Customer name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    div { class: "flex flex-wrap gap-2",
                        input {
                            class: "input input-bordered flex-1 min-w-48",
                            placeholder: "Street",
                            value: "{street}",
                            oninput: move |evt| street.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-24",
                            placeholder: "Number",
                            value: "{number}",
                            oninput: move |evt| number.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            placeholder: "Complement",
                            value: "{complement}",
                            oninput: move |evt| complement.set(evt.value()),
                        }
                    }
                    div { class: "flex flex-wrap gap-2",
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            placeholder: "Neighborhood",
                            value: "{neighborhood}",
                            oninput: move |evt| neighborhood.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            placeholder: "City",
                            value: "{city}",
                            oninput: move |evt| city.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-20",
                            placeholder: "State",
                            value: "{state}",
                            oninput: move |evt| state.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered w-36",
                            placeholder: "Postal code",
                            value: "{postal_code}",
                            oninput: move |evt| postal_code.set(evt.value()),
                        }
                    }
                    div { class: "flex flex-wrap gap-2",
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            r#type: "tel",
                            placeholder: "Phone",
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            r#type: "email",
                            placeholder: "Email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "input input-bordered flex-1 min-w-40",
                            placeholder: "Tax ID",
                            value: "{tax_id}",
                            oninput: move |evt| tax_id.set(evt.value()),
                        }
                    }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        rows: 4,
                        placeholder: "Describe the fraudulent claim",
                        value: "{fraud_description}",
                        oninput: move |evt| fraud_description.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Saving..." } else { "Register customer" }
                    }
                }
            }
        }
    )
}
