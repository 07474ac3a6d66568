use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
    util::customer::CustomerQuery,
};

#[component]
pub fn CustomerList() -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut postal_code = use_signal(String::new);
    let mut query = use_signal(|| CustomerQuery {
        page: 1,
        ..Default::default()
    });

    let apply = move |evt: FormEvent| {
        evt.prevent_default();

        query.set(CustomerQuery {
            name: name(),
            phone: phone(),
            email: email(),
            postal_code: postal_code(),
            page: 1,
        });
    };

    rsx!(
        Title { "Customers | Fraudwatch" }
        Meta {
            name: "description",
            content: "Fraudulent customer records."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-2xl", "Fraudulent customers" }
                    Link {
                        to: Route::CustomerCreate {},
                        class: "btn btn-primary",
                        "Report customer"
                    }
                }
                form { class: "flex flex-wrap gap-2", onsubmit: apply,
                    input {
                        class: "input input-bordered flex-1 min-w-40",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered flex-1 min-w-40",
                        placeholder: "Phone",
                        value: "{phone}",
                        oninput: move |evt| phone.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered flex-1 min-w-40",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered flex-1 min-w-40",
                        placeholder: "Postal code",
                        value: "{postal_code}",
                        oninput: move |evt| postal_code.set(evt.value()),
                    }
                    button { class: "btn btn-secondary", r#type: "submit", "Search" }
                }
                CustomerTable { query }
            }
        }
    )
}

#[component]
fn CustomerTable(mut query: Signal<CustomerQuery>) -> Element {
    let session = use_context::<Store<SessionState>>();
    let _ = session;

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            let applied = query();
            let token = session.read().token.clone().unwrap_or_default();
            async move { crate::client::util::customer::list(&token, &applied).await }
        });

        return match &*future.read_unchecked() {
            None => rsx!(div { class: "skeleton h-48 w-full" }),
            Some(Err(message)) => rsx!(Alert {
                variant: "alert-error",
                message: message.clone()
            }),
            Some(Ok(page)) => {
                let current = page.page;
                let total_pages = page.total_pages;
                let page_label = format!("Page {} of {}", current, total_pages.max(1));

                rsx!(
                    if page.customers.is_empty() {
                        p { class: "opacity-70", "No customers match the current filters." }
                    } else {
                        div { class: "overflow-x-auto",
                            table { class: "table table-md",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "City" }
                                        th { "Phone" }
                                        th { "Confirmations" }
                                        th { "Reported by" }
                                        th { "Reported on" }
                                    }
                                }
                                tbody {
                                    {page.customers.iter().map(|customer| {
                                        let id = customer.id;
                                        rsx! {
                                            tr { key: "{id}",
                                                td {
                                                    Link {
                                                        to: Route::CustomerDetail { id },
                                                        class: "link",
                                                        "{customer.name}"
                                                    }
                                                }
                                                td { {customer.address.city.clone().unwrap_or_default()} }
                                                td { {customer.phone.clone().unwrap_or_default()} }
                                                td { "{customer.confirmation_count}" }
                                                td { "{customer.created_by.name} ({customer.created_by.company})" }
                                                td { {customer.created_at.format("%d/%m/%Y").to_string()} }
                                            }
                                        }
                                    })}
                                }
                            }
                        }
                        div { class: "join self-center",
                            button {
                                class: "join-item btn",
                                disabled: current <= 1,
                                onclick: move |_| query.write().page = current - 1,
                                "«"
                            }
                            button { class: "join-item btn no-animation",
                                "{page_label}"
                            }
                            button {
                                class: "join-item btn",
                                disabled: current >= total_pages,
                                onclick: move |_| query.write().page = current + 1,
                                "»"
                            }
                        }
                    }
                )
            }
        };
    }

    #[cfg(not(feature = "web"))]
    rsx!(div { class: "skeleton h-48 w-full" })
}
