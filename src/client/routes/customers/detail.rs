use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
};
#[cfg(feature = "web")]
use crate::model::customer::CustomerDto;

#[component]
pub fn CustomerDetail(id: i32) -> Element {
    rsx!(
        Title { "Customer | Fraudwatch" }
        Meta {
            name: "description",
            content: "Fraudulent customer record."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h2 { class: "text-2xl", "Customer record" }
                    Link {
                        to: Route::CustomerList {},
                        class: "btn btn-ghost",
                        "Back to list"
                    }
                }
                CustomerCard { id }
            }
        }
    )
}

#[component]
fn CustomerCard(id: i32) -> Element {
    let session = use_context::<Store<SessionState>>();
    let _ = session;
    let mut error = use_signal(String::new);
    let mut success = use_signal(String::new);
    let mut confirming = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);
    let _ = (error, success, confirming, refresh);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            let _tick = refresh();
            let token = session.read().token.clone().unwrap_or_default();
            async move { crate::client::util::customer::get(&token, id).await }
        });

        let confirm = move |_| {
            let token = session.read().token.clone().unwrap_or_default();

            spawn(async move {
                confirming.set(true);
                error.set(String::new());
                success.set(String::new());

                match crate::client::util::customer::confirm(&token, id).await {
                    Ok(envelope) => {
                        success.set(
                            envelope
                                .message
                                .unwrap_or_else(|| "Customer confirmed successfully".to_string()),
                        );
                        refresh += 1;
                    }
                    Err(message) => error.set(message),
                }

                confirming.set(false);
            });
        };

        return match &*future.read_unchecked() {
            None => rsx!(div { class: "skeleton h-64 w-full" }),
            Some(Err(message)) => rsx!(Alert {
                variant: "alert-error",
                message: message.clone()
            }),
            Some(Ok(envelope)) => {
                let customer = envelope.customer.clone();
                let confirmation_heading =
                    format!("Confirmations ({})", customer.confirmations.len());

                rsx!(
                    Alert { variant: "alert-error", message: error() }
                    Alert { variant: "alert-success", message: success() }
                    div { class: "card shadow-sm",
                        div { class: "card-body flex flex-col gap-4",
                            div {
                                h3 { class: "card-title", "{customer.name}" }
                                p { class: "text-sm opacity-70",
                                    "Reported by {customer.created_by.name} ({customer.created_by.company}) on "
                                    {customer.created_at.format("%d/%m/%Y").to_string()}
                                }
                            }
                            div {
                                h4 { class: "font-semibold", "Fraud description" }
                                p { "{customer.fraud_description}" }
                            }
                            {address_section(&customer)}
                            {contact_section(&customer)}
                            div {
                                h4 { class: "font-semibold", "{confirmation_heading}" }
                                div { class: "overflow-x-auto",
                                    table { class: "table table-sm",
                                        thead {
                                            tr {
                                                th { "Driver" }
                                                th { "Company" }
                                                th { "Date" }
                                            }
                                        }
                                        tbody {
                                            {customer.confirmations.iter().map(|confirmation| rsx! {
                                                tr {
                                                    td { "{confirmation.driver.name}" }
                                                    td { "{confirmation.driver.company}" }
                                                    td { {confirmation.confirmed_at.format("%d/%m/%Y").to_string()} }
                                                }
                                            })}
                                        }
                                    }
                                }
                            }
                            div { class: "card-actions",
                                button {
                                    class: "btn btn-primary",
                                    disabled: confirming(),
                                    onclick: confirm,
                                    if confirming() { "Confirming..." } else { "Confirm this record" }
                                }
                            }
                        }
                    }
                )
            }
        };
    }

    #[cfg(not(feature = "web"))]
    rsx!(div { class: "skeleton h-64 w-full" })
}

#[cfg(feature = "web")]
fn address_section(customer: &CustomerDto) -> Element {
    let address = &customer.address;
    let line = [
        address.street.clone(),
        address.number.clone(),
        address.complement.clone(),
        address.neighborhood.clone(),
        address.city.clone(),
        address.state.clone(),
        address.postal_code.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ");

    if line.is_empty() {
        return rsx!();
    }

    rsx!(
        div {
            h4 { class: "font-semibold", "Address" }
            p { "{line}" }
        }
    )
}

#[cfg(feature = "web")]
fn contact_section(customer: &CustomerDto) -> Element {
    let mut parts = Vec::new();
    if let Some(phone) = &customer.phone {
        parts.push(format!("Phone: {}", phone));
    }
    if let Some(email) = &customer.email {
        parts.push(format!("Email: {}", email));
    }
    if let Some(tax_id) = &customer.tax_id {
        parts.push(format!("Tax ID: {}", tax_id));
    }

    if parts.is_empty() {
        return rsx!();
    }

    rsx!(
        div {
            h4 { class: "font-semibold", "Contact" }
            p { {parts.join(" | ")} }
        }
    )
}
