use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
#[cfg(feature = "web")]
use dioxus_free_icons::icons::fa_solid_icons::{FaTriangleExclamation, FaUsers};
#[cfg(feature = "web")]
use dioxus_free_icons::Icon;

use crate::client::{
    components::{Alert, Page},
    router::Route,
    store::session::SessionState,
};

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Store<SessionState>>();

    let driver_name = session
        .read()
        .driver
        .as_ref()
        .map(|driver| driver.name.clone())
        .unwrap_or_default();

    rsx!(
        Title { "Dashboard | Fraudwatch" }
        Meta {
            name: "description",
            content: "Fraud registry for delivery drivers."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1024px] p-6 flex flex-col gap-4",
                div {
                    h2 { class: "text-2xl", "Dashboard" }
                    p { class: "text-sm opacity-70",
                        "Welcome, {driver_name}! Manage fraudulent customer records and complaints."
                    }
                }
                StatCards { }
            }
        }
    )
}

#[component]
fn StatCards() -> Element {
    let session = use_context::<Store<SessionState>>();
    let mut customer_total = use_signal(|| None::<u64>);
    let mut complaint_total = use_signal(|| None::<u64>);
    let mut error = use_signal(String::new);

    // Both totals come from the first page of each list endpoint.
    #[cfg(feature = "web")]
    {
        let future = use_resource(move || {
            let token = session.read().token.clone().unwrap_or_default();
            async move {
                let customers = crate::client::util::customer::list(
                    &token,
                    &crate::client::util::customer::CustomerQuery {
                        page: 1,
                        ..Default::default()
                    },
                )
                .await?;
                let complaints = crate::client::util::complaint::list(&token).await?;

                Ok::<(u64, u64), String>((customers.total, complaints.total))
            }
        });

        match &*future.read_unchecked() {
            Some(Ok((customers, complaints))) => {
                customer_total.set(Some(*customers));
                complaint_total.set(Some(*complaints));
            }
            Some(Err(message)) => {
                if error().is_empty() {
                    error.set(message.clone());
                }
            }
            None => (),
        }
    }

    rsx!(
        Alert { variant: "alert-error", message: error() }
        div { class: "flex flex-wrap gap-4",
            div { class: "card shadow-sm flex-1 min-w-64",
                div { class: "card-body items-center",
                    {icon_users()}
                    h5 { "Fraudulent customers" }
                    h2 { class: "text-3xl",
                        {customer_total().map(|total| total.to_string()).unwrap_or_else(|| "...".to_string())}
                    }
                    p { class: "text-sm opacity-70",
                        "Customers flagged for fraudulent non-delivery claims."
                    }
                    Link {
                        to: Route::CustomerList {},
                        class: "btn btn-outline w-full",
                        "View customers"
                    }
                }
            }
            div { class: "card shadow-sm flex-1 min-w-64",
                div { class: "card-body items-center",
                    {icon_alert()}
                    h5 { "Complaints" }
                    h2 { class: "text-3xl",
                        {complaint_total().map(|total| total.to_string()).unwrap_or_else(|| "...".to_string())}
                    }
                    p { class: "text-sm opacity-70",
                        "Complaints filed against flagged customers."
                    }
                    Link {
                        to: Route::CustomerCreate {},
                        class: "btn btn-outline w-full",
                        "Report a customer"
                    }
                }
            }
        }
    )
}

fn icon_users() -> Element {
    #[cfg(feature = "web")]
    return rsx!(Icon {
        width: 36,
        height: 36,
        icon: FaUsers
    });

    #[cfg(not(feature = "web"))]
    rsx!()
}

fn icon_alert() -> Element {
    #[cfg(feature = "web")]
    return rsx!(Icon {
        width: 36,
        height: 36,
        icon: FaTriangleExclamation
    });

    #[cfg(not(feature = "web"))]
    rsx!()
}
