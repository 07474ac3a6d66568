use dioxus::prelude::*;

use crate::client::{
    components::{Guard, Navbar},
    routes::{
        CustomerCreate, CustomerDetail, CustomerList, Dashboard, Login, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/login")]
    Login {},

    #[route("/registro")]
    Register {},

    #[layout(Guard)]

        #[route("/")]
        Dashboard {},

        #[route("/clientes")]
        CustomerList {},

        #[route("/clientes/cadastrar")]
        CustomerCreate {},

        #[route("/clientes/:id")]
        CustomerDetail { id: i32 },

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
