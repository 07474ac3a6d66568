#![allow(non_snake_case)]

mod client;
mod model;

#[cfg(feature = "server")]
use fraudwatch::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            model::{app::AppState, auth::JwtKeys},
            startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = startup::connect_to_database(&config).await.unwrap();
        let cors = startup::build_cors(&config).unwrap();
        let jwt = JwtKeys::from_secret(&config.jwt_secret);

        tracing::info!("Starting server on port {}", config.port);

        let mut router = dioxus::server::router(client::App);
        let api_routes = server::router::routes()
            .with_state(AppState { db, jwt })
            .layer(cors);
        router = router.merge(api_routes);

        Ok(router)
    })
}
