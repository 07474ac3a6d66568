//! HTTP routing and OpenAPI documentation configuration.
//!
//! All REST endpoints are registered here with their utoipa specifications;
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with every endpoint and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/drivers/registro` - Register a driver, returns a token
/// - `POST /api/drivers/login` - Authenticate, returns a token
/// - `GET /api/drivers/perfil` - Logged-in driver's profile
/// - `POST /api/clientes` - Register a fraudulent customer
/// - `GET /api/clientes` - Filtered, paginated customer list
/// - `GET /api/clientes/{id}` - Customer detail with resolved references
/// - `POST /api/clientes/{id}/confirmar` - Append a confirmation
/// - `POST /api/reclamacoes` - File a complaint
/// - `GET /api/reclamacoes` - Filtered, paginated complaint list
/// - `GET /api/reclamacoes/{id}` - Complaint detail
/// - `PUT /api/reclamacoes/{id}/status` - Update the status enum
///
/// The OpenAPI document is available at `/api/docs/openapi.json` and rendered
/// interactively at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fraudwatch", description = "Fraudwatch API"), tags(
        (name = controller::driver::DRIVER_TAG, description = "Driver registration, login, and profile"),
        (name = controller::customer::CUSTOMER_TAG, description = "Fraudulent customer registry"),
        (name = controller::complaint::COMPLAINT_TAG, description = "Complaint filing and tracking"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::driver::register))
        .routes(routes!(controller::driver::login))
        .routes(routes!(controller::driver::profile))
        .routes(routes!(
            controller::customer::create_customer,
            controller::customer::list_customers
        ))
        .routes(routes!(controller::customer::get_customer))
        .routes(routes!(controller::customer::confirm_customer))
        .routes(routes!(
            controller::complaint::create_complaint,
            controller::complaint::list_complaints
        ))
        .routes(routes!(controller::complaint::get_complaint))
        .routes(routes!(controller::complaint::update_complaint_status))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
