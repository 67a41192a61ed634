//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, Swagger UI
//! serves the resulting documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/house` - Create a house (form), redirects to the house page
/// - `GET /api/houses/{slug}` - House view
/// - `GET /api/houses/{slug}/settings` - House settings view
/// - `POST /api/house/section` - Create a section
/// - `PATCH /api/house/section` - Set the archived flag of a section
/// - `POST /api/house/task` - Create a task
/// - `DELETE /api/house/task` - Delete a task and its stars
/// - `POST /api/house/star` - Give a star for a task
/// - `POST /api/house/user` - Join a house
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Sharehouse", description = "Sharehouse API"), tags(
        (name = controller::house::HOUSE_TAG, description = "House, section, task, star & user API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::house::create_house))
        .routes(routes!(controller::house::get_house))
        .routes(routes!(controller::house::get_house_settings))
        .routes(routes!(
            controller::section::create_section,
            controller::section::archive_section
        ))
        .routes(routes!(
            controller::task::create_task,
            controller::task::delete_task
        ))
        .routes(routes!(controller::star::create_star))
        .routes(routes!(controller::user::create_user))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
