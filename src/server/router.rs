use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        class::{self, CLASS_TAG},
        health::{self, HEALTH_TAG},
        payment::{self, PAYMENT_TAG},
        selection::{self, SELECTION_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Melody Manor API",
        description = "Music school class catalog, selections and enrollment"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = HEALTH_TAG, description = "Liveness"),
        (name = AUTH_TAG, description = "Bearer token issuing"),
        (name = USER_TAG, description = "User directory and roles"),
        (name = CLASS_TAG, description = "Class catalog and review"),
        (name = SELECTION_TAG, description = "Classes selected for later payment"),
        (name = PAYMENT_TAG, description = "Payment intents, enrollment and history"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the application router with every endpoint, Swagger UI at `/api/docs` and
/// the CORS and tracing layers.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::issue_token))
        // Users
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_instructors))
        .routes(routes!(user::get_user_by_email))
        .routes(routes!(user::change_role))
        // Classes
        .routes(routes!(class::get_approved_classes))
        .routes(routes!(class::get_all_classes))
        .routes(routes!(class::get_popular_classes))
        .routes(routes!(class::get_class))
        .routes(routes!(class::get_instructor_classes))
        .routes(routes!(class::create_class))
        .routes(routes!(class::delete_class))
        .routes(routes!(class::update_class_status))
        .routes(routes!(
            class::update_class_info,
            class::replace_class_info
        ))
        // Selections
        .routes(routes!(selection::add_to_selected))
        .routes(routes!(selection::get_selected_classes))
        .routes(routes!(selection::remove_selected_class))
        // Payments
        .routes(routes!(payment::create_payment_intent))
        .routes(routes!(payment::record_payment))
        .routes(routes!(payment::get_payment_history))
        .routes(routes!(payment::get_enrolled_classes))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
