//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::error::json_decode_error;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::person::submit_person;
use crate::middleware::RequestTracking;

/// Build the application served by every worker.
///
/// Shared between [`run`] and the integration tests so both exercise the
/// same routing, middleware, and payload handling.
pub fn build_app(
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[cfg_attr(not(debug_assertions), expect(unused_mut, reason = "Swagger UI is mounted in debug builds only"))]
    let mut app = App::new()
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_decode_error))
        .wrap(RequestTracking)
        .service(web::scope("/sipy/api").service(submit_person))
        .service(ready)
        .service(live)
        .default_service(web::route().to(|| async {
            Err::<HttpResponse, Error>(Error::not_found("resource not found"))
        }));

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}

/// Bind and run the HTTP server until shutdown.
///
/// Readiness flips to 200 only after the listener is bound.
///
/// # Errors
///
/// Returns an error when binding fails or the server terminates abnormally.
pub async fn run(settings: ServerSettings) -> std::io::Result<()> {
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone()))
        .bind(settings.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %settings.bind_addr, "listening");
    server.run().await
}
