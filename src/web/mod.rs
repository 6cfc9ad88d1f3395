pub mod error;
pub mod routes;

use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::services::ActivitiesService;
use routes::activities;

pub const INDEX_PATH: &str = "/static/index.html";

/// Full application router: the activities API, the static frontend under
/// `/static` and the root redirect.
pub fn router(service: Arc<ActivitiesService>, static_dir: impl AsRef<Path>) -> Router {
    let routes = Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        );

    with_layers(routes).with_state(service)
}

/// Panic recovery plus `Cache-Control: no-store`. The header layer wraps the
/// panic layer so recovered 500s carry it too.
pub fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
