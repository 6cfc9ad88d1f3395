use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::models::{Activity, ActivityMap};
use crate::services::ActivitiesService;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(service): State<Arc<ActivitiesService>>,
) -> Json<ActivityMap> {
    Json(service.list_activities().await)
}

pub async fn activity_handler(
    Path(activity_name): Path<String>,
    State(service): State<Arc<ActivitiesService>>,
) -> Result<Json<Activity>, ApiError> {
    let activity = service.get_activity(&activity_name).await.map_err(|e| {
        warn!(activity = %activity_name, "Activity lookup failed: {}", e);
        e
    })?;
    Ok(Json(activity))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(service): State<Arc<ActivitiesService>>,
) -> Result<Json<Value>, ApiError> {
    match service.signup(&activity_name, &query.email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "signup");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Signup rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(service): State<Arc<ActivitiesService>>,
) -> Result<Json<Value>, ApiError> {
    match service.unregister(&activity_name, &query.email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "unregister");
            Ok(Json(json!({ "message": message })))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "Unregister rejected: {}", e);
            Err(e.into())
        }
    }
}
