//! Mergington High School extracurricular activities API.
//!
//! Students list activities, sign up with their school email and unregister
//! again. The registry lives in memory and is reseeded on every start.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod web;

use std::sync::Arc;

use axum::Router;

use config::AppConfig;
use services::ActivitiesService;

/// Builds the application from configuration with a freshly seeded registry.
pub fn build_app(config: &AppConfig) -> Router {
    let service = Arc::new(ActivitiesService::seeded(config.enforce_capacity));
    web::router(service, &config.static_dir)
}
