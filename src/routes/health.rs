use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    storage: ServiceStatus,
    environment: String,
    version: String,
}

#[derive(Serialize)]
struct ServiceStatus {
    backend: String,
    status: String,
    details: Option<String>,
}

/*
    /health
*/
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let storage = match data.listings.ping().await {
        Ok(_) => ServiceStatus {
            backend: data.listings.backend().to_string(),
            status: "ok".to_string(),
            details: None,
        },
        Err(e) => {
            log::error!("Listing storage health check failed: {}", e);
            ServiceStatus {
                backend: data.listings.backend().to_string(),
                status: "error".to_string(),
                details: Some(format!("Failed to reach listing storage: {}", e)),
            }
        }
    };

    let status = if storage.status == "ok" { "ok" } else { "degraded" };

    HttpResponse::Ok().json(HealthStatus {
        status: status.to_string(),
        storage,
        environment: data.settings.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
