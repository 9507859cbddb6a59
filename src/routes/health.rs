use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::env;
use std::sync::Arc;

use crate::db::mongo::CATALOG_DB;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    mongodb: String,
    environment: String,
    version: String,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mongodb = match client.database(CATALOG_DB).run_command(doc! {"ping": 1}).await {
        Ok(_) => "ok".to_string(),
        Err(e) => {
            eprintln!("MongoDB health check failed: {}", e);
            format!("error: {}", e)
        }
    };

    let health = HealthStatus {
        status: if mongodb == "ok" { "ok" } else { "degraded" }.to_string(),
        mongodb,
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(health)
}
