use actix_web::{get, HttpResponse};

use crate::models::dto::response::StatusResponse;

/// Liveness probe.
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse::running())
}
