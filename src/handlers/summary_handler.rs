use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::response::SummaryResponse,
};

#[post("/generate-summary")]
pub async fn generate_summary(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);

    match state
        .summary_service
        .generate_summary(payload.into_inner())
        .await
    {
        Ok(summary) => {
            log::info!("[{request_id}] Generated summary ({} chars)", summary.len());
            Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
        }
        Err(err @ AppError::Validation(_)) => {
            log::warn!("[{request_id}] Rejected quiz answers: {err}");
            Err(err)
        }
        Err(err) => {
            log::error!("[{request_id}] Summary generation failed: {err}");
            Err(err)
        }
    }
}
