pub mod health_handler;
pub mod summary_handler;

use actix_web::web;

pub use health_handler::root;
pub use summary_handler::generate_summary;

use crate::errors::{AppError, ValidationError};

const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Body extractor settings: oversized, mistyped or malformed bodies become 400s
/// with the same error shape as schema violations.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            AppError::from(ValidationError::new(format!("invalid JSON body: {err}"))).into()
        })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(root)
        .service(generate_summary);
}
