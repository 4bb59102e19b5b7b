//! HTTP route modules

pub mod admin;
pub mod chat;
pub mod health;

use actix_web::web;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Register every relay route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/chat", web::post().to(chat::chat))
                .route("/chat/stream", web::post().to(chat::chat_stream))
                .route("/context/{session_id}", web::delete().to(admin::clear_context))
                .route("/cache", web::delete().to(admin::clear_cache))
                .route("/metrics", web::get().to(admin::metrics)),
        );
}

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
