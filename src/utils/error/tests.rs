//! Tests for error handling

use super::types::GatewayError;
use crate::core::backend::BackendError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_validation_helper() {
    let error = GatewayError::validation("Message is empty");
    assert!(matches!(error, GatewayError::Validation(ref msg) if msg == "Message is empty"));
    assert!(error.is_client_error());
    assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_backend_error_status_mapping() {
    let timeout: GatewayError = BackendError::timeout("deadline of 60s exceeded").into();
    assert_eq!(timeout.status_code(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(timeout.code(), "BACKEND_TIMEOUT");

    let unreachable: GatewayError = BackendError::unreachable("connection refused").into();
    assert_eq!(unreachable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let api: GatewayError = BackendError::api(404, "model 'x' not found").into();
    assert_eq!(api.status_code(), StatusCode::BAD_GATEWAY);
    assert!(!api.is_client_error());
}

#[test]
fn test_error_display() {
    let error = GatewayError::streaming("connection reset");
    assert_eq!(error.to_string(), "Streaming error: connection reset");
}

#[test]
fn test_internal_errors_are_not_leaked() {
    let error = GatewayError::internal("lock poisoned at line 42");
    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
