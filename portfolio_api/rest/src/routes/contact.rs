use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::debug;

use super::{error, internal_server_error, ok};
use crate::models::contact::ApiContactRequest;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    request: Result<Json<ApiContactRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            debug!("rejected contact request body: {rejection}");
            return error(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match service.submit(request.into()).await {
        Ok(()) => ok(),
        Err(ContactSubmitError::MissingFields) => {
            error(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        Err(ContactSubmitError::Configuration(err)) => {
            tracing::error!("contact form is unavailable: {err}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Mail server is not configured",
            )
        }
        Err(ContactSubmitError::Delivery(err)) => {
            tracing::error!("failed to deliver contact message: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::Body, http::Request};
    use portfolio_core_contact_contracts::MockContactFeatureService;
    use portfolio_core_health_contracts::MockHealthFeatureService;
    use portfolio_models::{
        contact::ContactRequest,
        delivery::{DeliveryConfigError, DeliveryField},
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::tests::{call, json};

    fn request(body: serde_json::Value) -> Request<Body> {
        Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn contact_request() -> ContactRequest {
        ContactRequest {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            purpose: Some("Client".into()),
            message: Some("Hello".into()),
        }
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "purpose": "Client",
            "message": "Hello",
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(contact_request(), Ok(()));

        // Act
        let response = call(MockHealthFeatureService::new(), contact, request(body())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await, json!({"ok": true}));
    }

    #[tokio::test]
    async fn multi_line_and_non_ascii_fields() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            ContactRequest {
                name: Some("Zoë\nMüller".into()),
                email: Some("zoë@example.com".into()),
                purpose: Some("Café ☕".into()),
                message: Some("Grüße\r\naus Köln\n\n👋".into()),
            },
            Ok(()),
        );

        // Act
        let response = call(
            MockHealthFeatureService::new(),
            contact,
            request(json!({
                "name": "Zoë\nMüller",
                "email": "zoë@example.com",
                "purpose": "Café ☕",
                "message": "Grüße\r\naus Köln\n\n👋",
            })),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await, json!({"ok": true}));
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            ContactRequest {
                name: Some(String::new()),
                purpose: None,
                ..contact_request()
            },
            Err(ContactSubmitError::MissingFields),
        );

        // Act
        let response = call(
            MockHealthFeatureService::new(),
            contact,
            request(json!({"name": "", "email": "ada@example.com", "message": "Hello"})),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json(response).await,
            json!({"ok": false, "error": "Missing required fields"})
        );
    }

    #[tokio::test]
    async fn not_configured() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            contact_request(),
            Err(ContactSubmitError::Configuration(
                DeliveryConfigError::Missing(vec![DeliveryField::Password]),
            )),
        );

        // Act
        let response = call(MockHealthFeatureService::new(), contact, request(body())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json(response).await,
            json!({"ok": false, "error": "Mail server is not configured"})
        );
    }

    #[tokio::test]
    async fn delivery_failed() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            contact_request(),
            Err(ContactSubmitError::Delivery(anyhow!(
                "Connection error: Connection refused (os error 111)"
            ))),
        );

        // Act
        let response = call(MockHealthFeatureService::new(), contact, request(body())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json(response).await,
            json!({"ok": false, "error": "Connection error: Connection refused (os error 111)"})
        );
    }

    #[tokio::test]
    async fn other_error() {
        // Arrange
        let contact = MockContactFeatureService::new().with_submit(
            contact_request(),
            Err(ContactSubmitError::Other(anyhow!("template broke"))),
        );

        // Act
        let response = call(MockHealthFeatureService::new(), contact, request(body())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json(response).await,
            json!({"ok": false, "error": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn invalid_body() {
        for body in [
            Body::from("not json"),
            Body::from(json!({"name": 42}).to_string()),
        ] {
            // Arrange
            let request = Request::post("/api/contact")
                .header("content-type", "application/json")
                .body(body)
                .unwrap();

            // Act
            let response = call(
                MockHealthFeatureService::new(),
                MockContactFeatureService::new(),
                request,
            )
            .await;

            // Assert
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json(response).await,
                json!({"ok": false, "error": "Invalid request body"})
            );
        }
    }
}
