use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, StatusCode},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::contact_models::{NewContactRequest, RequestMetadata},
    AppState,
};

#[derive(Deserialize)]
pub struct ContactFormRequest {
    // Every field is optional at the deserialization layer so an absent field
    // gets the same 400 as an empty one instead of a framework rejection.
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    company: Option<String>,
    message: Option<String>,
}

fn required_field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Request context the submitter never supplies: the forwarded client address
/// (falling back to the peer address), the declared user agent and the
/// referring page. Any of them may be missing.
pub fn derive_metadata(headers: &HeaderMap, peer_addr: Option<SocketAddr>) -> RequestMetadata {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| peer_addr.map(|addr| addr.ip().to_string()));
    RequestMetadata {
        source_page: header_value(header::REFERER),
        user_agent: header_value(header::USER_AGENT),
        ip_address,
    }
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(payload): Json<ContactFormRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<serde_json::Value>)> {
    let (Some(name), Some(email), Some(phone), Some(company)) = (
        required_field(&payload.name),
        required_field(&payload.email),
        required_field(&payload.phone),
        required_field(&payload.company),
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Missing required fields."})),
        ));
    };

    let metadata = derive_metadata(&headers, Some(peer_addr));
    let new_contact = NewContactRequest {
        full_name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        company: company.to_string(),
        // The form always sends the field; a blank message is stored as NULL.
        message: payload
            .message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string),
        source_page: metadata.source_page,
        user_agent: metadata.user_agent,
        ip_address: metadata.ip_address,
    };

    let id = state
        .contact_repository
        .insert_contact(new_contact)
        .map_err(|e| {
            tracing::error!("Failed to save contact request: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Internal error while saving your request."})),
            )
        })?;

    Ok((StatusCode::CREATED, Json(json!({"success": true, "id": id}))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::repositories::contact_repository::MockContactStore;
    use axum::body::Body;
    use axum::extract::connect_info::MockConnectInfo;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app(store: MockContactStore) -> Router {
        let state = Arc::new(AppState {
            contact_repository: Arc::new(store),
        });
        Router::new()
            .route("/api/contact", post(submit_contact))
            .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 52100))))
            .with_state(state)
    }

    fn contact_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_payload() -> Value {
        json!({
            "name": "Ana Silva",
            "email": "ana@example.com",
            "phone": "+551199999999",
            "company": "Acme",
            "message": ""
        })
    }

    #[tokio::test]
    async fn missing_required_field_returns_400_without_insert() {
        for field in ["name", "email", "phone", "company"] {
            let mut store = MockContactStore::new();
            store.expect_insert_contact().times(0);

            let mut payload = valid_payload();
            payload.as_object_mut().unwrap().remove(field);
            let response = test_app(store)
                .oneshot(contact_request(payload))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field: {field}");
            let body = response_json(response).await;
            assert_eq!(body["success"], Value::Bool(false));
            assert!(body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn whitespace_only_field_returns_400() {
        let mut store = MockContactStore::new();
        store.expect_insert_contact().times(0);

        let mut payload = valid_payload();
        payload["company"] = Value::String("   ".into());
        let response = test_app(store)
            .oneshot(contact_request(payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_submission_returns_201_with_store_id() {
        let mut store = MockContactStore::new();
        store
            .expect_insert_contact()
            .withf(|contact| {
                contact.full_name == "Ana Silva"
                    && contact.email == "ana@example.com"
                    && contact.phone == "+551199999999"
                    && contact.company == "Acme"
                    && contact.message.is_none()
            })
            .times(1)
            .returning(|_| Ok(42));

        let response = test_app(store)
            .oneshot(contact_request(valid_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response_json(response).await;
        assert_eq!(body, json!({"success": true, "id": 42}));
    }

    #[tokio::test]
    async fn message_is_kept_when_present() {
        let mut store = MockContactStore::new();
        store
            .expect_insert_contact()
            .withf(|contact| contact.message.as_deref() == Some("We need a quote."))
            .times(1)
            .returning(|_| Ok(7));

        let mut payload = valid_payload();
        payload["message"] = Value::String("We need a quote.".into());
        let response = test_app(store)
            .oneshot(contact_request(payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn forwarded_headers_end_up_in_the_record() {
        let mut store = MockContactStore::new();
        store
            .expect_insert_contact()
            .withf(|contact| {
                contact.ip_address.as_deref() == Some("203.0.113.9")
                    && contact.user_agent.as_deref() == Some("Mozilla/5.0")
                    && contact.source_page.as_deref() == Some("https://example.com/pricing")
            })
            .times(1)
            .returning(|_| Ok(1));

        let mut request = contact_request(valid_payload());
        let request_headers = request.headers_mut();
        request_headers.insert("x-forwarded-for", "203.0.113.9".parse().unwrap());
        request_headers.insert(header::USER_AGENT, "Mozilla/5.0".parse().unwrap());
        request_headers.insert(header::REFERER, "https://example.com/pricing".parse().unwrap());

        let response = test_app(store).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn store_failure_returns_500_with_generic_error() {
        let mut store = MockContactStore::new();
        store
            .expect_insert_contact()
            .times(1)
            .returning(|_| Err(StoreError::Database(diesel::result::Error::BrokenTransactionManager)));

        let response = test_app(store)
            .oneshot(contact_request(valid_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        let error = body["error"].as_str().unwrap();
        assert!(!error.contains("transaction"), "internal detail leaked: {error}");
    }

    #[tokio::test]
    async fn repeated_submissions_create_distinct_records() {
        let mut store = MockContactStore::new();
        let next_id = std::sync::atomic::AtomicU64::new(1);
        store
            .expect_insert_contact()
            .times(2)
            .returning(move |_| Ok(next_id.fetch_add(1, std::sync::atomic::Ordering::SeqCst)));

        let app = test_app(store);
        let first = response_json(
            app.clone()
                .oneshot(contact_request(valid_payload()))
                .await
                .unwrap(),
        )
        .await;
        let second = response_json(app.oneshot(contact_request(valid_payload())).await.unwrap()).await;

        assert_eq!(first["success"], Value::Bool(true));
        assert_eq!(second["success"], Value::Bool(true));
        assert_ne!(first["id"], second["id"]);
    }

    #[test]
    fn metadata_prefers_forwarded_for_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9".parse().unwrap());
        let peer = SocketAddr::from(([10, 0, 0, 1], 9999));

        let metadata = derive_metadata(&headers, Some(peer));
        assert_eq!(metadata.ip_address.as_deref(), Some("203.0.113.9"));
    }

    #[test]
    fn metadata_falls_back_to_peer_address() {
        let peer = SocketAddr::from(([10, 0, 0, 1], 9999));

        let metadata = derive_metadata(&HeaderMap::new(), Some(peer));
        assert_eq!(metadata.ip_address.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn metadata_is_empty_without_headers_or_peer() {
        let metadata = derive_metadata(&HeaderMap::new(), None);
        assert_eq!(
            metadata,
            RequestMetadata {
                source_page: None,
                user_agent: None,
                ip_address: None,
            }
        );
    }

    #[test]
    fn metadata_carries_user_agent_and_referer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, "Mozilla/5.0".parse().unwrap());
        headers.insert(header::REFERER, "https://example.com/pricing".parse().unwrap());

        let metadata = derive_metadata(&headers, None);
        assert_eq!(metadata.user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(metadata.source_page.as_deref(), Some("https://example.com/pricing"));
    }
}
