use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::ContactError,
    models::contact_models::{ContactRecord, NewContact},
    AppState,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(ContactError::Validation(format!("{} is required", field)));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::Validation("email is not a valid address".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub data: ContactRecord,
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let Json(req) = payload.map_err(|rejection| ContactError::Validation(rejection.body_text()))?;
    req.validate()?;

    let new_contact = NewContact {
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        message: req.message.trim().to_string(),
        created_at: Utc::now().timestamp() as i32,
    };

    let record = state.contact_repository.create_contact(new_contact)?;
    tracing::info!("Stored contact {} from {}", record.id, record.email);

    state.notifier.notify(&record).await?;

    Ok(Json(ContactResponse {
        success: true,
        data: record,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app, build_pool, repositories::contact_repository::ContactRepository, utils::email_relay::MockContactNotifier};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app(notifier: MockContactNotifier) -> (Router, Arc<ContactRepository>) {
        let repository = Arc::new(ContactRepository::new(build_pool(":memory:", 1).unwrap()));
        let state = Arc::new(AppState {
            contact_repository: repository.clone(),
            notifier: Arc::new(notifier),
        });
        (app(state, None), repository)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn stores_and_relays_valid_submission() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .withf(|record| record.name == "A" && record.email == "a@b.com" && record.message == "hi")
            .times(1)
            .returning(|_| Ok(()));
        let (app, repository) = test_app(notifier);

        let body = json!({"name": "A", "email": "a@b.com", "message": "hi"}).to_string();
        let response = app.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value = body_json(response).await;
        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["name"], json!("A"));
        assert_eq!(value["data"]["email"], json!("a@b.com"));
        assert_eq!(value["data"]["message"], json!("hi"));
        assert!(value["data"]["createdAt"].as_i64().unwrap() > 0);
        assert_eq!(repository.count_contacts().unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_fields_without_side_effects() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().times(0);
        let (app, repository) = test_app(notifier);

        let body = json!({"name": "  ", "email": "a@b.com", "message": "hi"}).to_string();
        let response = app.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = body_json(response).await;
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("name is required"));
        assert_eq!(repository.count_contacts().unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().times(0);
        let (app, _) = test_app(notifier);

        let body = json!({"name": "A", "email": "not-an-email", "message": "hi"}).to_string();
        let response = app.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], json!(false));
    }

    #[tokio::test]
    async fn malformed_json_gets_the_same_error_shape() {
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().times(0);
        let (app, _) = test_app(notifier);

        let response = app.oneshot(post_json("{\"name\": \"A\"")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value = body_json(response).await;
        assert_eq!(value["success"], json!(false));
        assert!(value["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn mail_failure_is_a_server_error() {
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(ContactError::Mail("connection refused".to_string())));
        let (app, repository) = test_app(notifier);

        let body = json!({"name": "A", "email": "a@b.com", "message": "hi"}).to_string();
        let response = app.oneshot(post_json(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let value = body_json(response).await;
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!("failed to send notification email: connection refused"));
        // The record is written before the relay is attempted.
        assert_eq!(repository.count_contacts().unwrap(), 1);
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let (app, _) = test_app(MockContactNotifier::new());

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[test]
    fn validation_trims_before_checking() {
        let req = ContactRequest {
            name: "A".to_string(),
            email: " a@b.com ".to_string(),
            message: "hi".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
