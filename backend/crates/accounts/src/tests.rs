//! Unit tests for accounts crate

#[cfg(test)]
mod store_tests {
    use crate::domain::entity::user::NewAccount;
    use crate::domain::repository::AccountStore;
    use crate::domain::value_object::{email::Email, username::Username};
    use crate::error::AccountError;
    use crate::infra::memory::MemoryAccountStore;

    fn new_account(email: &str, username: &str, password: &str) -> NewAccount {
        NewAccount {
            email: Email::new(email).unwrap(),
            username: Username::new(username),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_email() {
        let store = MemoryAccountStore::new();

        let created = store
            .create(new_account("alice@example.com", "Alice", "secret"))
            .await
            .unwrap();

        let found = store
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.username.original(), "Alice");
        assert_eq!(found.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact_match() {
        let store = MemoryAccountStore::new();
        store
            .create(new_account("alice@example.com", "Alice", "secret"))
            .await
            .unwrap();

        assert!(
            store
                .find_by_email("Alice@Example.com")
                .await
                .unwrap()
                .is_none()
        );
        assert!(store.find_by_email("bob@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryAccountStore::new();
        store
            .create(new_account("alice@example.com", "Alice", "secret"))
            .await
            .unwrap();

        // Different username and password make no difference
        let err = store
            .create(new_account("alice@example.com", "Alice2", "other"))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::EmailTaken));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected_case_insensitively() {
        let store = MemoryAccountStore::new();
        store
            .create(new_account("first@example.com", "Demo", "secret"))
            .await
            .unwrap();

        let err = store
            .create(new_account("second@example.com", "demo", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signup_creates_one_account() {
        let store = MemoryAccountStore::new();

        let (a, b) = tokio::join!(
            store.create(new_account("race@example.com", "RacerA", "pw")),
            store.create(new_account("race@example.com", "RacerB", "pw")),
        );

        assert!(a.is_ok() != b.is_ok(), "exactly one signup should win");

        let stored = store
            .find_by_email("race@example.com")
            .await
            .unwrap()
            .unwrap();
        let winner = [a, b].into_iter().find_map(Result::ok).unwrap();
        assert_eq!(stored.id, winner.id);
    }

    #[tokio::test]
    async fn test_verify_password() {
        let store = MemoryAccountStore::new();
        store
            .create(new_account("alice@example.com", "Alice", "secret"))
            .await
            .unwrap();

        assert!(store.verify_password("alice@example.com", "secret").await.unwrap());
        assert!(!store.verify_password("alice@example.com", "wrong").await.unwrap());
        assert!(!store.verify_password("nobody@example.com", "secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_demo_accounts_seeded() {
        let store = MemoryAccountStore::with_demo_accounts();

        let demo = store
            .find_by_email("demo@snake.game")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(demo.username.original(), "DemoPlayer");
        assert!(store.verify_password("demo@snake.game", "demo123").await.unwrap());

        // Seeded usernames still hold the uniqueness invariant
        let err = store
            .create(new_account("new@snake.game", "demoplayer", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_clones_share_accounts() {
        let store = MemoryAccountStore::new();
        let clone = store.clone();

        store
            .create(new_account("alice@example.com", "Alice", "secret"))
            .await
            .unwrap();

        assert!(clone.find_by_email("alice@example.com").await.unwrap().is_some());
    }
}

#[cfg(test)]
mod value_object_tests {
    use crate::domain::value_object::{email::Email, username::Username};

    #[test]
    fn test_email_valid_formats() {
        assert!(Email::new("demo@snake.game").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("a@b.io").is_ok());
    }

    #[test]
    fn test_email_invalid_formats() {
        assert!(Email::new("").is_err());
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("two@@example.com").is_err());
        assert!(Email::new("user@nodot").is_err());
        assert!(Email::new("user@.example.com").is_err());
    }

    #[test]
    fn test_email_preserves_case() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }

    #[test]
    fn test_username_accepts_any_string() {
        let username = Username::new("  spaces kept  ");
        assert_eq!(username.original(), "  spaces kept  ");
    }

    #[test]
    fn test_username_matches_case_insensitively() {
        let username = Username::new("SnakeMaster");
        assert!(username.matches("snakemaster"));
        assert!(username.matches("SNAKEMASTER"));
        assert!(!username.matches("snake_master"));
    }
}

#[cfg(test)]
mod dto_tests {
    use chrono::{TimeZone, Utc};
    use kernel::id::UserId;

    use crate::domain::entity::user::User;
    use crate::domain::value_object::{email::Email, username::Username};
    use crate::presentation::dto::{AuthResponse, SignupRequest, UserDto};

    fn sample_user() -> User {
        User {
            id: UserId::new(),
            username: Username::new("Alice"),
            email: Email::from_db("alice@example.com"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_user_dto_serializes_camel_case() {
        let dto = UserDto::from(sample_user());
        let json = serde_json::to_string(&dto).unwrap();

        assert!(json.contains(r#""createdAt":"2024-01-15T12:00:00Z""#));
        assert!(json.contains(r#""username":"Alice""#));
        assert!(json.contains(r#""email":"alice@example.com""#));
    }

    #[test]
    fn test_auth_response_success_shape() {
        let response = AuthResponse::user(UserDto::from(sample_user()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["username"], "Alice");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_auth_response_error_shape() {
        let response = AuthResponse::error("User already exists");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "User already exists");
        assert!(json.get("user").is_none());
    }

    #[test]
    fn test_signup_request_deserialization() {
        let json = r#"{"email":"a@b.io","username":"Al","password":"pw"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "a@b.io");
        assert_eq!(request.username, "Al");
        assert_eq!(request.password, "pw");
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use kernel::error::kind::ErrorKind;

    use crate::error::AccountError;

    #[test]
    fn test_error_status_codes() {
        let test_cases: Vec<(AccountError, StatusCode)> = vec![
            (AccountError::EmailTaken, StatusCode::CONFLICT),
            (AccountError::UsernameTaken, StatusCode::CONFLICT),
            (AccountError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AccountError::TokenMissing, StatusCode::UNAUTHORIZED),
            (AccountError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (
                AccountError::Validation("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(AccountError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AccountError::TokenMissing.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            AccountError::Validation("bad".into()).kind(),
            ErrorKind::BadRequest
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AccountError::TokenMissing.to_string(),
            "Not authenticated"
        );
        assert_eq!(
            AccountError::TokenInvalid.to_string(),
            "Invalid authentication credentials"
        );
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }
}

#[cfg(test)]
mod identity_tests {
    use axum::http::{HeaderMap, header};

    use crate::domain::entity::user::NewAccount;
    use crate::domain::repository::AccountStore;
    use crate::domain::value_object::{email::Email, username::Username};
    use crate::error::AccountError;
    use crate::infra::memory::MemoryAccountStore;
    use crate::presentation::identity::resolve_bearer;

    async fn store_with_alice() -> MemoryAccountStore {
        let store = MemoryAccountStore::new();
        store
            .create(NewAccount {
                email: Email::new("alice@example.com").unwrap(),
                username: Username::new("Alice"),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        store
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let store = store_with_alice().await;

        let user = resolve_bearer(&store, &bearer_headers("alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user.username.original(), "Alice");
    }

    #[tokio::test]
    async fn test_missing_header_is_token_missing() {
        let store = store_with_alice().await;

        let err = resolve_bearer(&store, &HeaderMap::new()).await.unwrap_err();
        assert!(matches!(err, AccountError::TokenMissing));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_token_missing() {
        let store = store_with_alice().await;

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Basic YWxpY2U=".parse().unwrap());

        let err = resolve_bearer(&store, &headers).await.unwrap_err();
        assert!(matches!(err, AccountError::TokenMissing));
    }

    #[tokio::test]
    async fn test_unknown_token_is_token_invalid() {
        let store = store_with_alice().await;

        let err = resolve_bearer(&store, &bearer_headers("nobody@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::TokenInvalid));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::MemoryAccountStore;
    use crate::presentation::router::accounts_router_generic;

    fn test_app() -> Router {
        accounts_router_generic(MemoryAccountStore::with_demo_accounts())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_signup_then_login() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/signup",
                json!({"email": "new@example.com", "username": "Newcomer", "password": "pw123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["username"], "Newcomer");
        assert_eq!(body["user"]["email"], "new@example.com");

        let response = app
            .oneshot(post_json(
                "/login",
                json!({"email": "new@example.com", "password": "pw123"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["email"], "new@example.com");
    }

    #[tokio::test]
    async fn test_signup_duplicate_reports_in_band() {
        let app = test_app();

        let response = app
            .oneshot(post_json(
                "/signup",
                json!({"email": "demo@snake.game", "username": "SomeoneElse", "password": "pw"}),
            ))
            .await
            .unwrap();

        // Same status as a fresh signup; the envelope carries the outcome
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "User already exists");
    }

    #[tokio::test]
    async fn test_signup_invalid_email_is_bad_request() {
        let app = test_app();

        let response = app
            .oneshot(post_json(
                "/signup",
                json!({"email": "not-an-email", "username": "X", "password": "pw"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid email format");
    }

    #[tokio::test]
    async fn test_login_wrong_password_reports_in_band() {
        let app = test_app();

        let response = app
            .oneshot(post_json(
                "/login",
                json!({"email": "demo@snake.game", "password": "wrong"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_me_with_bearer_token() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/me")
                    .header(header::AUTHORIZATION, "Bearer demo@snake.game")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["username"], "DemoPlayer");
    }

    #[tokio::test]
    async fn test_me_without_token_is_unauthorized() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/me")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_logout_requires_token() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/logout")
                    .header(header::AUTHORIZATION, "Bearer demo@snake.game")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body, json!({"success": true}));
    }

    #[tokio::test]
    async fn test_stale_token_after_restart_is_invalid() {
        // A token issued by a previous process is just an email; against
        // a fresh store with no such account it must fail closed
        let app = accounts_router_generic(MemoryAccountStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/me")
                    .header(header::AUTHORIZATION, "Bearer ghost@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid authentication credentials");
    }
}
