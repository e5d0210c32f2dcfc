use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::services::AuthService;
use crate::tests::services::doubles::InMemoryUsers;

use notes_auth::password;
use notes_core::User;

use std::sync::Arc;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const TEST_COST: u32 = 4;

fn test_service(users: InMemoryUsers) -> AuthService<InMemoryUsers> {
    let issuer = Arc::new(notes_auth::TokenIssuer::new(
        TEST_SECRET,
        "notes-api".to_string(),
        "notes-api".to_string(),
        7,
    ));

    AuthService::new(users, issuer, TEST_COST)
}

fn existing_user() -> User {
    let hash = password::hash_password("correct horse", TEST_COST).unwrap();
    let mut user = User::new("alice".to_string(), "alice@example.com".to_string(), hash);
    user.id = 1;
    user
}

fn register_request(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "correct horse".to_string(),
    }
}

#[tokio::test]
async fn given_fresh_email_and_username_when_registering_then_token_issued() {
    let service = test_service(InMemoryUsers::new());

    let response = service
        .register(register_request("bob", "bob@example.com"))
        .await
        .unwrap()
        .expect("registration should succeed");

    assert!(!response.token.is_empty());
    assert_eq!(response.username, "bob");
    assert_eq!(response.email, "bob@example.com");
}

#[tokio::test]
async fn given_taken_email_when_registering_then_conflict() {
    let service = test_service(InMemoryUsers::with_user(existing_user()));

    let response = service
        .register(register_request("bob", "alice@example.com"))
        .await
        .unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn given_taken_username_when_registering_then_conflict() {
    let service = test_service(InMemoryUsers::with_user(existing_user()));

    let response = service
        .register(register_request("alice", "bob@example.com"))
        .await
        .unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn given_registered_user_when_logging_in_then_token_issued() {
    let service = test_service(InMemoryUsers::with_user(existing_user()));

    let response = service
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap()
        .expect("login should succeed");

    assert!(!response.token.is_empty());
    assert_eq!(response.username, "alice");
}

#[tokio::test]
async fn given_unknown_email_when_logging_in_then_rejected() {
    let service = test_service(InMemoryUsers::with_user(existing_user()));

    let response = service
        .login(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_rejected() {
    let service = test_service(InMemoryUsers::with_user(existing_user()));

    let response = service
        .login(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "incorrect horse".to_string(),
        })
        .await
        .unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn given_new_registration_when_stored_then_password_is_hashed() {
    let users = InMemoryUsers::new();
    let service = test_service(users);

    service
        .register(register_request("bob", "bob@example.com"))
        .await
        .unwrap()
        .expect("registration should succeed");

    // Logging in with the plaintext proves a verifiable hash was stored
    let response = service
        .login(LoginRequest {
            email: "bob@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await
        .unwrap();

    assert!(response.is_some());
}
