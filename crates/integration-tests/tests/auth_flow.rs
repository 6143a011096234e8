//! End-to-end session lifecycle tests.

#![allow(clippy::unwrap_used)]

use quizmill_core::SessionToken;

use quizmill_auth::services::auth::AuthError;
use quizmill_integration_tests::test_service;

#[tokio::test]
async fn test_register_login_resolve_logout() {
    let auth = test_service();

    let user = auth
        .register("player@example.com", "correct horse")
        .await
        .unwrap();
    assert_eq!(user.email.as_str(), "player@example.com");

    let token = auth
        .login("player@example.com", "correct horse")
        .await
        .unwrap();

    let resolved = auth.resolve_session(&token).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.email, user.email);

    auth.logout(&token).await.unwrap();

    let err = auth.resolve_session(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidSession));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let auth = test_service();
    auth.register("player@example.com", "correct horse")
        .await
        .unwrap();
    let token = auth
        .login("player@example.com", "correct horse")
        .await
        .unwrap();

    auth.logout(&token).await.unwrap();
    // Second logout of the same token, and logout of a token that never
    // existed, both succeed.
    auth.logout(&token).await.unwrap();
    auth.logout(&SessionToken::from("never-issued")).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_sessions_are_independent() {
    let auth = test_service();
    auth.register("player@example.com", "correct horse")
        .await
        .unwrap();

    let first = auth
        .login("player@example.com", "correct horse")
        .await
        .unwrap();
    let second = auth
        .login("player@example.com", "correct horse")
        .await
        .unwrap();
    assert_ne!(first, second);

    // Revoking one session leaves the other intact.
    auth.logout(&first).await.unwrap();
    assert!(auth.resolve_session(&first).await.is_err());
    assert!(auth.resolve_session(&second).await.is_ok());
}

#[tokio::test]
async fn test_resolve_is_read_only() {
    let auth = test_service();
    auth.register("player@example.com", "correct horse")
        .await
        .unwrap();
    let token = auth
        .login("player@example.com", "correct horse")
        .await
        .unwrap();

    // Resolving repeatedly never invalidates the session.
    for _ in 0..3 {
        auth.resolve_session(&token).await.unwrap();
    }
    assert!(auth.resolve_session(&token).await.is_ok());
}
