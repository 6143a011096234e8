//! Registration tests, including the concurrent-duplicate race.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use quizmill_auth::services::auth::AuthError;
use quizmill_integration_tests::test_service;

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let auth = test_service();
    auth.register("player@example.com", "correct horse")
        .await
        .unwrap();

    let err = auth
        .register("player@example.com", "another pass")
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::DuplicateAccount));
}

#[tokio::test]
async fn test_concurrent_registration_has_one_winner() {
    let auth = Arc::new(test_service());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let auth = Arc::clone(&auth);
            tokio::spawn(async move {
                auth.register("player@example.com", &format!("password-{i}"))
                    .await
            })
        })
        .collect();

    let mut winners = 0;
    let mut duplicates = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => winners += 1,
            Err(AuthError::DuplicateAccount) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(duplicates, 7);
}

#[tokio::test]
async fn test_validation_reports_every_field() {
    let auth = test_service();

    let err = auth.register("", "").await.unwrap_err();
    let AuthError::Validation(errors) = err else {
        panic!("expected validation error");
    };

    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn test_validation_errors_serialize_for_clients() {
    let auth = test_service();

    let err = auth
        .register("player@example.com", "short")
        .await
        .unwrap_err();
    let AuthError::Validation(errors) = err else {
        panic!("expected validation error");
    };

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["field"], "password");
}

#[tokio::test]
async fn test_rejected_registration_leaves_no_account() {
    let auth = test_service();

    let _ = auth.register("player@example.com", "short").await;

    // The email is still free: a valid registration succeeds.
    auth.register("player@example.com", "correct horse")
        .await
        .unwrap();
}
