//! Tests for label_checker module.

use super::*;
use crate::test_support::{Call, MockFailure, MockRepositoryClient, Operation};

fn checker_for(client: Arc<MockRepositoryClient>) -> LabelChecker {
    LabelChecker::new(
        client,
        RepositoryPath::parse("owner/repo").unwrap(),
        Arc::new(LabelCatalog::default()),
    )
}

#[tokio::test]
async fn test_creates_all_labels_when_none_exist() {
    let client = MockRepositoryClient::new().into_shared();
    let checker = checker_for(client.clone());

    let outcome = checker
        .ensure_labels_exist()
        .await
        .expect("Label check should succeed");

    let mut created = client.created_labels();
    created.sort();
    assert_eq!(
        created,
        vec![
            (
                "major".to_string(),
                "Major version bump".to_string(),
                "d73a4a".to_string()
            ),
            (
                "minor".to_string(),
                "Minor version bump".to_string(),
                "2ea44f".to_string()
            ),
            (
                "patch".to_string(),
                "Patch version bump".to_string(),
                "0969da".to_string()
            ),
        ]
    );
    assert_eq!(
        outcome.created,
        vec![BumpType::Major, BumpType::Minor, BumpType::Patch]
    );
    assert!(outcome.existing.is_empty());
    assert!(outcome.has_changes());
}

#[tokio::test]
async fn test_creates_nothing_when_catalog_is_present() {
    let client = MockRepositoryClient::new()
        .with_repository_labels(&["bug", "major", "minor", "patch"])
        .into_shared();
    let checker = checker_for(client.clone());

    let outcome = checker.ensure_labels_exist().await.unwrap();

    assert!(client.created_labels().is_empty());
    assert_eq!(client.calls(), vec![Call::ListRepositoryLabels]);
    assert!(!outcome.has_changes());
    assert_eq!(outcome.existing.len(), 3);
}

#[tokio::test]
async fn test_creates_only_missing_labels() {
    let client = MockRepositoryClient::new()
        .with_repository_labels(&["major", "documentation"])
        .into_shared();
    let checker = checker_for(client.clone());

    let outcome = checker.ensure_labels_exist().await.unwrap();

    let names: Vec<String> = client
        .created_labels()
        .into_iter()
        .map(|(name, _, _)| name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"minor".to_string()));
    assert!(names.contains(&"patch".to_string()));
    assert_eq!(outcome.existing, vec![BumpType::Major]);
}

#[tokio::test]
async fn test_existing_labels_match_without_regard_to_case() {
    let client = MockRepositoryClient::new()
        .with_repository_labels(&["Major", "MINOR", "Patch"])
        .into_shared();
    let checker = checker_for(client.clone());

    checker.ensure_labels_exist().await.unwrap();

    assert!(client.created_labels().is_empty());
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let client = MockRepositoryClient::new().into_shared();
    let checker = checker_for(client.clone());

    let first = checker.ensure_labels_exist().await.unwrap();
    let second = checker.ensure_labels_exist().await.unwrap();

    assert_eq!(first.created.len(), 3);
    assert!(second.created.is_empty());
    assert_eq!(client.created_labels().len(), 3);
}

#[tokio::test]
async fn test_listing_failure_is_wrapped() {
    let client = MockRepositoryClient::new()
        .failing(Operation::ListRepositoryLabels, MockFailure::Api(500))
        .into_shared();
    let checker = checker_for(client.clone());

    let err = checker.ensure_labels_exist().await.unwrap_err();

    assert!(matches!(err, LabelerError::CheckLabels { .. }));
    assert_eq!(err.to_string(), "Failed to check labels");
    assert!(client.created_labels().is_empty());
}

#[tokio::test]
async fn test_creation_failure_is_wrapped() {
    let client = MockRepositoryClient::new()
        .failing(Operation::CreateLabel, MockFailure::Auth)
        .into_shared();
    let checker = checker_for(client);

    let err = checker.ensure_labels_exist().await.unwrap_err();

    assert!(matches!(
        err,
        LabelerError::CheckLabels {
            source: github_client::Error::AuthError(_)
        }
    ));
}

#[tokio::test]
async fn test_rate_limit_surfaces_distinctly() {
    let client = MockRepositoryClient::new()
        .failing(Operation::ListRepositoryLabels, MockFailure::RateLimit)
        .into_shared();
    let checker = checker_for(client);

    let err = checker.ensure_labels_exist().await.unwrap_err();

    assert!(err.is_rate_limit());
    assert!(matches!(err, LabelerError::RateLimited { .. }));
}

#[tokio::test]
async fn test_rate_limit_during_creation_surfaces_distinctly() {
    let client = MockRepositoryClient::new()
        .failing(Operation::CreateLabel, MockFailure::RateLimit)
        .into_shared();
    let checker = checker_for(client);

    let err = checker.ensure_labels_exist().await.unwrap_err();

    assert!(err.is_rate_limit());
}
