//! Tests for pull_request_locator module.

use super::*;
use crate::test_support::{pull_request, Call, MockFailure, MockRepositoryClient, Operation};

fn locator_for(client: Arc<MockRepositoryClient>) -> PullRequestLocator {
    PullRequestLocator::new(client, RepositoryPath::parse("owner/repo").unwrap())
}

#[tokio::test]
async fn test_picks_first_open_pull_request() {
    let client = MockRepositoryClient::new()
        .with_commit_pulls(vec![
            pull_request(3, "closed", None),
            pull_request(7, "open", Some("Fixes #1")),
            pull_request(9, "open", None),
        ])
        .into_shared();

    let found = locator_for(client.clone())
        .find_for_commit("abc123")
        .await
        .unwrap();

    assert_eq!(found.map(|n| n.as_u64()), Some(7));
    assert_eq!(
        client.calls(),
        vec![Call::ListPullRequestsForCommit("abc123".to_string())]
    );
}

#[tokio::test]
async fn test_no_open_pull_request() {
    let client = MockRepositoryClient::new()
        .with_commit_pulls(vec![pull_request(3, "closed", None)])
        .into_shared();

    let found = locator_for(client).find_for_commit("abc123").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_commit_without_pull_requests() {
    let client = MockRepositoryClient::new().into_shared();

    let found = locator_for(client).find_for_commit("abc123").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_empty_sha_is_rejected_before_any_request() {
    let client = MockRepositoryClient::new().into_shared();

    let err = locator_for(client.clone())
        .find_for_commit("  ")
        .await
        .unwrap_err();

    assert!(matches!(err, LabelerError::Validation(_)));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_api_failure_is_wrapped() {
    let client = MockRepositoryClient::new()
        .failing(Operation::ListPullRequestsForCommit, MockFailure::Api(422))
        .into_shared();

    let err = locator_for(client)
        .find_for_commit("abc123")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to find pull request for commit");
    assert!(matches!(
        err.api_error(),
        Some(github_client::Error::ApiError { status: 422, .. })
    ));
}
