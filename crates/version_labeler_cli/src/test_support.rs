//! Helpers for running commands against a `wiremock` GitHub API.

use std::sync::Arc;

use github_client::{create_token_client, GitHubClient};
use secrecy::SecretString;
use serde_json::{json, Value};
use version_labeler_core::RepositoryPath;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{config::AppConfig, inputs::ActionContext};

pub(crate) fn context_for(mock_server: &MockServer, config: AppConfig) -> ActionContext {
    let octocrab = create_token_client(
        &SecretString::from("test-token".to_string()),
        Some(&mock_server.uri()),
    )
    .expect("Failed to create client");

    ActionContext::new(
        Arc::new(GitHubClient::new(octocrab)),
        RepositoryPath::parse("owner/repo").unwrap(),
        config,
    )
    .expect("Failed to create context")
}

pub(crate) fn label_json(name: &str) -> Value {
    json!({ "id": 1, "name": name, "color": "ededed", "description": null, "default": false })
}

pub(crate) fn labels_json(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|name| label_json(name)).collect())
}

pub(crate) fn branches_json(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| json!({ "name": name, "protected": false }))
            .collect(),
    )
}

pub(crate) fn pull_request_json(number: u64, body: Option<&str>) -> Value {
    json!({
        "number": number,
        "state": "open",
        "body": body,
        "head": { "ref": "feature", "sha": "abc123" }
    })
}

pub(crate) async fn mount_get(mock_server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Accepts label creation and echoes a label back.
pub(crate) async fn mount_create_label(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/repos/owner/repo/labels"))
        .respond_with(ResponseTemplate::new(201).set_body_json(label_json("created")))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}
