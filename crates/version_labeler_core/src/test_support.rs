//! A configurable in-memory `RepositoryClient` shared by the unit tests.

use async_trait::async_trait;
use github_client::{Branch, Error as GitHubError, Label, PullRequest, PullRequestHead, RepositoryClient};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The client operations, used to inject failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Operation {
    ListBranches,
    ListRepositoryLabels,
    CreateLabel,
    GetPullRequest,
    ListLabelsOnIssue,
    AddLabels,
    ListPullRequestsForCommit,
}

/// The kind of error an injected failure produces.
#[derive(Debug, Clone, Copy)]
pub(crate) enum MockFailure {
    Api(u16),
    Auth,
    NotFound,
    RateLimit,
}

impl MockFailure {
    fn to_error(self) -> GitHubError {
        match self {
            MockFailure::Api(status) => GitHubError::ApiError {
                status,
                message: "API Error".to_string(),
            },
            MockFailure::Auth => GitHubError::AuthError("Bad credentials".to_string()),
            MockFailure::NotFound => GitHubError::NotFound,
            MockFailure::RateLimit => GitHubError::RateLimitExceeded,
        }
    }
}

/// A recorded client call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ListBranches,
    ListRepositoryLabels,
    CreateLabel {
        name: String,
        description: String,
        color: String,
    },
    GetPullRequest(u64),
    ListLabelsOnIssue(u64),
    AddLabels {
        issue_number: u64,
        labels: Vec<String>,
    },
    ListPullRequestsForCommit(String),
}

#[derive(Default)]
pub(crate) struct MockRepositoryClient {
    branches: Vec<String>,
    repository_labels: Mutex<Vec<Label>>,
    pull_request: Option<PullRequest>,
    issue_labels: HashMap<u64, Vec<Label>>,
    commit_pulls: Vec<PullRequest>,
    failures: HashMap<Operation, MockFailure>,
    calls: Mutex<Vec<Call>>,
}

impl MockRepositoryClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_branches(mut self, names: &[&str]) -> Self {
        self.branches = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub(crate) fn with_repository_labels(self, names: &[&str]) -> Self {
        *self.repository_labels.lock().unwrap() =
            names.iter().map(|n| Label::new(*n, "ededed")).collect();
        self
    }

    pub(crate) fn with_pull_request(mut self, number: u64, body: Option<&str>) -> Self {
        self.pull_request = Some(pull_request(number, "open", body));
        self
    }

    pub(crate) fn with_issue_labels(mut self, issue_number: u64, names: &[&str]) -> Self {
        self.issue_labels.insert(
            issue_number,
            names.iter().map(|n| Label::new(*n, "")).collect(),
        );
        self
    }

    pub(crate) fn with_commit_pulls(mut self, pulls: Vec<PullRequest>) -> Self {
        self.commit_pulls = pulls;
        self
    }

    pub(crate) fn failing(mut self, operation: Operation, failure: MockFailure) -> Self {
        self.failures.insert(operation, failure);
        self
    }

    pub(crate) fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn created_labels(&self) -> Vec<(String, String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateLabel {
                    name,
                    description,
                    color,
                } => Some((name, description, color)),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn issue_label_requests(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::ListLabelsOnIssue(number) => Some(number),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn added_labels(&self) -> Vec<(u64, Vec<String>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::AddLabels {
                    issue_number,
                    labels,
                } => Some((issue_number, labels)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call, operation: Operation) -> Result<(), GitHubError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.get(&operation) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

pub(crate) fn pull_request(number: u64, state: &str, body: Option<&str>) -> PullRequest {
    PullRequest {
        number,
        body: body.map(str::to_string),
        state: state.to_string(),
        head: PullRequestHead {
            ref_name: format!("feature/{number}"),
            sha: String::new(),
        },
    }
}

#[async_trait]
impl RepositoryClient for MockRepositoryClient {
    async fn list_branches(&self, _owner: &str, _repo: &str) -> Result<Vec<Branch>, GitHubError> {
        self.record(Call::ListBranches, Operation::ListBranches)?;
        Ok(self
            .branches
            .iter()
            .map(|name| Branch { name: name.clone() })
            .collect())
    }

    async fn list_repository_labels(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<Vec<Label>, GitHubError> {
        self.record(Call::ListRepositoryLabels, Operation::ListRepositoryLabels)?;
        Ok(self.repository_labels.lock().unwrap().clone())
    }

    async fn create_label(
        &self,
        _owner: &str,
        _repo: &str,
        name: &str,
        description: &str,
        color: &str,
    ) -> Result<(), GitHubError> {
        self.record(
            Call::CreateLabel {
                name: name.to_string(),
                description: description.to_string(),
                color: color.to_string(),
            },
            Operation::CreateLabel,
        )?;
        self.repository_labels.lock().unwrap().push(Label {
            name: name.to_string(),
            color: color.to_string(),
            description: Some(description.to_string()),
        });
        Ok(())
    }

    async fn get_pull_request(
        &self,
        _owner: &str,
        _repo: &str,
        pull_number: u64,
    ) -> Result<PullRequest, GitHubError> {
        self.record(Call::GetPullRequest(pull_number), Operation::GetPullRequest)?;
        self.pull_request.clone().ok_or(GitHubError::NotFound)
    }

    async fn list_labels_on_issue(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
    ) -> Result<Vec<Label>, GitHubError> {
        self.record(
            Call::ListLabelsOnIssue(issue_number),
            Operation::ListLabelsOnIssue,
        )?;
        Ok(self
            .issue_labels
            .get(&issue_number)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_labels(
        &self,
        _owner: &str,
        _repo: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<(), GitHubError> {
        self.record(
            Call::AddLabels {
                issue_number,
                labels: labels.to_vec(),
            },
            Operation::AddLabels,
        )
    }

    async fn list_pull_requests_for_commit(
        &self,
        _owner: &str,
        _repo: &str,
        sha: &str,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        self.record(
            Call::ListPullRequestsForCommit(sha.to_string()),
            Operation::ListPullRequestsForCommit,
        )?;
        Ok(self.commit_pulls.clone())
    }
}
