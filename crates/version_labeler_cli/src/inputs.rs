//! Action inputs: command-line arguments with environment fallbacks.
//!
//! Every input can be passed as an argument or picked up from the variables a
//! GitHub Actions runner sets. Runners set unused `INPUT_*` variables to an
//! empty string, so empty values count as absent.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::Args;
use github_client::{create_token_client, GitHubClient, RepositoryClient};
use secrecy::SecretString;
use tracing::{debug, info, instrument};
use version_labeler_core::{LabelCatalog, PullNumber, PullRequestLocator, RepositoryPath};

use crate::{config::AppConfig, errors::Error};

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;

/// Environment variable checked for the token when `--token` is not set
pub const TOKEN_FALLBACK_ENV: &str = "GITHUB_TOKEN";

/// Arguments shared by all subcommands.
#[derive(Args, Clone, Default)]
pub struct GlobalArgs {
    /// Repository in `owner/repo` form (or set `GITHUB_REPOSITORY`)
    #[arg(long, global = true, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub token (or set `INPUT_GITHUB-TOKEN` or `GITHUB_TOKEN`)
    #[arg(long, global = true, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise Server (or set `GITHUB_API_URL`)
    #[arg(long, global = true, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Path to the TOML configuration file (or set `INPUT_CONFIG`)
    #[arg(long, global = true, env = "INPUT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .field("api_url", &self.api_url)
            .field("config", &self.config)
            .finish()
    }
}

impl GlobalArgs {
    pub fn repository(&self) -> Result<RepositoryPath, Error> {
        let value = non_empty(self.repository.as_deref()).ok_or_else(|| {
            Error::MissingInput("repository (--repository or GITHUB_REPOSITORY)".to_string())
        })?;
        Ok(RepositoryPath::parse(value)?)
    }

    pub fn token(&self) -> Result<SecretString, Error> {
        if let Some(token) = non_empty(self.token.as_deref()) {
            return Ok(SecretString::from(token.to_string()));
        }

        match std::env::var(TOKEN_FALLBACK_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(SecretString::from(token)),
            _ => Err(Error::MissingInput(
                "token (--token, INPUT_GITHUB-TOKEN or GITHUB_TOKEN)".to_string(),
            )),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// Arguments that identify the pull request to label.
#[derive(Args, Debug, Clone, Default)]
pub struct PullRequestArgs {
    /// Pull request number (or set `INPUT_PULL-NUMBER`)
    #[arg(long, env = "INPUT_PULL-NUMBER")]
    pub pull_number: Option<String>,

    /// Path of the workflow event payload (or set `GITHUB_EVENT_PATH`)
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Commit used to look up the pull request (or set `GITHUB_SHA`)
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,
}

impl PullRequestArgs {
    /// Resolves the pull request number for this run.
    ///
    /// Checked in order: the explicit number, the event payload, and the open
    /// pull requests associated with the commit. Returns `None` when none of
    /// them yields a pull request.
    ///
    /// # Errors
    ///
    /// * `Error::Validation` - The explicit number is not a positive integer
    /// * `Error::EventPayload` - The event payload cannot be read or parsed
    /// * `Error::Labeler` - The commit lookup failed
    #[instrument(skip(self, locator))]
    pub async fn resolve(&self, locator: &PullRequestLocator) -> Result<Option<PullNumber>, Error> {
        if let Some(value) = non_empty(self.pull_number.as_deref()) {
            let number: PullNumber = value.parse()?;
            debug!(pull_number = %number, "Using pull request number from input");
            return Ok(Some(number));
        }

        if let Some(path) = self
            .event_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
        {
            if let Some(number) = pull_number_from_event(path)? {
                debug!(pull_number = %number, "Using pull request number from event payload");
                return Ok(Some(number));
            }
        }

        if let Some(sha) = non_empty(self.sha.as_deref()) {
            let found = locator.find_for_commit(sha).await?;
            if let Some(number) = found {
                info!(pull_number = %number, sha, "Found pull request for commit");
            }
            return Ok(found);
        }

        Ok(None)
    }
}

/// Reads the pull request number from a workflow event payload.
///
/// Looks at `pull_request.number` first and the top level `number` second.
/// Returns `None` for events that carry neither, such as `push`.
pub fn pull_number_from_event(path: &Path) -> Result<Option<PullNumber>, Error> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::EventPayload(format!("Failed to read event payload {:?}: {}", path, e))
    })?;

    let payload: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::EventPayload(format!("Failed to parse event payload: {}", e)))?;

    let number = payload
        .pointer("/pull_request/number")
        .or_else(|| payload.get("number"))
        .and_then(serde_json::Value::as_u64);

    Ok(number.map(PullNumber::new).transpose()?)
}

/// Everything a subcommand needs to talk to one repository.
pub struct ActionContext {
    pub client: Arc<dyn RepositoryClient>,
    pub repository: RepositoryPath,
    pub config: AppConfig,
    pub catalog: Arc<LabelCatalog>,
}

impl ActionContext {
    /// Creates a context, validating the label catalog of the configuration.
    pub fn new(
        client: Arc<dyn RepositoryClient>,
        repository: RepositoryPath,
        config: AppConfig,
    ) -> Result<Self, Error> {
        let catalog = Arc::new(config.catalog()?);
        Ok(Self {
            client,
            repository,
            config,
            catalog,
        })
    }

    /// Builds the context from the global arguments.
    ///
    /// Inputs and configuration are validated before the GitHub client is created.
    pub fn from_args(args: &GlobalArgs) -> Result<Self, Error> {
        let repository = args.repository()?;
        let config = AppConfig::resolve(args.config_path())?;
        let token = args.token()?;

        let octocrab = create_token_client(&token, non_empty(args.api_url.as_deref()))
            .map_err(Error::Client)?;

        Self::new(Arc::new(GitHubClient::new(octocrab)), repository, config)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
