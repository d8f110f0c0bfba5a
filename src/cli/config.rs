use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
pub const ENV_STORAGE_ACCOUNT_NAME: &str = "STORAGE_ACCOUNT_NAME";
pub const DEFAULT_ENV_FILE: &str = ".env";

const MISSING_CONFIG: &str =
    "Please set AZURE_SUBSCRIPTION_ID and STORAGE_ACCOUNT_NAME in .env file";

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub subscription_id: String,
    pub storage_account_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        match (
            non_empty(ENV_SUBSCRIPTION_ID),
            non_empty(ENV_STORAGE_ACCOUNT_NAME),
        ) {
            (Some(subscription_id), Some(storage_account_name)) => Ok(Self {
                subscription_id,
                storage_account_name,
            }),
            _ => anyhow::bail!(MISSING_CONFIG),
        }
    }

    pub fn endpoint(&self) -> String {
        table_endpoint(&self.storage_account_name)
    }
}

/// Table service endpoint for a storage account
pub fn table_endpoint(account: &str) -> String {
    format!("https://{}.table.core.windows.net", account)
}

/// Populate the process environment from a `.env` file.
///
/// Without an explicit path, `.env` is searched for in the current directory
/// and its ancestors, and a missing file is not an error. An explicit path
/// must exist. Variables already set in the environment win.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    load_env_file_in(&cwd, path)
}

fn load_env_file_in(dir: &Path, path: Option<&Path>) -> Result<Option<PathBuf>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match find_env_file(dir) {
            Some(found) => found,
            None => {
                debug!("No {} file found, using process environment", DEFAULT_ENV_FILE);
                return Ok(None);
            }
        },
    };

    dotenvy::from_path(&path)
        .with_context(|| format!("Failed to load env file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded env file");
    Ok(Some(path))
}

fn find_env_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|d| d.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}
