use anyhow::{Context, Result};
use azure_core::auth::TokenCredential;
use azure_identity::DefaultAzureCredentialBuilder;
use azure_storage::StorageCredentials;
use std::sync::Arc;
use tracing::debug;

/// Knobs for the default credential chain
#[derive(Debug, Clone, Default)]
pub struct CredentialOptions {
    /// Skip the managed identity source
    pub exclude_managed_identity: bool,
}

/// Ambient Azure credential: environment, managed identity, then Azure CLI.
pub fn default_credential(options: &CredentialOptions) -> Result<Arc<dyn TokenCredential>> {
    let mut builder = DefaultAzureCredentialBuilder::new();
    if options.exclude_managed_identity {
        builder.exclude_managed_identity_credential();
    }
    let credential = builder
        .build()
        .context("Failed to build default Azure credential")?;

    debug!(
        exclude_managed_identity = options.exclude_managed_identity,
        "Built default Azure credential"
    );
    Ok(Arc::new(credential))
}

/// Storage credentials backed by the default credential chain
pub fn storage_credentials(options: &CredentialOptions) -> Result<StorageCredentials> {
    Ok(StorageCredentials::token_credential(default_credential(
        options,
    )?))
}
