//! Azure Table service listing on top of `azure_data_tables`.

use anyhow::Result;
use azure_data_tables::clients::{TableServiceClient, TableServiceClientBuilder};
use azure_storage::{CloudLocation, StorageCredentials};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// One table in the storage account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableItem {
    pub name: String,
}

/// Table service client bound to one account endpoint
pub struct TableLister {
    client: TableServiceClient,
    endpoint: String,
}

impl TableLister {
    pub fn new(account: &str, endpoint: impl Into<String>, credentials: StorageCredentials) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        let location = CloudLocation::Custom {
            account: account.to_string(),
            uri: endpoint.clone(),
        };
        let client = TableServiceClientBuilder::with_location(location, credentials).build();

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Lazily enumerate every table. The SDK follows continuation tokens;
    /// entries are yielded in service order and the stream ends after the first error.
    pub fn list_tables(&self) -> impl Stream<Item = Result<TableItem>> + 'static {
        self.client
            .list()
            .into_stream()
            .map_err(anyhow::Error::from)
            .map_ok(|page| {
                debug!(
                    count = page.tables.len(),
                    more = page.continuation_next_table_name.is_some(),
                    "Received tables page"
                );
                stream::iter(
                    page.tables
                        .into_iter()
                        .map(|table| Ok::<_, anyhow::Error>(TableItem { name: table.name })),
                )
            })
            .try_flatten()
    }
}
