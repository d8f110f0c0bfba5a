use anyhow::Result;
use futures::{Stream, TryStreamExt};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::azure::tables::{TableItem, TableLister};
use crate::cli::auth::{storage_credentials, CredentialOptions};
use crate::cli::config::{load_env_file, Config};
use crate::cli::ListArgs;

pub const BANNER_SEPARATOR: &str = "----------------------------------------";

/// Write the banner, then each table name as the stream yields it.
///
/// Returns the number of tables written. The first stream error is returned as-is.
pub async fn write_listing<S, W>(account: &str, tables: S, out: &mut W) -> Result<usize>
where
    S: Stream<Item = Result<TableItem>>,
    W: Write,
{
    writeln!(out, "Listing tables in {}:", account)?;
    writeln!(out, "{}", BANNER_SEPARATOR)?;
    out.flush()?;

    let mut tables = std::pin::pin!(tables);
    let mut count = 0;
    while let Some(table) = tables.try_next().await? {
        writeln!(out, "{}", table.name)?;
        out.flush()?;
        count += 1;
    }

    Ok(count)
}

/// List every table in the configured account to `out`
pub async fn list_account<W: Write>(
    client: &TableLister,
    account: &str,
    out: &mut W,
) -> Result<usize> {
    let count = write_listing(account, client.list_tables(), out).await?;
    info!(account = %account, count, "Listed tables");
    Ok(count)
}

pub async fn execute_list(args: ListArgs) -> Result<()> {
    load_env_file(args.env_file.as_deref().map(Path::new))?;
    let config = Config::from_env()?;

    let options = CredentialOptions {
        exclude_managed_identity: args.exclude_managed_identity,
    };
    info!(
        exclude_managed_identity = options.exclude_managed_identity,
        "Resolving default Azure credential"
    );
    let credentials = storage_credentials(&options)?;

    let endpoint = config.endpoint();
    info!(
        endpoint = %endpoint,
        subscription_id = %config.subscription_id,
        "Connecting to table service"
    );
    let client = TableLister::new(&config.storage_account_name, endpoint, credentials);

    let mut stdout = std::io::stdout();
    list_account(&client, &config.storage_account_name, &mut stdout).await?;

    Ok(())
}
