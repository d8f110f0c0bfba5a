pub mod auth;
pub mod commands;
pub mod config;

use clap::Parser;

#[derive(Parser)]
#[command(name = "aztables")]
#[command(about = "List the tables in an Azure storage account")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Path to a .env file (defaults to searching for .env from the current directory up)
    #[arg(long, env = "AZTABLES_ENV_FILE")]
    pub env_file: Option<String>,

    /// Skip managed identity when resolving Azure credentials ("true" or "1" to enable)
    #[arg(
        long,
        alias = "excludeMI",
        value_name = "BOOL",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "false",
        value_parser = parse_toggle
    )]
    pub exclude_managed_identity: bool,
}

/// "true" and "1" (any case) enable; everything else disables
fn parse_toggle(value: &str) -> Result<bool, String> {
    Ok(value.eq_ignore_ascii_case("true") || value == "1")
}
