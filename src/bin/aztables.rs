use aztables::cli::{commands, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    aztables::init_tracing();

    commands::execute_list(cli.list).await
}
