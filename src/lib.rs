// src/lib.rs
pub mod azure;
pub mod cli;
mod logging;

pub use azure::tables::{TableItem, TableLister};
pub use cli::auth::{default_credential, storage_credentials, CredentialOptions};
pub use cli::config::Config;
pub use logging::init_tracing;
