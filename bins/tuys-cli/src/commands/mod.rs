//! CLI subcommand implementations

pub mod channels;
pub mod notifications;
pub mod ranking;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod stories;
pub mod whoami;

use anyhow::Result;
use std::sync::Arc;
use tuys_api_client::{ClientConfig, FileSessionStore, TuysClient};

/// Build the API client and the session store it reads from
///
/// The store handle is returned separately because the sign-in and sign-out
/// flows own the session lifecycle; the client itself only ever reads it.
pub(crate) fn build() -> Result<(TuysClient, Arc<FileSessionStore>)> {
    let store = Arc::new(FileSessionStore::new()?);
    let config = ClientConfig::from_env()?;
    let client = TuysClient::with_config(config, store.clone())?;
    Ok((client, store))
}
