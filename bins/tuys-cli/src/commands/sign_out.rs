//! `tuys sign-out` - invalidate the session and clear the stored credential

use crate::output::Status;
use anyhow::Result;
use tuys_api_client::SessionStore;

pub async fn run() -> Result<()> {
    let (client, store) = super::build()?;

    client.auth().sign_out().await?;
    store.clear().await?;

    Status::success("signed out");
    Ok(())
}
