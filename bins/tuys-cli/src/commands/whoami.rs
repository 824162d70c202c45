//! `tuys whoami` - show the signed-in user

use crate::output::Status;
use anyhow::Result;

pub async fn run(format: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    let me = client.users().me().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&me)?);
        return Ok(());
    }

    println!("{} (id {})", me.username, me.id);
    if me.status != "ACTIVE" {
        Status::warning(&format!("account status: {}", me.status));
    }
    Ok(())
}
