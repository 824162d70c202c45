//! `tuys channels` - list story channels

use crate::output::{format_count, Status};
use anyhow::Result;

pub async fn run(format: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    let channels = client.channels().list().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&channels)?);
        return Ok(());
    }

    if channels.is_empty() {
        Status::info("no channels available");
        return Ok(());
    }

    Status::header("Channels");
    for channel in &channels {
        println!("{:>4}  {}", channel.id, channel.name);
    }
    println!();
    println!("{}", format_count(channels.len(), "channel", "channels"));
    Ok(())
}
