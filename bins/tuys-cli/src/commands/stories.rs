//! `tuys stories` - list stories, globally or for one channel

use crate::output::{format_count, Status};
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(channel: Option<i32>, format: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    let stories = match channel {
        Some(channel_id) => client.stories().list_from_channel(channel_id).await?,
        None => client.stories().list().await?,
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stories)?);
        return Ok(());
    }

    if stories.is_empty() {
        Status::info("no stories here yet");
        return Ok(());
    }

    Status::header("Stories");
    for story in &stories {
        println!(
            "{:>4}  {}  {}",
            story.id,
            story.title,
            format!("@{} · {} · ♥ {}", story.owner.username, story.channel, story.likes).dimmed()
        );
    }
    println!();
    println!("{}", format_count(stories.len(), "story", "stories"));
    Ok(())
}
