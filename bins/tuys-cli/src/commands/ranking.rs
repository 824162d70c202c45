//! `tuys ranking` - show the best-ranked stories
//!
//! Renders the same numbered list the web ranking page shows: position,
//! story, author.

use crate::output::Status;
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(format: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    let stories = client.ranking().list().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stories)?);
        return Ok(());
    }

    if stories.is_empty() {
        Status::info("the ranking is empty");
        return Ok(());
    }

    Status::header("Ranking");
    for (index, story) in stories.iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            index + 1,
            story.title,
            format!("@{} · ♥ {}", story.owner.username, story.likes).dimmed()
        );
    }
    Ok(())
}
