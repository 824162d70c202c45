//! `tuys notifications` - list notifications or mark one as read

use crate::output::{format_count, Status};
use anyhow::Result;
use owo_colors::OwoColorize;

pub async fn run(mark_read: Option<i32>, format: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    if let Some(id) = mark_read {
        client.notifications().mark_read(id).await?;
        Status::success(&format!("notification {id} marked as read"));
        return Ok(());
    }

    let notifications = client.notifications().list().await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
        return Ok(());
    }

    if notifications.is_empty() {
        Status::info("no notifications");
        return Ok(());
    }

    Status::header("Notifications");
    for notification in &notifications {
        let marker = if notification.read { " " } else { "●" };
        println!(
            "{marker} {:>4}  {}  {}",
            notification.id,
            notification.text,
            notification.date.dimmed()
        );
    }

    let unread = notifications.iter().filter(|n| !n.read).count();
    println!();
    println!("{} unread", format_count(unread, "notification", "notifications"));
    Ok(())
}
