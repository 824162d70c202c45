//! `tuys sign-in` - authenticate and persist the session

use crate::output::Status;
use anyhow::Result;
use tuys_api_client::endpoints::auth::SignIn;
use tuys_api_client::SessionStore;

pub async fn run(email: &str, password: &str, format: &str) -> Result<()> {
    let (client, store) = super::build()?;

    let body = SignIn {
        email: email.to_string(),
        password: password.to_string(),
    };
    let user = client.auth().sign_in(&body).await?;

    store.save(&user.to_session()).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    Status::success(&format!("signed in as {}", user.username));
    Ok(())
}
