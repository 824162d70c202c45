//! `tuys sign-up` - register a new account

use crate::output::Status;
use anyhow::Result;
use tuys_api_client::endpoints::auth::SignUp;

pub async fn run(username: &str, avatar: &str, email: &str, password: &str) -> Result<()> {
    let (client, _store) = super::build()?;

    let body = SignUp {
        username: username.to_string(),
        avatar: avatar.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    client.auth().sign_up(&body).await?;

    Status::success(&format!("account {username} created, sign in to start"));
    Ok(())
}
