//! Centralized API client for the TUYS storytelling backend
//!
//! This crate provides a typed async HTTP client for the TUYS REST API:
//! channels, stories, comments, users, notifications, ranking, and
//! authentication.
//!
//! # Features
//!
//! - **Environment-based configuration**: Load the base URL and timeout from
//!   environment variables
//! - **Injected session storage**: The bearer credential is read fresh from a
//!   [`SessionStore`](session::SessionStore) on every call, so sign-ins made
//!   elsewhere are picked up immediately
//! - **Uniform error envelope**: Any response with status 400 or above
//!   becomes an [`ApiError::Api`] carrying the status code and the parsed
//!   error body
//! - **Request correlation**: Track requests with unique IDs for debugging
//!
//! # Example
//!
//! ```rust,no_run
//! use tuys_api_client::TuysClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with environment configuration
//!     let client = TuysClient::new()?;
//!
//!     // Browse channels
//!     let channels = client.channels().list().await?;
//!     println!("{} channels", channels.len());
//!
//!     // Fetch the story ranking
//!     let ranking = client.ranking().list().await?;
//!     if let Some(best) = ranking.first() {
//!         println!("top story: {}", best.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;

pub use client::TuysClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::TuysClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{
        AuthApi, ChannelsApi, NotificationsApi, RankingApi, StoriesApi, UsersApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
}
