//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a specific set of backend endpoints.
//!
//! ## Mapping to the TUYS backend
//!
//! | Module | Paths | Description |
//! |--------|-------|-------------|
//! | `channels` | `/channels` | Story channel listing |
//! | `stories` | `/stories/*` | Story CRUD, likes, comments, denounces |
//! | `users` | `/users/*` | Profiles, registration data, follows |
//! | `ranking` | `/ranking` | Best-ranked stories |
//! | `notifications` | `/notifications/*` | Notification feed and read marks |
//! | `auth` | `/auth/*` | Sign-up, sign-in, sign-out, Google OAuth |

pub mod auth;
pub mod channels;
pub mod notifications;
pub mod ranking;
pub mod stories;
pub mod users;

pub use auth::AuthApi;
pub use channels::ChannelsApi;
pub use notifications::NotificationsApi;
pub use ranking::RankingApi;
pub use stories::StoriesApi;
pub use users::UsersApi;
