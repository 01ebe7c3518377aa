//! Typed blocking client for the public Roblox web APIs.
//!
//! # Overview
//! Three services cover the users, groups and games namespaces. Each
//! operation builds an `HttpRequest`, hands it to the shared [`Transport`],
//! and parses the `HttpResponse` into a typed record. Every failure comes
//! back as an [`ApiError`].
//!
//! ```no_run
//! let client = roblox_core::RobloxClient::new();
//! let user = client.users.get(1)?;
//! println!("{}", user.display_name);
//! # Ok::<(), roblox_core::ApiError>(())
//! ```
//!
//! # Design
//! - Every operation is split into `build_*` (pure request construction),
//!   `parse_*` (status check and decode) and a method that runs both around
//!   the transport, so request and response handling test without a network.
//! - Services receive the transport by injection; one `UreqTransport` is
//!   shared by all of them.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod games;
pub mod groups;
pub mod http;
pub mod transport;
pub mod types;
pub mod users;

pub use client::RobloxClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use games::{Games, MAX_RECOMMENDED_ROWS};
pub use groups::Groups;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Game, GameCreator, GameMedia, Group, GroupMember, GroupShout, RecommendedGame, User,
    UsernameMatch, UsernameSearch,
};
pub use users::Users;
