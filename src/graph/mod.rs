//! Social Graph Module
//!
//! Users, symmetric friendships and directional profile-visit counters.
//!
//! - **User** - immutable identity plus friend set and visit counts
//! - **Store** - the [`SocialGraph`] arena that owns every user
//! - **Shared** - a lock-guarded handle for use across threads

pub mod shared;
pub mod store;
pub mod user;

pub use shared::SharedGraph;
pub use store::SocialGraph;
pub use user::User;
