//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod post;
pub mod user;

pub use post::{PostRecord, PostRepository};
pub use user::{UserRecord, UserRepository};
