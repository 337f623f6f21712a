//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the authentication layer.

pub mod post;
pub mod user;

pub use post::{PostInput, PostService};
pub use user::{LoginResponse, UserService, UserSummary};
