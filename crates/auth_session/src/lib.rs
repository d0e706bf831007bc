//! # Auth Session
//!
//! Owns the signed-in user's session: sign-in, sign-out, and profile
//! updates, persisted as a single record so the session survives process
//! restarts. The UI layer observes a read-only snapshot and invokes the
//! operations; persistence, authentication, and navigation are pluggable
//! collaborators.

pub mod auth;
pub mod error;
pub mod manager;
pub mod navigator;
pub mod storage;
pub mod structs;

// Re-exports
pub use auth::{AuthService, PlaceholderAuthService};
pub use error::SessionError;
pub use manager::SessionManager;
pub use navigator::{Navigator, NullNavigator, RouteGroup};
pub use storage::{FileStore, MemoryStore, SessionStore};
pub use structs::{Credentials, Session, SessionPhase, SessionSnapshot, UserUpdate};
