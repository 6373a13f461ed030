//! HTTP plumbing shared by the feature slices.

pub mod health;
pub mod home;
pub mod html;
pub mod router;
pub mod session;
pub mod state;

pub use session::{Session, SessionCookie, SessionError, SessionId, SessionStore};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
