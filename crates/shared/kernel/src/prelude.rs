//! Everything a slice handler usually needs.

pub use crate::server::html::{found, page};
pub use crate::server::{ApiState, Session, SessionCookie, SessionStore};
pub use taco_domain::catalog::Catalog;
pub use taco_domain::validation::FieldErrors;
