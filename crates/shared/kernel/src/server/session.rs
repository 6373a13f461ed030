//! Per-session order storage.
//!
//! A session is identified by a random [`SessionId`] carried in a cookie. The
//! [`SessionStore`] maps ids to their in-progress [`TacoOrder`]; handlers receive
//! an explicit [`Session`] context through the axum extractor and never touch
//! the store directly.
//!
//! ```text
//! NoOrder --add_taco--> Accumulating --add_taco--> Accumulating
//!    ^                                                   |
//!    +-------------------- clear_order ------------------+
//! ```

use crate::error::format_context;
use crate::safe_nanoid;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponseParts, ResponseParts};
use moka::sync::Cache;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use taco_domain::config::SessionConfig;
use taco_domain::order::{CompletedOrder, OrderDetails, TacoOrder};
use taco_domain::validation::FieldErrors;
use taco_domain::taco::Taco;
use tracing::{debug, trace};

const SESSION_ID_LEN: usize = 24;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Opaque, unguessable session key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Arc<str>);

impl SessionId {
    #[must_use]
    pub fn generate() -> Self {
        Self(safe_nanoid!(SESSION_ID_LEN).into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything kept for one session. `order` is `None` until the first taco lands.
#[derive(Debug, Clone, Default)]
struct SessionData {
    order: Option<TacoOrder>,
}

struct SessionStoreInner {
    sessions: Cache<SessionId, SessionData>,
    cookie_name: String,
    secure: bool,
}

/// Bounded in-memory session storage with idle expiry.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("cookie_name", &self.inner.cookie_name)
            .field("secure", &self.inner.secure)
            .field("entries", &self.inner.sessions.entry_count())
            .finish()
    }
}

impl SessionStore {
    /// Builds a store from the `[session]` config section.
    ///
    /// `secure` adds the `Secure` attribute to issued cookies; set it when serving over TLS.
    ///
    /// # Errors
    /// Returns [`SessionError::Config`] for an empty or non-token cookie name or a zero capacity.
    pub fn from_config(cfg: &SessionConfig, secure: bool) -> Result<Self, SessionError> {
        validate_cookie_name(&cfg.cookie_name)?;
        if cfg.capacity == 0 {
            return Err(SessionError::Config {
                message: "capacity must be greater than zero".into(),
                context: None,
            });
        }

        let mut builder = Cache::<SessionId, SessionData>::builder().max_capacity(cfg.capacity);
        if cfg.idle_timeout_seconds > 0 {
            builder = builder.time_to_idle(Duration::from_secs(cfg.idle_timeout_seconds));
        }

        Ok(Self {
            inner: Arc::new(SessionStoreInner {
                sessions: builder.build(),
                cookie_name: cfg.cookie_name.clone(),
                secure,
            }),
        })
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.inner.cookie_name
    }

    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.inner.secure
    }

    /// Number of live sessions, after applying pending evictions.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.inner.sessions.run_pending_tasks();
        self.inner.sessions.entry_count()
    }

    /// Registers a new session without an order.
    #[must_use]
    pub fn create(&self) -> SessionId {
        let id = SessionId::generate();
        self.inner.sessions.insert(id.clone(), SessionData::default());
        id
    }

    /// Whether `id` names a live session. Counts as an access for idle expiry.
    #[must_use]
    pub fn contains(&self, id: &SessionId) -> bool {
        self.inner.sessions.get(id).is_some()
    }

    /// Snapshot of the session's order, if one has been started.
    #[must_use]
    pub fn peek(&self, id: &SessionId) -> Option<TacoOrder> {
        self.inner.sessions.get(id).and_then(|data| data.order)
    }

    /// Appends `taco`, starting the order if needed. Returns the new taco count.
    pub fn add_taco(&self, id: &SessionId, taco: Taco) -> usize {
        let entry = self.inner.sessions.entry(id.clone()).and_upsert_with(|existing| {
            let mut data = existing.map(moka::Entry::into_value).unwrap_or_default();
            data.order.get_or_insert_with(TacoOrder::new).add_taco(taco);
            data
        });
        entry.value().order.as_ref().map_or(0, TacoOrder::len)
    }

    /// Drops the session's order and returns it. The session itself stays valid.
    pub fn clear_order(&self, id: &SessionId) -> Option<TacoOrder> {
        let mut taken = None;
        self.inner.sessions.entry(id.clone()).and_upsert_with(|existing| {
            let mut data = existing.map(moka::Entry::into_value).unwrap_or_default();
            taken = data.order.take();
            data
        });
        taken
    }

    /// Completes the session's order with `details` and removes it, in one step.
    ///
    /// Returns `None` when no order is in progress. On invalid details the order
    /// stays in place and the rejected fields are returned. A taco added concurrently
    /// lands either in the completed order or in a fresh one, never in between.
    pub fn complete_order(
        &self,
        id: &SessionId,
        details: OrderDetails,
    ) -> Option<Result<CompletedOrder, FieldErrors>> {
        let mut outcome = None;
        self.inner.sessions.entry(id.clone()).and_upsert_with(|existing| {
            let mut data = existing.map(moka::Entry::into_value).unwrap_or_default();
            if let Some(order) = data.order.take() {
                match order.clone().complete(details) {
                    Ok(completed) => outcome = Some(Ok(completed)),
                    Err(errors) => {
                        data.order = Some(order);
                        outcome = Some(Err(errors));
                    },
                }
            }
            data
        });
        outcome
    }

    /// Forgets the session entirely.
    pub fn remove(&self, id: &SessionId) {
        self.inner.sessions.invalidate(id);
    }
}

fn validate_cookie_name(name: &str) -> Result<(), SessionError> {
    let valid = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));
    if valid {
        Ok(())
    } else {
        Err(SessionError::Config {
            message: format!("invalid cookie name '{name}'").into(),
            context: Some("session.cookie_name".into()),
        })
    }
}

/// Finds the value of cookie `name` across all `Cookie` headers.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find_map(|(key, value)| (key == name).then_some(value))
        .filter(|value| !value.is_empty())
}

/// The per-request session context.
///
/// Extracting a `Session` never fails: an absent or unknown cookie yields a freshly
/// created session, which handlers announce by returning [`Session::cookie`].
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    store: SessionStore,
    fresh: bool,
}

impl Session {
    #[must_use]
    pub const fn id(&self) -> &SessionId {
        &self.id
    }

    /// `true` when the session was created by this request.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.fresh
    }

    /// The in-progress order, or an empty one when none has been started.
    #[must_use]
    pub fn order(&self) -> TacoOrder {
        self.store.peek(&self.id).unwrap_or_default()
    }

    /// The in-progress order, `None` before the first taco.
    #[must_use]
    pub fn try_order(&self) -> Option<TacoOrder> {
        self.store.peek(&self.id)
    }

    pub fn add_taco(&self, taco: Taco) -> usize {
        self.store.add_taco(&self.id, taco)
    }

    pub fn clear_order(&self) -> Option<TacoOrder> {
        self.store.clear_order(&self.id)
    }

    /// See [`SessionStore::complete_order`].
    pub fn complete_order(
        &self,
        details: OrderDetails,
    ) -> Option<Result<CompletedOrder, FieldErrors>> {
        self.store.complete_order(&self.id, details)
    }

    /// `Set-Cookie` response part for a new session; empty otherwise.
    #[must_use]
    pub fn cookie(&self) -> SessionCookie {
        if !self.fresh {
            return SessionCookie(None);
        }
        let raw = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax{}",
            self.store.cookie_name(),
            self.id,
            if self.store.secure_cookies() { "; Secure" } else { "" },
        );
        SessionCookie(HeaderValue::try_from(raw).ok())
    }
}

impl<S> FromRequestParts<S> for Session
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = SessionStore::from_ref(state);

        let known = cookie_value(&parts.headers, store.cookie_name())
            .map(SessionId::from)
            .filter(|id| store.contains(id));

        let session = match known {
            Some(id) => {
                trace!(session = %id, "Session resumed");
                Self { id, store, fresh: false }
            },
            None => {
                let id = store.create();
                debug!(session = %id, "Session created");
                Self { id, store, fresh: true }
            },
        };

        Ok(session)
    }
}

/// Optional `Set-Cookie` header carrying the session id.
#[derive(Debug, Clone)]
pub struct SessionCookie(Option<HeaderValue>);

impl IntoResponseParts for SessionCookie {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if let Some(value) = self.0 {
            res.headers_mut().append(header::SET_COOKIE, value);
        }
        Ok(res)
    }
}
