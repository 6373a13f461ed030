use super::session::{SessionError, SessionStore};
use crate::error::format_context;
use axum::extract::FromRef;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Instant;
use taco_domain::catalog::Catalog;
use taco_domain::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State session store error{}: {source}", format_context(.context))]
    Session { source: SessionError, context: Option<Cow<'static, str>> },
}

impl From<SessionError> for ApiStateError {
    fn from(source: SessionError) -> Self {
        Self::Session { source, context: None }
    }
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub catalog: Catalog,
    pub sessions: SessionStore,
    /// When the state was built; the reference point for reported uptime.
    pub started_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for Catalog {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.catalog
    }
}

impl FromRef<ApiState> for SessionStore {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.sessions.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    catalog: Option<Catalog>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Overrides the ingredient catalog; defaults to [`Catalog::standard`].
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Finalizes the state and creates the session store.
    ///
    /// # Errors
    /// Returns an error if no config was supplied or the session settings are invalid.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
            context: None,
        })?;
        let catalog = self.catalog.unwrap_or_default();
        let secure = config.server.ssl.is_some();
        let sessions = SessionStore::from_config(&config.session, secure).map_err(|source| {
            ApiStateError::Session { source, context: Some("Failed to create session store".into()) }
        })?;

        let inner = ApiStateInner { config, catalog, sessions, started_at: Instant::now() };
        Ok(ApiState { inner: Arc::new(inner) })
    }
}
