use std::sync::Arc;

use chrono::Utc;

use crate::core::error::Error;
use crate::token::claims::{self, Claims};
use crate::token::store::TokenStore;
use crate::types::user::{CurrentUser, Role};

/// Who, if anyone, is logged in.
///
/// Backed by one stored token. Every query re-decodes that token, so the answer
/// is only as fresh as the token: a token revoked by the backend keeps reading as
/// authenticated until its `exp` passes.
#[derive(Clone)]
pub(crate) struct Session {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl Session {
    pub(crate) fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Replaces whatever token was stored. The token is not inspected here.
    pub(crate) fn login(&self, token: &str) -> Result<(), Error> {
        self.store.write(token)?;
        tracing::debug!("session token stored");
        Ok(())
    }

    pub(crate) fn logout(&self) -> Result<(), Error> {
        self.store.remove()?;
        tracing::debug!("session token removed");
        Ok(())
    }

    pub(crate) fn token(&self) -> Option<String> {
        match self.store.read() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("failed to read session token: {}", e);
                None
            }
        }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        let Some(token) = self.token() else {
            return false;
        };

        match claims::decode_expiry(&token) {
            Ok(exp) => exp > now(),
            Err(e) => {
                tracing::debug!("treating session as logged out: {}", e);
                false
            }
        }
    }

    pub(crate) fn user_role(&self) -> Option<Role> {
        self.claims().map(|claims| claims.role)
    }

    pub(crate) fn current_user(&self) -> Option<CurrentUser> {
        self.claims().map(|claims| claims.current_user())
    }

    fn claims(&self) -> Option<Claims> {
        claims::decode(&self.token()?).ok()
    }
}

/// Current time in fractional epoch seconds.
fn now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
