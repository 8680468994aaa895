//! Reads the payload of a session token without checking its signature.
//!
//! The backend signs and enforces tokens. Anything decoded here only drives
//! what the client shows, so a forged role fools the client's own navigation
//! and nothing else. The header and signature segments are never parsed.

use std::string::FromUtf8Error;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;

use crate::types::user::{CurrentUser, Role, SubjectId};

#[derive(Debug, thiserror::Error)]
pub(crate) enum DecodeError {
    #[error("Empty token")]
    Empty,
    #[error("Malformed token")]
    Malformed,
    #[error("Token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("Token payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("Token claims could not be parsed: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Claims {
    pub(crate) subject_id: SubjectId,
    pub(crate) role: Role,
    /// Epoch seconds, possibly fractional.
    pub(crate) expires_at: f64,
}

impl Claims {
    pub(crate) fn current_user(&self) -> CurrentUser {
        CurrentUser {
            id: self.subject_id.clone(),
            role: self.role,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for SubjectId {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
struct RawClaims {
    id: Option<RawId>,
    sub: Option<RawId>,
    role: Role,
    exp: f64,
}

#[derive(Deserialize)]
struct Expiry {
    exp: f64,
}

fn decode_payload<T: DeserializeOwned>(token: &str) -> Result<T, DecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let segments = token.split('.').collect::<Vec<_>>();
    let [_, payload, _] = segments.as_slice() else {
        return Err(DecodeError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let json = String::from_utf8(bytes)?;

    Ok(serde_json::from_str(&json)?)
}

/// Decodes the full claim set. The subject comes from `id`, falling back to
/// `sub`. An unknown role or a missing field is an error.
pub(crate) fn decode(token: &str) -> Result<Claims, DecodeError> {
    let raw = decode_payload::<RawClaims>(token)?;

    let id = raw
        .id
        .or(raw.sub)
        .ok_or_else(|| serde_json::Error::missing_field("id"))?;

    Ok(Claims {
        subject_id: id.into(),
        role: raw.role,
        expires_at: raw.exp,
    })
}

/// Decodes only `exp`, in epoch seconds.
pub(crate) fn decode_expiry(token: &str) -> Result<f64, DecodeError> {
    Ok(decode_payload::<Expiry>(token)?.exp)
}
