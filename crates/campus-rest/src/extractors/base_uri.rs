//! Base URI extractor for hypermedia links.

use crate::{responses::AppError, state::AppState};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, uri::Authority},
};
use campus_core::{CampusError, CampusResult, LinkBase};

/// The absolute base every link in the response is built from.
///
/// Uses the configured public base when there is one, otherwise
/// `http://{Host}` of the request.
#[derive(Debug, Clone)]
pub struct BaseUri(pub LinkBase);

#[async_trait]
impl FromRequestParts<AppState> for BaseUri {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(base) = &state.public_base {
            return Ok(Self(base.clone()));
        }

        Ok(Self(request_base(parts)?))
    }
}

/// Builds the link base from the `Host` header, falling back to the request
/// URI's authority and then to `localhost`.
fn request_base(parts: &Parts) -> CampusResult<LinkBase> {
    let host = match parts.headers.get(header::HOST) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| CampusError::validation("Invalid Host header"))?,
        ),
        None => parts.uri.authority().map(Authority::as_str),
    };

    let authority = match host {
        Some(raw) => host_authority(raw)?,
        None => Authority::from_static("localhost"),
    };

    LinkBase::parse(&format!("http://{}", authority))
}

/// Accepts `host[:port]` only; userinfo or path characters are rejected.
fn host_authority(raw: &str) -> CampusResult<Authority> {
    let authority: Authority = raw
        .parse()
        .map_err(|_| CampusError::validation(format!("Invalid Host header '{}'", raw)))?;

    if authority.as_str().contains('@') {
        return Err(CampusError::validation(format!("Invalid Host header '{}'", raw)));
    }

    Ok(authority)
}
