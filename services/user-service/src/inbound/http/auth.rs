//! Bearer-token gate for protected endpoints.
//!
//! Handlers opt in by taking an [`AuthenticatedUser`] argument. The token is
//! the second space-separated part of the `Authorization` header. A missing
//! header, or one with no second part, yields `401`; anything else that fails
//! verification, including an empty token or a non-`Bearer` scheme, yields
//! `403`.

use std::future::{Ready, ready};

use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use tracing::debug;

use crate::domain::ports::TokenError;
use crate::domain::{Error, TokenClaims, UserId};
use crate::inbound::http::state::HttpState;

/// Claims of a verified bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(TokenClaims);

impl AuthenticatedUser {
    /// Account identifier embedded in the token.
    pub fn user_id(&self) -> UserId {
        self.0.user_id()
    }

    /// Email embedded in the token.
    pub fn email(&self) -> &str {
        self.0.email.as_str()
    }

    /// Decoded token claims.
    pub fn claims(&self) -> &TokenClaims {
        &self.0
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("authorization token required"))?;
    let raw = value
        .to_str()
        .map_err(|_| Error::forbidden("invalid token"))?;
    raw.split(' ')
        .nth(1)
        .ok_or_else(|| Error::unauthorized("authorization token required"))
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not registered"))?;
    let token = bearer_token(req.headers())?;
    state
        .tokens
        .verify(token)
        .map(AuthenticatedUser)
        .map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            match err {
                TokenError::Expired => Error::forbidden("token has expired"),
                _ => Error::forbidden("invalid token"),
            }
        })
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
