//! Domain primitives, ports and use-cases for user accounts.
//!
//! Public surface:
//! - Error (alias to `error::DomainError`): transport-agnostic failure.
//! - User, UserId, UserProfile: persisted account shape.
//! - LoginCredentials, Password, TokenClaims, AccessToken: authentication.
//! - UserAccountService: default `AccountService` implementation.

mod account_service;
pub mod auth;
pub mod error;
pub mod ports;
mod trace_id;
pub mod user;

pub use self::account_service::UserAccountService;
pub use self::auth::{
    AccessToken, CredentialsValidationError, LoginCredentials, Password, Registration,
    TokenClaims,
};
pub use self::error::{DomainError, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, PasswordHash, User, UserId, UserProfile, UserValidationError};

/// Short alias used across adapters.
pub type Error = DomainError;
