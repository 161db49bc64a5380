//! HTTP inbound adapter exposing the account REST endpoints.

pub mod auth;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;
