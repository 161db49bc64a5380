//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountService, TokenCodec};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountService>,
    pub tokens: Arc<dyn TokenCodec>,
}

impl HttpState {
    /// Bundle the account use-cases with the codec used by the token gate.
    pub fn new(accounts: Arc<dyn AccountService>, tokens: Arc<dyn TokenCodec>) -> Self {
        Self { accounts, tokens }
    }
}
