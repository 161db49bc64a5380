//! Account service library modules.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

pub use middleware::Trace;
