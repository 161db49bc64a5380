//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: MongoDB-backed review repository

pub mod persistence;
