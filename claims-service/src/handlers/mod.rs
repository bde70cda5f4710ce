//! HTTP handlers for the claims service.

pub mod claims;
pub mod health;
