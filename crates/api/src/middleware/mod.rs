//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the calling user from a JWT Bearer token.

pub mod auth;
