//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod card;
pub mod dashboard;
pub mod deck;
pub mod generate;
