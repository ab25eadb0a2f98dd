pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod search;
pub mod validate;

#[cfg(feature = "cli")]
pub mod cli;
