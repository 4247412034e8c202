//! vercel-purge library
//!
//! Deletes the still-active Vercel deployments of a deleted git branch.

pub mod app;
pub mod errors;
pub mod http;
pub mod logs;
pub mod models;
pub mod purge;
pub mod utils;
