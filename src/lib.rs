//! Exercise tracker: an in-memory HTTP API for users and their logged
//! exercises.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod services;
