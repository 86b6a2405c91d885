//! Murmur - a terminal client for the murmur social feed
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod traits;
pub mod views;
