//! Configuration loading, secret resolution, and service bootstrap.

pub mod bootstrap;
pub mod config;
pub mod vault;
