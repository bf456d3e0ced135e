//! deskcalc library: configuration and dispatch for the desk calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
