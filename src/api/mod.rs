//! Backend API
//!
//! Typed HTTP client for the e-waste reporting service.

pub mod client;

pub use client::*;
