//! Stillcast - static-image music video builder
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod console;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod tools;

pub use error::{Error, Result};
