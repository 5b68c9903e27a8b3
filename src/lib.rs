// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
