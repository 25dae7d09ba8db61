// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;
pub mod error;
pub mod config;
pub mod core;

pub mod scan;
pub mod manifest;
pub mod table;

pub mod file;
pub mod progress;
pub mod runner;
pub mod cli;

pub use error::{Error, Result};
