// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod course;
pub mod error;
pub mod normalize;
pub mod specs;

pub mod file;
pub mod input;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod source;

pub use error::{Error, Result};
