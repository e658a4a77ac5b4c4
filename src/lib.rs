pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod github;
pub mod language;
pub mod local;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod tokount;

pub use error::{GhlangError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
