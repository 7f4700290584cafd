pub mod analyzer;
pub mod cli;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod ui;

pub use error::{ImageTagsError, Result};
