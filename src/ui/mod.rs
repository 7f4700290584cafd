//! User interface module - formatting of human-facing messages.

pub mod formatter;

pub use formatter::{
    display_dry_run, display_error, display_status, display_success, format_output_line,
};
