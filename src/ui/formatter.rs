//! Pure formatting functions for UI output.
//!
//! Everything human-facing goes to stderr so stdout stays free for the tag
//! list printed in dry-run mode.

use console::style;

use crate::domain::TagSet;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Render the `key=value` line a dry run would have written.
pub fn format_output_line(key: &str, tags: Option<&TagSet>) -> Option<String> {
    tags.map(|tags| format!("{}={}", key, tags))
}

/// Show the outcome of a dry run.
///
/// The output line goes to stdout so it can be piped; the summary goes to stderr.
pub fn display_dry_run(key: &str, tags: Option<&TagSet>) {
    match format_output_line(key, tags) {
        Some(line) => {
            display_status("Dry run: output file left untouched");
            println!("{}", line);
        }
        None => display_status("Dry run: no tags would be written"),
    }
}
