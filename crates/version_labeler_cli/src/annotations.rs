//! GitHub Actions workflow commands.
//!
//! Lines written to stdout in the `::level::message` form are turned into
//! annotations on the workflow run. Log output from `tracing` goes to the
//! same stream but is not picked up as an annotation.

#[cfg(test)]
#[path = "annotations_tests.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Error,
}

impl AnnotationLevel {
    fn command(&self) -> &'static str {
        match self {
            AnnotationLevel::Notice => "notice",
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Error => "error",
        }
    }
}

/// Formats a workflow command, escaping the characters the runner treats specially.
pub fn format_annotation(level: AnnotationLevel, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{}::{}", level.command(), escaped)
}

pub fn notice(message: &str) {
    println!("{}", format_annotation(AnnotationLevel::Notice, message));
}

pub fn warning(message: &str) {
    println!("{}", format_annotation(AnnotationLevel::Warning, message));
}

pub fn error(message: &str) {
    println!("{}", format_annotation(AnnotationLevel::Error, message));
}
