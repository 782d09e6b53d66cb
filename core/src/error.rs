use thiserror::Error;

/// Hard failures surfaced by the match parser.
///
/// Per-line problems never end up here: malformed scout lines are dropped
/// with a diagnostic and unrecognized code values fall back to documented
/// defaults. Only a missing mandatory section or an unreadable file aborts
/// the parse.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("required section [{name}] is missing or empty")]
    MissingSection { name: &'static str },

    #[error("malformed [{name}] section: {reason}")]
    MalformedSection { name: &'static str, reason: String },

    #[error("directory watcher error: {0}")]
    Watch(#[from] notify::Error),
}
