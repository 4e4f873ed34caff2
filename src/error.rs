use std::path::PathBuf;

/// Everything `generate` can fail with.
///
/// None of these are retried; the caller decides how to report them.
#[derive(Debug)]
pub enum GenerateError {
    // Lookup
    CategoryNotFound(String),

    // Resources
    BackgroundImageMissing {
        path: PathBuf,
        source: image::ImageError,
    },
    FontUnavailable(String),

    // Output
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Category table
    Config {
        line: usize,
        message: String,
    },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GenerateError::*;
        match self {
            CategoryNotFound(name) => write!(f, "unknown category `{name}`"),
            BackgroundImageMissing { path, .. } => {
                write!(f, "background image unreadable: {}", path.display())
            }
            FontUnavailable(name) => write!(f, "font unavailable: {name}"),
            OutputWriteFailed { path, .. } => {
                write!(f, "failed to write output image: {}", path.display())
            }
            Config { line, message } => write!(f, "category table line {line}: {message}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::BackgroundImageMissing { source, .. } => Some(source),
            GenerateError::OutputWriteFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
