use miette::Diagnostic;
use thiserror::Error;

/// Main error type for inkfill operations
#[derive(Error, Diagnostic, Debug)]
pub enum FillError {
    #[error("Invalid dimensions: {message}")]
    #[diagnostic(code(inkfill::dimensions))]
    InvalidDimensions {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Seed ({x}, {y}) is outside the {width}x{height} buffer")]
    #[diagnostic(
        code(inkfill::seed),
        help("Coordinates are zero-based and must be less than the image size")
    )]
    SeedOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    #[error("Invalid colour: {input}")]
    #[diagnostic(code(inkfill::colour), help("Use #RRGGBB format, e.g. #FF8800"))]
    InvalidColorFormat { input: String },

    #[error("Invalid fill policy: {message}")]
    #[diagnostic(code(inkfill::policy))]
    InvalidPolicy {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(inkfill::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(inkfill::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FillError>;
