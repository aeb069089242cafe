use crate::output::Theme;
use thiserror::Error;

/// Why a single template could not be rendered.
#[derive(Error, Debug)]
pub enum TemplateErrorKind {
    #[error("template not found in bundle at '{path}'")]
    NotFound { path: String },

    #[error("template is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("syntax error: {0}")]
    Parse(#[source] minijinja::Error),

    #[error("render failed: {0}")]
    Render(#[source] minijinja::Error),
}

/// Failure to resolve, compile or execute a named template.
///
/// Every phase reports through this one type so callers only ever see the
/// template name plus the underlying cause.
#[derive(Error, Debug)]
#[error("template '{name}': {source}")]
pub struct TemplateError {
    pub name: String,
    #[source]
    pub source: TemplateErrorKind,
}

impl TemplateError {
    pub fn new(name: impl Into<String>, source: TemplateErrorKind) -> Self {
        Self { name: name.into(), source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, TemplateErrorKind::NotFound { .. })
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self.source, TemplateErrorKind::Parse(_))
    }
}

/// A template or an input value failed a pre-flight check.
#[derive(Error, Debug)]
pub struct ValidationError {
    /// Template or value being validated.
    pub name: String,
    /// Schema field at fault, when the failure concerns user input.
    pub field: Option<String>,
    /// Line of a template syntax error, when known.
    pub line: Option<usize>,
    pub message: String,
    #[source]
    pub source: Option<TemplateErrorKind>,
}

impl ValidationError {
    pub fn for_field(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: value.into(),
            field: Some(field.into()),
            line: None,
            message: message.into(),
            source: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, Some(TemplateErrorKind::NotFound { .. }))
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.field, self.line) {
            (Some(field), _) => {
                write!(f, "invalid {field} '{}': {}", self.name, self.message)
            }
            (None, Some(line)) => {
                write!(f, "template '{}' (line {line}): {}", self.name, self.message)
            }
            (None, None) => write!(f, "template '{}': {}", self.name, self.message),
        }
    }
}

impl From<TemplateError> for ValidationError {
    fn from(err: TemplateError) -> Self {
        let line = match &err.source {
            TemplateErrorKind::Parse(e) | TemplateErrorKind::Render(e) => e.line(),
            _ => None,
        };
        let message = match &err.source {
            TemplateErrorKind::Parse(e) | TemplateErrorKind::Render(e) => e
                .detail()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string()),
            other => other.to_string(),
        };
        Self { name: err.name, field: None, line, message, source: Some(err.source) }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write '{path}': {source}.")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with gostarter's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr, styled when stderr is a terminal,
/// and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    let theme = Theme::new(console::Term::stderr().is_term());
    eprintln!("{} {}", theme.error.apply_to("error:"), err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
