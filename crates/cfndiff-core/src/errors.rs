use thiserror::Error;

/// Result type alias using CfnDiffError
pub type Result<T> = std::result::Result<T, CfnDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the CLI prints and that tests
/// and wrapping tools can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Text is neither valid JSON nor valid YAML
    Parse,

    // Integration/IO
    Io,
    Serialization,
    /// Remote stack data could not be fetched or had the wrong shape
    Gateway,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Gateway => "ERR_GATEWAY",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the operation and the input (`before`,
/// `after`, a file path) that failed, so a fatal run can say which side was
/// broken.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    input: Option<String>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            input: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Name the input that failed
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if let Some(input) = &self.input {
            write!(f, " for input '{}'", input)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Typed errors raised by the encoder, the parameter resolver and the gateway
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CfnDiffError {
    /// Input is neither valid JSON nor valid YAML
    #[error("{input} is neither valid JSON ({json_error}) nor valid YAML ({yaml_error})")]
    Parse {
        input: String,
        json_error: String,
        yaml_error: String,
    },

    /// A document had the wrong shape for its role
    #[error("{input}: {message}")]
    InvalidShape { input: String, message: String },

    /// Rendering a canonical document failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A local file could not be read
    #[error("Cannot read {path}: {message}")]
    Io { path: String, message: String },

    /// Remote stack data was unusable
    #[error("stack {stack_name}: {message}")]
    Gateway { stack_name: String, message: String },
}

impl From<CfnDiffError> for ExError {
    fn from(err: CfnDiffError) -> Self {
        let message = err.to_string();
        match err {
            CfnDiffError::Parse { input, .. } => ExError::new(ExErrorKind::Parse)
                .with_op("canonicalize")
                .with_input(input)
                .with_message(message),
            CfnDiffError::InvalidShape { input, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_input(input)
                .with_message(message),
            CfnDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            CfnDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_input(path)
                .with_message(message),
            CfnDiffError::Gateway { stack_name, .. } => ExError::new(ExErrorKind::Gateway)
                .with_input(stack_name)
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for CfnDiffError {
    fn from(err: serde_json::Error) -> Self {
        CfnDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CfnDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        CfnDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
