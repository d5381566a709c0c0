use assayx_core_types::RequestId;
use thiserror::Error;

/// Result type alias using AxiomError
pub type Result<T> = std::result::Result<T, AxiomError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that loaders, the CLI and any
/// transport layer can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Vocabulary construction
    InvalidInput,
    InvalidTerm,
    InvalidRule,
    EmptyAntecedent,
    EmptyConsequent,

    // Value trees
    DuplicateNode,
    UnknownParent,
    CycleDetected,

    // Loading
    UnsupportedSchemaVersion,
    Io,
    Parse,
    Serialization,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTerm => "ERR_INVALID_TERM",
            ExErrorKind::InvalidRule => "ERR_INVALID_RULE",
            ExErrorKind::EmptyAntecedent => "ERR_EMPTY_ANTECEDENT",
            ExErrorKind::EmptyConsequent => "ERR_EMPTY_CONSEQUENT",
            ExErrorKind::DuplicateNode => "ERR_DUPLICATE_NODE",
            ExErrorKind::UnknownParent => "ERR_UNKNOWN_PARENT",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::UnsupportedSchemaVersion => "ERR_UNSUPPORTED_SCHEMA_VERSION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Parse => "ERR_PARSE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, rule position, URI, file path) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    rule_index: Option<usize>,
    uri: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            rule_index: None,
            uri: None,
            path: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the position of the offending rule within its vocabulary
    pub fn with_rule_index(mut self, index: usize) -> Self {
        self.rule_index = Some(index);
        self
    }

    /// Add the offending term or node URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Add the file path being loaded
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the rule position, if any
    pub fn rule_index(&self) -> Option<usize> {
        self.rule_index
    }

    /// Get the URI context, if any
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
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
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(index) = self.rule_index {
            write!(f, " (rule: {})", index)?;
        }
        if let Some(uri) = &self.uri {
            write!(f, " (uri: {})", uri)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Which side of a rule a term sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSide {
    Subject,
    Impact,
}

impl std::fmt::Display for TermSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermSide::Subject => f.write_str("subject"),
            TermSide::Impact => f.write_str("impact"),
        }
    }
}

/// Error taxonomy for axiom vocabulary construction and value tree indexing
///
/// Evaluation never produces these: a rule that references vocabulary absent
/// from a tree simply contributes nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxiomError {
    // ===== Vocabulary Errors =====
    /// A term carries neither a value URI nor a value label
    #[error("Rule {rule_index}: {side} term {term_index} has neither value URI nor value label")]
    TermWithoutValue {
        rule_index: usize,
        side: TermSide,
        term_index: usize,
    },

    /// A literal (label-only) term was used as a subject
    #[error("Rule {rule_index}: literal term '{label}' cannot be used as a subject")]
    LiteralSubject { rule_index: usize, label: String },

    /// Rule has no subject terms and no keyword
    #[error("Rule {rule_index} has an empty antecedent")]
    EmptyAntecedent { rule_index: usize },

    /// Rule has no impact terms
    #[error("Rule {rule_index} has no impact terms")]
    EmptyConsequent { rule_index: usize },

    /// Keyword text is empty or whitespace-only
    #[error("Rule {rule_index} has a blank keyword")]
    BlankKeyword { rule_index: usize },

    // ===== Value Tree Errors =====
    /// Two nodes share the same URI within one tree
    #[error("Duplicate node in value tree: {uri}")]
    DuplicateTreeNode { uri: String },

    /// A node names a parent that is not part of the tree
    #[error("Node {uri} references unknown parent {parent_uri}")]
    UnknownParentNode { uri: String, parent_uri: String },

    /// Node is not reachable from any root (parent links form a cycle)
    #[error("Node {uri} is part of a parent cycle")]
    TreeCycle { uri: String },

    // ===== Internal Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<AxiomError> for ExError {
    fn from(err: AxiomError) -> Self {
        match err {
            AxiomError::TermWithoutValue {
                rule_index,
                side,
                term_index,
            } => ExError::new(ExErrorKind::InvalidTerm)
                .with_rule_index(rule_index)
                .with_message(format!(
                    "{} term {} has neither value URI nor value label",
                    side, term_index
                )),

            AxiomError::LiteralSubject { rule_index, label } => {
                ExError::new(ExErrorKind::InvalidTerm)
                    .with_rule_index(rule_index)
                    .with_message(format!("Literal term '{}' used as a subject", label))
            }

            AxiomError::EmptyAntecedent { rule_index } => {
                ExError::new(ExErrorKind::EmptyAntecedent)
                    .with_rule_index(rule_index)
                    .with_message("Rule has neither subject terms nor a keyword")
            }

            AxiomError::EmptyConsequent { rule_index } => {
                ExError::new(ExErrorKind::EmptyConsequent)
                    .with_rule_index(rule_index)
                    .with_message("Rule has no impact terms")
            }

            AxiomError::BlankKeyword { rule_index } => ExError::new(ExErrorKind::InvalidRule)
                .with_rule_index(rule_index)
                .with_message("Keyword text is blank"),

            AxiomError::DuplicateTreeNode { uri } => ExError::new(ExErrorKind::DuplicateNode)
                .with_uri(uri)
                .with_message("Duplicate node in value tree"),

            AxiomError::UnknownParentNode { uri, parent_uri } => {
                ExError::new(ExErrorKind::UnknownParent)
                    .with_uri(uri)
                    .with_message(format!("Unknown parent {}", parent_uri))
            }

            AxiomError::TreeCycle { uri } => ExError::new(ExErrorKind::CycleDetected)
                .with_uri(uri)
                .with_message("Node is part of a parent cycle"),

            AxiomError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            AxiomError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to AxiomError
impl From<serde_json::Error> for AxiomError {
    fn from(err: serde_json::Error) -> Self {
        AxiomError::Serialization {
            message: err.to_string(),
        }
    }
}
