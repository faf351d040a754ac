use thiserror::Error;

/// Invalid argument at the call boundary.
///
/// This is the only failure a caller of a registered method can observe.
/// It is raised before any trimming runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{function}() takes exactly one argument ({given} given)")]
    Arity { function: String, given: usize },
    #[error("{function}() argument 1 must be {expected}, not {found}")]
    Type {
        function: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{function}() argument 1 contains an embedded null character")]
    EmbeddedNul { function: String },
}

/// Errors raised while building a [`Module`](crate::Module) from config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {field}: {value:?} is not an identifier")]
    InvalidName { field: &'static str, value: String },
    #[error("method {0:?} registered twice")]
    DuplicateMethod(String),
    #[error("failed to parse module config: {0}")]
    Parse(String),
}
