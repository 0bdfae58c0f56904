use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpretErrorKind {
    #[error("Unmatched ']' with no saved state to restore.")]
    UnbalancedBranchMarkers,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("[symbol {offset}] {kind}")]
pub struct InterpretError {
    #[source]
    pub kind: InterpretErrorKind,
    /// Zero-based offset of the offending symbol in the input sequence.
    pub offset: usize,
}
