use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GrammarErrorKind {
    #[error("Turn angle must be positive but got {0}.")]
    NonPositiveAngle(f32),
    #[error("Step length must be positive but got {0}.")]
    NonPositiveStepLength(f32),
    #[error("Pen width must be positive but got {0}.")]
    NonPositivePenWidth(f32),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Invalid grammar configuration: {kind}")]
pub struct GrammarError {
    #[source]
    pub kind: GrammarErrorKind,
}
