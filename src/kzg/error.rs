use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KzgError {
    /// Setup asked for more powers than the configured ceiling allows.
    #[error("invalid degree bound {requested}: maximum supported is {max}")]
    InvalidDegreeBound { requested: usize, max: usize },
    #[error("polynomial degree {degree} exceeds srs max degree {max_degree}")]
    DegreeExceeded { degree: usize, max_degree: usize },
    /// `(x - i)` did not divide `P(x) - P(i)`. Never caused by caller input.
    #[error("quotient division left non-zero remainder {remainder}")]
    DivisionInvariantViolated { remainder: String },
    #[error("malformed proof input: {0}")]
    MalformedProofInput(&'static str),
    #[error("malformed srs: {0}")]
    MalformedSrs(&'static str),
}

pub type Result<T> = std::result::Result<T, KzgError>;
