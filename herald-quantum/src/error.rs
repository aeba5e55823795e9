//! Tipos de erro para herald-quantum

use herald_core::BackendError;
use thiserror::Error;

/// Resultado customizado para operações do simulador
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros do simulador de vetor de estado
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Unknown qubit: q{0}")]
    UnknownQubit(u64),

    #[error("Same qubit used twice in a two-qubit operation: q{0}")]
    DuplicateQubit(u64),

    #[error("Invalid bright-state population: {0} (must be in (0, 1))")]
    InvalidAlpha(f64),

    #[error("Projection onto a zero-probability outcome")]
    ZeroProbability,

    #[error("Invalid measurement value: {0}")]
    InvalidValue(u8),
}

// Conversão para BackendError do core
impl From<QuantumError> for BackendError {
    fn from(err: QuantumError) -> Self {
        match err {
            QuantumError::UnknownQubit(id) => BackendError::UnknownQubit(id),
            QuantumError::InvalidAlpha(alpha) => {
                BackendError::InvalidParameter(format!("alpha = {alpha} must be in (0, 1)"))
            }
            other => BackendError::Internal(other.to_string()),
        }
    }
}
