//! Tipos de erro dos colaboradores externos (backend quântico)

use thiserror::Error;

/// Resultado customizado para operações do backend
pub type BackendResult<T> = Result<T, BackendError>;

/// Erros que um backend pode reportar ao núcleo
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown qubit: q{0}")]
    UnknownQubit(u64),

    #[error("Backend failure: {0}")]
    Internal(String),
}
