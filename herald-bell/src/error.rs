//! Tipos de erro para herald-bell

use thiserror::Error;

/// Resultado customizado para operações da álgebra de Bell
pub type BellResult<T> = Result<T, BellError>;

/// Erros da álgebra de Bell
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BellError {
    #[error("Invalid classical bit: {0} (expected 0 or 1)")]
    InvalidBit(u8),
}
