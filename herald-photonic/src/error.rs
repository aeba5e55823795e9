//! Erros específicos do módulo fotônico

use herald_core::{BackendError, Port, SimTime};
use thiserror::Error;

pub type PhotonicResult<T> = Result<T, PhotonicError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhotonicError {
    /// Entradas do detector não chegaram no mesmo instante
    #[error("Timing mismatch: qin0 arrived at {left}ns, qin1 at {right}ns")]
    TimingMismatch { left: SimTime, right: SimTime },

    /// Entrada não está na base de número de ocupação
    #[error("Excitation on {0} is not a number state")]
    NotNumberState(Port),

    /// Código cru fora da tabela de seis outcomes
    #[error("Unclassifiable measurement code: {0}")]
    UnclassifiableCode(u8),

    #[error("Port {0} already holds an excitation")]
    PortOccupied(Port),

    #[error("Missing excitation on {0:?}")]
    MissingInput(Vec<Port>),

    /// O outcome anterior ainda não foi consumido
    #[error("Previous outcome on detector '{0}' was not drained")]
    OutcomeNotDrained(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}
