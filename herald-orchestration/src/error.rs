//! Erros de orquestração

use herald_bell::BellError;
use herald_core::BackendError;
use herald_photonic::PhotonicError;
use thiserror::Error;

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;

/// Erros de orquestração.
///
/// Todos abortam o trial corrente. Falhas de anúncio não aparecem aqui:
/// são tratadas pelo laço de geração.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrchestrationError {
    /// Detecção, classificação ou canal de outcomes
    #[error("Photonic error: {0}")]
    Photonic(#[from] PhotonicError),

    /// Bits clássicos inválidos
    #[error("Bell algebra error: {0}")]
    Bell(#[from] BellError),

    /// Colaborador externo
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// Limite de tentativas atingido
    #[error("Link {link} not heralded after {attempts} attempts")]
    GenerationTimeout { link: String, attempts: u64 },

    /// Detector não publicou outcome
    #[error("Detector '{0}' produced no outcome")]
    MissingOutcome(String),

    /// Configuração inválida
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Falha ao ler configuração
    #[error("IO error: {0}")]
    Io(String),

    /// TOML malformado
    #[error("Config parse error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for OrchestrationError {
    fn from(err: toml::de::Error) -> Self {
        OrchestrationError::Config(err.to_string())
    }
}
