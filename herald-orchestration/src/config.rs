//! Configuração do orquestrador
//!
//! ```toml
//! alpha = 0.2
//! trials = 10
//! seed = 42
//! retry = { max_attempts = 10000 }   # ou retry = "unbounded"
//!
//! [link_ab]
//! window_ns = 1
//!
//! [link_cd]
//! window_ns = 1000000
//!
//! [detector]
//! num_resolving = true
//! ```

use herald_core::SimTime;
use herald_photonic::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{OrchestrationError, OrchestrationResult};

/// Política de novas tentativas quando o anúncio falha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Tenta até conseguir
    #[default]
    Unbounded,
    /// Desiste depois de `n` tentativas seguidas sem sucesso
    MaxAttempts(u64),
}

impl RetryPolicy {
    /// Ainda pode tentar depois de `attempts` tentativas?
    pub fn allows(&self, attempts: u64) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::MaxAttempts(max) => attempts < *max,
        }
    }
}

/// Configuração de um enlace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Janela de detecção: tempo simulado avançado por tentativa (ns)
    #[serde(default = "default_window_ns")]
    pub window_ns: SimTime,
}

fn default_window_ns() -> SimTime {
    1
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            window_ns: default_window_ns(),
        }
    }
}

/// Configuração completa de uma execução de swapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// População do estado brilhante, em (0, 1)
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Número de trials
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Semente do backend (None = entropia do sistema)
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub retry: RetryPolicy,

    #[serde(default)]
    pub link_ab: LinkConfig,

    #[serde(default = "default_link_cd")]
    pub link_cd: LinkConfig,

    #[serde(default)]
    pub detector: DetectorConfig,
}

fn default_alpha() -> f64 {
    0.2
}

fn default_trials() -> usize {
    10
}

fn default_link_cd() -> LinkConfig {
    LinkConfig {
        window_ns: 1_000_000,
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            trials: default_trials(),
            seed: None,
            retry: RetryPolicy::default(),
            link_ab: LinkConfig::default(),
            link_cd: default_link_cd(),
            detector: DetectorConfig::default(),
        }
    }
}

impl SwapConfig {
    /// Lê e valida um arquivo TOML
    pub fn from_file(path: &Path) -> OrchestrationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| OrchestrationError::Io(format!("{}: {}", path.display(), e)))?;
        content.parse()
    }

    /// Serializa para TOML
    pub fn to_toml(&self) -> OrchestrationResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| OrchestrationError::InvalidConfiguration(e.to_string()))
    }

    /// Valida os parâmetros
    pub fn validate(&self) -> OrchestrationResult<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(OrchestrationError::InvalidConfiguration(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if self.trials == 0 {
            return Err(OrchestrationError::InvalidConfiguration(
                "trials must be at least 1".into(),
            ));
        }
        if self.retry == RetryPolicy::MaxAttempts(0) {
            return Err(OrchestrationError::InvalidConfiguration(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for SwapConfig {
    type Err = OrchestrationError;

    fn from_str(content: &str) -> OrchestrationResult<Self> {
        let config: SwapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
