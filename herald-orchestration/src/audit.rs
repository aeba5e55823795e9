//! Auditoria do anúncio
//!
//! Executa tentativas isoladas de um enlace e confronta cada decisão de
//! anúncio com a medição direta dos dois spins:
//!
//! | Anúncio | Medição dos spins | Esperado |
//! |:--------|:------------------|:---------|
//! | Success(estado) | Bell | o próprio estado |
//! | Failure, ocupação dupla | computacional | (1, 1) |
//! | Failure, nenhum clique | computacional | (0, 0) |
//!
//! Qualquer outro padrão de falha é medido e contado, mas não tem
//! expectativa.

use herald_bell::label_from_measurement;
use herald_core::{BellState, HeraldResult, Outcome, QuantumBackend};
use herald_photonic::DetectorConfig;
use serde::{Deserialize, Serialize};

use crate::config::{LinkConfig, RetryPolicy};
use crate::error::OrchestrationResult;
use crate::link::LinkGenerator;

/// O que a medição dos spins deve mostrar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    /// Par no estado anunciado
    Bell(BellState),
    /// Spins em estado produto na base computacional
    Product(u8, u8),
    /// Sem expectativa
    Unchecked,
}

/// O que a medição dos spins mostrou
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Observation {
    Bell(BellState),
    Product(u8, u8),
}

/// Uma tentativa auditada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub attempt: u64,
    pub outcome: Outcome,
    pub herald: HeraldResult,
    pub expected: Expectation,
    pub observed: Observation,
}

impl AuditRecord {
    /// A observação confirma o anúncio?
    pub fn is_consistent(&self) -> bool {
        match (self.expected, self.observed) {
            (Expectation::Unchecked, _) => true,
            (Expectation::Bell(e), Observation::Bell(o)) => e == o,
            (Expectation::Product(e0, e1), Observation::Product(o0, o1)) => (e0, e1) == (o0, o1),
            _ => false,
        }
    }
}

/// Resumo da auditoria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub attempts: u64,
    pub heralded: u64,
    pub failed: u64,
    pub violations: Vec<AuditRecord>,
}

impl AuditSummary {
    #[must_use]
    pub fn record(mut self, record: AuditRecord) -> Self {
        self.attempts += 1;
        if record.herald.is_success() {
            self.heralded += 1;
        } else {
            self.failed += 1;
        }
        if !record.is_consistent() {
            self.violations.push(record);
        }
        self
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Auditoria de um único enlace
#[derive(Debug)]
pub struct HeraldingAudit {
    link: LinkGenerator,
    attempts: u64,
}

impl HeraldingAudit {
    pub fn new(alpha: f64, link: &LinkConfig, detector: &DetectorConfig) -> Self {
        Self {
            link: LinkGenerator::new("audit", alpha, link, detector, RetryPolicy::Unbounded),
            attempts: 0,
        }
    }

    /// Uma tentativa seguida da medição dos spins
    pub fn check_attempt<B: QuantumBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> OrchestrationResult<AuditRecord> {
        let attempt = self.link.attempt(backend)?;
        self.attempts += 1;

        let (expected, observed) = match attempt.herald {
            HeraldResult::Success(state) => {
                let bits = backend.bell_measure(attempt.left, attempt.right)?;
                (
                    Expectation::Bell(state),
                    Observation::Bell(label_from_measurement(bits)?),
                )
            }
            HeraldResult::Failure => {
                let expected = match attempt.outcome {
                    o if o.is_bunched() => Expectation::Product(1, 1),
                    o if o.total() == 0 => Expectation::Product(0, 0),
                    _ => Expectation::Unchecked,
                };
                let left = backend.measure(attempt.left)?;
                let right = backend.measure(attempt.right)?;
                (expected, Observation::Product(left, right))
            }
        };

        let record = AuditRecord {
            attempt: self.attempts,
            outcome: attempt.outcome,
            herald: attempt.herald,
            expected,
            observed,
        };
        if !record.is_consistent() {
            tracing::warn!(
                attempt = record.attempt,
                outcome = %record.outcome,
                ?expected,
                ?observed,
                "herald violation"
            );
        }
        Ok(record)
    }

    /// Executa `attempts` tentativas auditadas
    pub fn run<B: QuantumBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        attempts: u64,
    ) -> OrchestrationResult<AuditSummary> {
        let mut summary = AuditSummary::default();
        for _ in 0..attempts {
            summary = summary.record(self.check_attempt(backend)?);
        }
        tracing::info!(
            attempts = summary.attempts,
            heralded = summary.heralded,
            violations = summary.violations.len(),
            "heralding audit finished"
        );
        Ok(summary)
    }
}
