//! Geração anunciada de um enlace
//!
//! Cada tentativa: dois pares spin–fóton, fótons nas portas do detector,
//! avanço da janela de detecção, um outcome, uma decisão de anúncio.
//! Em falha os dois spins são descartados e a tentativa recomeça.

use herald_core::{BellState, HeraldResult, Outcome, Port, QuantumBackend, Qubit, SimTime};
use herald_photonic::{ClickDetector, Detector, DetectorConfig, herald};

use crate::config::{LinkConfig, RetryPolicy};
use crate::error::{OrchestrationError, OrchestrationResult};

/// Enlace anunciado: dois spins num estado de Bell conhecido
#[derive(Debug)]
pub struct EntangledLink {
    /// Spin do lado esquerdo (A ou C)
    pub left: Qubit,
    /// Spin do lado direito (B ou D)
    pub right: Qubit,
    pub state: BellState,
    /// Tentativas até o sucesso, incluindo a última
    pub attempts: u64,
}

/// Resultado de uma única tentativa, com os spins ainda vivos
#[derive(Debug)]
pub struct Attempt {
    pub left: Qubit,
    pub right: Qubit,
    pub outcome: Outcome,
    pub herald: HeraldResult,
}

/// Gerador de um enlace com detector próprio
#[derive(Debug)]
pub struct LinkGenerator {
    name: String,
    detector: Detector,
    alpha: f64,
    window_ns: SimTime,
    retry: RetryPolicy,
}

impl LinkGenerator {
    pub fn new(
        name: impl Into<String>,
        alpha: f64,
        link: &LinkConfig,
        detector: &DetectorConfig,
        retry: RetryPolicy,
    ) -> Self {
        let name = name.into();
        Self {
            detector: Detector::with_config(name.clone(), detector.clone()),
            name,
            alpha,
            window_ns: link.window_ns,
            retry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Executa uma tentativa e devolve os spins sem descartá-los
    pub fn attempt<B: QuantumBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> OrchestrationResult<Attempt> {
        // portas vazias antes de gerar
        let stale = self.detector.take_inputs();
        release(backend, stale.into_iter().map(|e| e.qubit));

        let (left, photon_left) = backend.generate(self.alpha)?;
        let (right, photon_right) = match backend.generate(self.alpha) {
            Ok(pair) => pair,
            Err(err) => {
                release(backend, [left, photon_left.qubit]);
                return Err(err.into());
            }
        };

        if let Err(err) = self.detector.tx_input(Port::Qin0, photon_left) {
            self.abandon(backend, [left, right, photon_right.qubit]);
            return Err(err.into());
        }
        if let Err(err) = self.detector.tx_input(Port::Qin1, photon_right) {
            self.abandon(backend, [left, right]);
            return Err(err.into());
        }
        backend.advance(self.window_ns);

        if let Err(err) = self.detector.classify_and_emit(&mut *backend) {
            self.abandon(backend, [left, right]);
            return Err(err.into());
        }

        let Some(outcome) = self.detector.pop() else {
            release(backend, [left, right]);
            return Err(OrchestrationError::MissingOutcome(self.name.clone()));
        };

        Ok(Attempt {
            left,
            right,
            outcome,
            herald: herald(outcome),
        })
    }

    /// Repete tentativas até o anúncio de sucesso ou o limite da política
    pub fn establish<B: QuantumBackend + ?Sized>(
        &mut self,
        backend: &mut B,
    ) -> OrchestrationResult<EntangledLink> {
        let mut attempts = 0u64;

        loop {
            if !self.retry.allows(attempts) {
                tracing::warn!(link = %self.name, attempts, "link generation timed out");
                return Err(OrchestrationError::GenerationTimeout {
                    link: self.name.clone(),
                    attempts,
                });
            }
            attempts += 1;

            let attempt = self.attempt(backend)?;
            match attempt.herald {
                HeraldResult::Success(state) => {
                    tracing::debug!(link = %self.name, %state, attempts, "link heralded");
                    return Ok(EntangledLink {
                        left: attempt.left,
                        right: attempt.right,
                        state,
                        attempts,
                    });
                }
                HeraldResult::Failure => {
                    tracing::trace!(link = %self.name, outcome = %attempt.outcome, "herald failed");
                    let left = backend.discard(attempt.left);
                    let right = backend.discard(attempt.right);
                    left.and(right)?;
                }
            }
        }
    }

    /// Descarta os fótons ainda nas portas junto com `qubits`
    fn abandon<B, const N: usize>(&mut self, backend: &mut B, qubits: [Qubit; N])
    where
        B: QuantumBackend + ?Sized,
    {
        let photons = self.detector.take_inputs().into_iter().map(|e| e.qubit);
        release(backend, photons.chain(qubits));
    }
}

/// Descarte best-effort: o erro que motivou a limpeza prevalece
pub(crate) fn release<B: QuantumBackend + ?Sized>(
    backend: &mut B,
    qubits: impl IntoIterator<Item = Qubit>,
) {
    for qubit in qubits {
        if let Err(err) = backend.discard(qubit) {
            tracing::debug!(%err, "discard during cleanup failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::SimClock;
    use herald_quantum::StateVectorBackend;

    fn generator(retry: RetryPolicy) -> LinkGenerator {
        LinkGenerator::new(
            "AB",
            0.2,
            &LinkConfig::default(),
            &DetectorConfig::default(),
            retry,
        )
    }

    #[test]
    fn test_attempt_advances_clock_by_window() {
        let mut backend = StateVectorBackend::seeded(1);
        let mut link = LinkGenerator::new(
            "CD",
            0.2,
            &LinkConfig { window_ns: 500 },
            &DetectorConfig::default(),
            RetryPolicy::Unbounded,
        );

        let attempt = link.attempt(&mut backend).unwrap();
        assert_eq!(backend.now(), 500);
        assert_eq!(attempt.herald, herald(attempt.outcome));
        assert_eq!(link.detector().pending(), 0);
        assert_eq!(link.detector().emitted(), 1);

        // só os dois spins continuam vivos
        assert_eq!(backend.live_qubits(), 2);
    }

    #[test]
    fn test_establish_returns_heralded_link() {
        let mut backend = StateVectorBackend::seeded(5);
        let mut link = generator(RetryPolicy::Unbounded);

        let entangled = link.establish(&mut backend).unwrap();
        assert!(matches!(
            entangled.state,
            BellState::PsiPlus | BellState::PsiMinus
        ));
        assert!(entangled.attempts >= 1);
        assert_eq!(backend.now(), entangled.attempts);
        assert_eq!(backend.live_qubits(), 2);
    }

    #[test]
    fn test_failed_attempts_release_spins() {
        let mut backend = StateVectorBackend::seeded(11);
        let mut link = generator(RetryPolicy::Unbounded);

        for _ in 0..5 {
            let entangled = link.establish(&mut backend).unwrap();
            backend.discard(entangled.left).unwrap();
            backend.discard(entangled.right).unwrap();
            assert_eq!(backend.live_qubits(), 0);
        }
    }

    #[test]
    fn test_max_attempts_yields_timeout() {
        let mut backend = StateVectorBackend::seeded(2);
        // alpha minúsculo: quase sempre vácuo
        let mut link = LinkGenerator::new(
            "AB",
            1e-9,
            &LinkConfig::default(),
            &DetectorConfig::default(),
            RetryPolicy::MaxAttempts(3),
        );

        let err = link.establish(&mut backend).unwrap_err();
        assert_eq!(
            err,
            OrchestrationError::GenerationTimeout {
                link: "AB".into(),
                attempts: 3
            }
        );
        assert_eq!(backend.now(), 3);
        assert_eq!(backend.live_qubits(), 0);
    }

    #[test]
    fn test_invalid_alpha_is_backend_error() {
        let mut backend = StateVectorBackend::seeded(2);
        let mut link = LinkGenerator::new(
            "AB",
            1.5,
            &LinkConfig::default(),
            &DetectorConfig::default(),
            RetryPolicy::Unbounded,
        );
        let err = link.establish(&mut backend).unwrap_err();
        assert!(matches!(err, OrchestrationError::Backend(_)));
    }
}
