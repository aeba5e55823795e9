//! Orquestrador de swapping
//!
//! ```text
//! GeneratingAB ─▶ GeneratingCD ─▶ Swapping ─▶ Correcting ─▶ Verifying ─▶ Done
//!      │               │
//!      └─ retry ◀──────┘  (falha de anúncio: descarta os spins)
//! ```

use herald_bell::{compose, correction_for, label_from_measurement};
use herald_core::{BellState, CorrectionOperator, QuantumBackend, SimTime, SwapMeasurement};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SwapConfig;
use crate::error::{OrchestrationError, OrchestrationResult};
use crate::link::{LinkGenerator, release};
use crate::tally::Tally;

/// Nome do enlace A–B
pub const LINK_AB: &str = "AB";
/// Nome do enlace C–D
pub const LINK_CD: &str = "CD";

/// Estágio de um trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrialStage {
    /// Anunciando o enlace A–B
    GeneratingAB = 0,
    /// Anunciando o enlace C–D
    GeneratingCD = 1,
    /// Medição de Bell em B e C
    Swapping = 2,
    /// Pauli em A
    Correcting = 3,
    /// Medição de Bell em A e D
    Verifying = 4,
    Done = 5,
}

impl TrialStage {
    /// Retorna próximo estágio
    pub fn next(&self) -> Option<TrialStage> {
        match self {
            TrialStage::GeneratingAB => Some(TrialStage::GeneratingCD),
            TrialStage::GeneratingCD => Some(TrialStage::Swapping),
            TrialStage::Swapping => Some(TrialStage::Correcting),
            TrialStage::Correcting => Some(TrialStage::Verifying),
            TrialStage::Verifying => Some(TrialStage::Done),
            TrialStage::Done => None,
        }
    }

    /// Lista todos os estágios em ordem
    pub fn all() -> Vec<TrialStage> {
        vec![
            TrialStage::GeneratingAB,
            TrialStage::GeneratingCD,
            TrialStage::Swapping,
            TrialStage::Correcting,
            TrialStage::Verifying,
            TrialStage::Done,
        ]
    }
}

impl fmt::Display for TrialStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrialStage::GeneratingAB => "generating AB",
            TrialStage::GeneratingCD => "generating CD",
            TrialStage::Swapping => "swapping",
            TrialStage::Correcting => "correcting",
            TrialStage::Verifying => "verifying",
            TrialStage::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Veredito da verificação final
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialVerdict {
    /// A–D mediu Φ+
    Success,
    /// A–D mediu outro estado
    Mismatch(BellState),
}

impl TrialVerdict {
    pub fn is_success(&self) -> bool {
        matches!(self, TrialVerdict::Success)
    }
}

/// Transcrição de um trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    pub index: usize,
    pub state_ab: BellState,
    pub attempts_ab: u64,
    pub state_cd: BellState,
    pub attempts_cd: u64,
    /// Bits crus da medição de Bell em B e C
    pub swap_bits: SwapMeasurement,
    /// Estado de A–D antes da correção
    pub swapped_state: BellState,
    pub correction: CorrectionOperator,
    /// Estado de A–D medido depois da correção
    pub final_state: BellState,
    pub verdict: TrialVerdict,
    pub started_at: SimTime,
    pub finished_at: SimTime,
}

impl TrialReport {
    /// Tentativas somadas dos dois enlaces
    pub fn attempts(&self) -> u64 {
        self.attempts_ab + self.attempts_cd
    }
}

/// Orquestrador de entanglement swapping sobre um backend
pub struct SwapOrchestrator<B> {
    backend: B,
    config: SwapConfig,
    link_ab: LinkGenerator,
    link_cd: LinkGenerator,
    stage: TrialStage,
    trials_run: usize,
}

impl<B: QuantumBackend> SwapOrchestrator<B> {
    /// Cria orquestrador; a configuração é validada
    pub fn new(backend: B, config: SwapConfig) -> OrchestrationResult<Self> {
        config.validate()?;

        let link_ab = LinkGenerator::new(
            LINK_AB,
            config.alpha,
            &config.link_ab,
            &config.detector,
            config.retry,
        );
        let link_cd = LinkGenerator::new(
            LINK_CD,
            config.alpha,
            &config.link_cd,
            &config.detector,
            config.retry,
        );

        Ok(Self {
            backend,
            config,
            link_ab,
            link_cd,
            stage: TrialStage::Done,
            trials_run: 0,
        })
    }

    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Estágio atual (o estágio em que o último trial parou)
    pub fn stage(&self) -> TrialStage {
        self.stage
    }

    pub fn trials_run(&self) -> usize {
        self.trials_run
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn enter(&mut self, stage: TrialStage) {
        tracing::trace!(trial = self.trials_run, %stage, "stage");
        self.stage = stage;
    }

    /// Executa um trial completo
    pub fn run_trial(&mut self) -> OrchestrationResult<TrialReport> {
        let index = self.trials_run;
        self.trials_run += 1;
        let started_at = self.backend.now();

        self.enter(TrialStage::GeneratingAB);
        let ab = self.link_ab.establish(&mut self.backend)?;
        tracing::debug!(trial = index, state = %ab.state, attempts = ab.attempts, "AB heralded");

        self.enter(TrialStage::GeneratingCD);
        let cd = match self.link_cd.establish(&mut self.backend) {
            Ok(cd) => cd,
            Err(err) => {
                release(&mut self.backend, [ab.left, ab.right]);
                return Err(err);
            }
        };
        tracing::debug!(trial = index, state = %cd.state, attempts = cd.attempts, "CD heralded");

        // B e C são consumidos pela medição; A e D seguem vivos
        self.enter(TrialStage::Swapping);
        let swap = self
            .backend
            .bell_measure(ab.right, cd.left)
            .map_err(OrchestrationError::from)
            .and_then(|bits| Ok((bits, label_from_measurement(bits)?)));
        let (swap_bits, swap_state) = match swap {
            Ok(swap) => swap,
            Err(err) => {
                release(&mut self.backend, [ab.left, cd.right]);
                return Err(err);
            }
        };

        self.enter(TrialStage::Correcting);
        let swapped_state = compose(compose(ab.state, swap_state), cd.state);
        let correction = correction_for(swapped_state);
        if let Err(err) = self.backend.apply_correction(&ab.left, correction) {
            release(&mut self.backend, [ab.left, cd.right]);
            return Err(err.into());
        }
        tracing::debug!(trial = index, bits = %swap_bits, %swapped_state, %correction, "swapped");

        self.enter(TrialStage::Verifying);
        let final_bits = self.backend.bell_measure(ab.left, cd.right)?;
        let final_state = label_from_measurement(final_bits)?;

        let verdict = if final_state == BellState::PhiPlus {
            TrialVerdict::Success
        } else {
            tracing::warn!(trial = index, %final_state, "verification mismatch");
            TrialVerdict::Mismatch(final_state)
        };

        self.enter(TrialStage::Done);
        let report = TrialReport {
            index,
            state_ab: ab.state,
            attempts_ab: ab.attempts,
            state_cd: cd.state,
            attempts_cd: cd.attempts,
            swap_bits,
            swapped_state,
            correction,
            final_state,
            verdict,
            started_at,
            finished_at: self.backend.now(),
        };
        tracing::info!(
            trial = index,
            attempts = report.attempts(),
            final_state = %report.final_state,
            success = verdict.is_success(),
            "trial finished"
        );
        Ok(report)
    }

    /// Executa os trials configurados, chamando `on_report` após cada um
    pub fn run_with<F>(&mut self, mut on_report: F) -> OrchestrationResult<Tally>
    where
        F: FnMut(&TrialReport),
    {
        tracing::info!(
            backend = self.backend.name(),
            trials = self.config.trials,
            alpha = self.config.alpha,
            "starting swap run"
        );

        let mut tally = Tally::default();
        for _ in 0..self.config.trials {
            let report = self.run_trial()?;
            on_report(&report);
            tally = tally.record(&report);
        }

        tracing::info!(%tally, "swap run finished");
        Ok(tally)
    }

    /// Executa os trials configurados
    pub fn run(&mut self) -> OrchestrationResult<Tally> {
        self.run_with(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let stages = TrialStage::all();
        assert_eq!(stages.len(), 6);
        for pair in stages.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(TrialStage::Done.next(), None);
    }

    #[test]
    fn test_verdict_serialization() {
        let json = serde_json::to_string(&TrialVerdict::Mismatch(BellState::PsiMinus)).unwrap();
        assert_eq!(json, r#"{"mismatch":"PSI_MINUS"}"#);
        assert_eq!(serde_json::to_string(&TrialVerdict::Success).unwrap(), r#""success""#);
    }
}
