//! Contagem de trials
//!
//! Valor imutável dobrado pelo chamador: cada trial devolve um
//! [`TrialReport`] e `Tally::record` produz o novo total.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::orchestrator::TrialReport;

/// Totais de uma execução
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub trials: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Tentativas de geração somadas (AB + CD)
    pub attempts: u64,
}

impl Tally {
    /// Acrescenta um trial
    #[must_use]
    pub fn record(self, report: &TrialReport) -> Self {
        let success = report.verdict.is_success();
        Self {
            trials: self.trials + 1,
            succeeded: self.succeeded + usize::from(success),
            failed: self.failed + usize::from(!success),
            attempts: self.attempts + report.attempts(),
        }
    }

    /// Soma duas contagens
    #[must_use]
    pub fn merge(self, other: Tally) -> Self {
        Self {
            trials: self.trials + other.trials,
            succeeded: self.succeeded + other.succeeded,
            failed: self.failed + other.failed,
            attempts: self.attempts + other.attempts,
        }
    }

    /// Fração de sucessos (0 sem trials)
    pub fn success_ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.trials as f64
        }
    }

    /// Tentativas médias por trial
    pub fn mean_attempts(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.attempts as f64 / self.trials as f64
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Succeeded {}/{} ({:.1}%)",
            self.succeeded,
            self.trials,
            self.success_ratio() * 100.0
        )
    }
}

impl FromIterator<TrialReport> for Tally {
    fn from_iter<I: IntoIterator<Item = TrialReport>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Tally::default(), |tally, report| tally.record(&report))
    }
}

impl<'a> FromIterator<&'a TrialReport> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a TrialReport>>(iter: I) -> Self {
        iter.into_iter().fold(Tally::default(), Tally::record)
    }
}
