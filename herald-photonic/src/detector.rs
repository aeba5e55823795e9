//! Detector duplo com divisor de feixe (twin detector)
//!
//! Recebe um fóton em cada porta, mede no mesmo instante e publica
//! exatamente um [`Outcome`] por tentativa num canal de slot único.
//!
//! ## Contrato do canal
//!
//! - um produtor: o próprio detector, em [`ClickDetector::classify_and_emit`]
//! - um consumidor: quem chama [`Detector::pop`], que recebe a posse do outcome
//! - capacidade 1: se o outcome anterior não foi consumido, a detecção
//!   seguinte falha com [`PhotonicError::OutcomeNotDrained`] antes de medir

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use herald_core::{DetectionBackend, Excitation, Outcome, Port, PortSlots};
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::error::{PhotonicError, PhotonicResult};

/// Configuração do detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Distingue um fóton de dois no mesmo canal
    #[serde(default = "default_num_resolving")]
    pub num_resolving: bool,
}

fn default_num_resolving() -> bool {
    true
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            num_resolving: default_num_resolving(),
        }
    }
}

/// Capacidade mínima de um detector: classificar e publicar
pub trait ClickDetector {
    /// Mede as duas entradas, classifica o código e publica o outcome
    fn classify_and_emit<B: DetectionBackend + ?Sized>(&mut self, backend: &mut B) -> PhotonicResult<()>;
}

/// Detector duplo
#[derive(Debug)]
pub struct Detector {
    name: String,
    config: DetectorConfig,
    inputs: PortSlots,
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
    emitted: u64,
}

impl Detector {
    /// Cria detector com configuração padrão (resolve número)
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, DetectorConfig::default())
    }

    /// Cria detector com configuração específica
    pub fn with_config(name: impl Into<String>, config: DetectorConfig) -> Self {
        let (tx, rx) = bounded(1);
        Self {
            name: name.into(),
            config,
            inputs: PortSlots::new(),
            tx,
            rx,
            emitted: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Entrega uma excitação a uma porta
    pub fn tx_input(&mut self, port: Port, excitation: Excitation) -> PhotonicResult<()> {
        self.inputs
            .put(port, excitation)
            .map_err(|_| PhotonicError::PortOccupied(port))
    }

    /// Retira o outcome publicado, se houver
    pub fn pop(&self) -> Option<Outcome> {
        self.rx.try_recv().ok()
    }

    /// Outcomes publicados e ainda não consumidos (0 ou 1)
    pub fn pending(&self) -> usize {
        self.rx.len()
    }

    /// Total de outcomes publicados
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// As duas portas têm excitação?
    pub fn is_armed(&self) -> bool {
        self.inputs.missing().is_empty()
    }

    /// Devolve as excitações não medidas (ex.: depois de um erro)
    pub fn take_inputs(&mut self) -> Vec<Excitation> {
        self.inputs.drain()
    }

    fn check_inputs(left: &Excitation, right: &Excitation) -> PhotonicResult<()> {
        if left.arrival != right.arrival {
            return Err(PhotonicError::TimingMismatch {
                left: left.arrival,
                right: right.arrival,
            });
        }
        if !left.number_state {
            return Err(PhotonicError::NotNumberState(Port::Qin0));
        }
        if !right.number_state {
            return Err(PhotonicError::NotNumberState(Port::Qin1));
        }
        Ok(())
    }
}

impl ClickDetector for Detector {
    fn classify_and_emit<B: DetectionBackend + ?Sized>(&mut self, backend: &mut B) -> PhotonicResult<()> {
        if self.rx.is_full() {
            return Err(PhotonicError::OutcomeNotDrained(self.name.clone()));
        }

        let (left, right) = self
            .inputs
            .take_pair()
            .ok_or_else(|| PhotonicError::MissingInput(self.inputs.missing()))?;

        if let Err(err) = Self::check_inputs(&left, &right) {
            // devolve às portas para que o chamador possa descartá-las
            self.inputs.restore(left, right);
            return Err(err);
        }

        let code = backend.measure_photons(left, right, self.config.num_resolving)?;
        let outcome = classify(code)?;

        self.tx.try_send(outcome).map_err(|err| match err {
            TrySendError::Full(_) | TrySendError::Disconnected(_) => {
                PhotonicError::OutcomeNotDrained(self.name.clone())
            }
        })?;
        self.emitted += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{BackendResult, Qubit};

    /// Backend que devolve sempre o mesmo código
    struct FixedCode(u8);

    impl DetectionBackend for FixedCode {
        fn measure_photons(&mut self, _: Excitation, _: Excitation, _: bool) -> BackendResult<u8> {
            Ok(self.0)
        }
    }

    fn arm(detector: &mut Detector, left_at: u64, right_at: u64) {
        detector.tx_input(Port::Qin0, Excitation::new(Qubit::from_raw(0), left_at)).unwrap();
        detector.tx_input(Port::Qin1, Excitation::new(Qubit::from_raw(1), right_at)).unwrap();
    }

    #[test]
    fn test_emit_and_pop() {
        let mut detector = Detector::new("link");
        arm(&mut detector, 5, 5);
        assert!(detector.is_armed());

        detector.classify_and_emit(&mut FixedCode(4)).unwrap();
        assert_eq!(detector.pending(), 1);
        assert_eq!(detector.pop(), Some(Outcome::new(2, 0)));
        assert_eq!(detector.pop(), None);
        assert_eq!(detector.emitted(), 1);
    }

    #[test]
    fn test_undrained_outcome_rejected() {
        let mut detector = Detector::new("link");
        arm(&mut detector, 0, 0);
        detector.classify_and_emit(&mut FixedCode(1)).unwrap();

        arm(&mut detector, 1, 1);
        let err = detector.classify_and_emit(&mut FixedCode(2)).unwrap_err();
        assert_eq!(err, PhotonicError::OutcomeNotDrained("link".into()));
        // entradas continuam nas portas
        assert!(detector.is_armed());

        assert_eq!(detector.pop(), Some(Outcome::new(1, 0)));
        detector.classify_and_emit(&mut FixedCode(2)).unwrap();
        assert_eq!(detector.pop(), Some(Outcome::new(0, 1)));
    }

    #[test]
    fn test_timing_mismatch() {
        let mut detector = Detector::new("link");
        arm(&mut detector, 0, 3);

        let err = detector.classify_and_emit(&mut FixedCode(1)).unwrap_err();
        assert_eq!(err, PhotonicError::TimingMismatch { left: 0, right: 3 });
        assert_eq!(detector.pending(), 0);
        assert!(detector.is_armed());

        // cada fóton volta para a sua porta
        let ids: Vec<u64> = detector.take_inputs().iter().map(|e| e.qubit.id()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_not_number_state() {
        let mut detector = Detector::new("link");
        let mut photon = Excitation::new(Qubit::from_raw(0), 0);
        photon.number_state = false;
        detector.tx_input(Port::Qin0, Excitation::new(Qubit::from_raw(1), 0)).unwrap();
        detector.tx_input(Port::Qin1, photon).unwrap();

        let err = detector.classify_and_emit(&mut FixedCode(0)).unwrap_err();
        assert_eq!(err, PhotonicError::NotNumberState(Port::Qin1));
    }

    #[test]
    fn test_missing_input() {
        let mut detector = Detector::new("link");
        detector.tx_input(Port::Qin1, Excitation::new(Qubit::from_raw(1), 0)).unwrap();

        let err = detector.classify_and_emit(&mut FixedCode(0)).unwrap_err();
        assert_eq!(err, PhotonicError::MissingInput(vec![Port::Qin0]));
    }

    #[test]
    fn test_unclassifiable_code() {
        let mut detector = Detector::new("link");
        arm(&mut detector, 0, 0);

        let err = detector.classify_and_emit(&mut FixedCode(9)).unwrap_err();
        assert_eq!(err, PhotonicError::UnclassifiableCode(9));
        assert_eq!(detector.pending(), 0);
    }

    #[test]
    fn test_port_occupied() {
        let mut detector = Detector::new("link");
        detector.tx_input(Port::Qin0, Excitation::new(Qubit::from_raw(0), 0)).unwrap();
        let err = detector
            .tx_input(Port::Qin0, Excitation::new(Qubit::from_raw(1), 0))
            .unwrap_err();
        assert_eq!(err, PhotonicError::PortOccupied(Port::Qin0));
    }
}
