//! # 🎯 Traits — Colaboradores externos do protocolo
//!
//! O núcleo não simula física. Ele conversa com o motor de simulação
//! apenas através dos traits abaixo:
//!
//! | Trait | Papel |
//! |:------|:------|
//! | [`PairSource`] | gera par spin–fóton com brilho `alpha` |
//! | [`DetectionBackend`] | mede dois fótons e devolve o código cru [0,5] |
//! | [`BellMeasurement`] | medição de Bell entre dois qubits de matéria |
//! | [`CorrectionPrimitive`] | aplica I, X, Y ou Z em um qubit |
//! | [`SimClock`] | relógio simulado, avançado explicitamente |
//!
//! > *"Trait no core, implementação no módulo."*

use crate::error::BackendResult;
use crate::state::{CorrectionOperator, Excitation, Qubit, SimTime, SwapMeasurement};

/// Fonte de pares spin–fóton
pub trait PairSource {
    /// Gera um qubit de matéria local e o fóton emaranhado com ele.
    ///
    /// `alpha` é a população do estado brilhante, em (0, 1).
    fn generate(&mut self, alpha: f64) -> BackendResult<(Qubit, Excitation)>;
}

/// Backend de detecção: divisor de feixe seguido de dois detectores
pub trait DetectionBackend {
    /// Mede os dois fótons no mesmo instante e devolve o código cru da medição.
    ///
    /// Os dois fótons são descartados pela medição.
    fn measure_photons(
        &mut self,
        left: Excitation,
        right: Excitation,
        num_resolving: bool,
    ) -> BackendResult<u8>;
}

/// Primitiva de medição de Bell
pub trait BellMeasurement {
    /// CNOT(a → b), H(a), mede `a` e depois `b`. Consome os dois qubits.
    fn bell_measure(&mut self, a: Qubit, b: Qubit) -> BackendResult<SwapMeasurement>;

    /// Medição projetiva na base computacional. Consome o qubit.
    fn measure(&mut self, qubit: Qubit) -> BackendResult<u8>;
}

/// Primitiva de correção de um qubit
pub trait CorrectionPrimitive {
    fn apply_correction(&mut self, qubit: &Qubit, op: CorrectionOperator) -> BackendResult<()>;
}

/// Relógio simulado
pub trait SimClock {
    /// Instante atual (ns)
    fn now(&self) -> SimTime;

    /// Avança o relógio
    fn advance(&mut self, duration: SimTime);
}

/// Backend completo usado pelo orquestrador
pub trait QuantumBackend:
    PairSource + DetectionBackend + BellMeasurement + CorrectionPrimitive + SimClock
{
    /// Descarta um qubit que não será mais usado
    fn discard(&mut self, qubit: Qubit) -> BackendResult<()>;

    /// Nome do backend (para logs)
    fn name(&self) -> &str {
        "QuantumBackend"
    }
}
