//! Backend ideal de vetor de estado
//!
//! Implementa todos os colaboradores do núcleo sobre um único
//! [`QubitRegister`]: fonte de pares, detecção, medição de Bell,
//! correção e relógio simulado. Sem ruído.

use herald_core::{
    BackendResult, BellMeasurement, BellState, CorrectionOperator, CorrectionPrimitive,
    DetectionBackend, Excitation, PairSource, QuantumBackend, Qubit, SimClock, SimTime,
    SwapMeasurement,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Hadamard, PauliX, QuantumGate, RotationY, correction_matrix};
use crate::optics::detection_branches;
use crate::register::QubitRegister;

/// Backend de simulação ideal
#[derive(Debug, Clone)]
pub struct StateVectorBackend {
    register: QubitRegister,
    rng: StdRng,
    clock: SimTime,
}

impl Default for StateVectorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StateVectorBackend {
    /// Cria backend com semente aleatória do sistema
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Cria backend determinístico
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            register: QubitRegister::new(),
            rng,
            clock: 0,
        }
    }

    /// Registro interno (somente leitura)
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// Qubits ainda vivos
    pub fn live_qubits(&self) -> usize {
        self.register.len()
    }

    /// Emite um fóton isolado em estado de número |0⟩ ou |1⟩
    pub fn emit_photon(&mut self, occupied: bool) -> QuantumResult<Excitation> {
        let photon = self.register.alloc();
        if occupied {
            self.register.apply_single(photon, &PauliX.matrix())?;
        }
        Ok(Excitation::new(Qubit::from_raw(photon), self.clock))
    }

    /// Prepara diretamente um par no estado de Bell indicado
    pub fn prepare_bell_pair(&mut self, state: BellState) -> QuantumResult<(Qubit, Qubit)> {
        let a = self.register.alloc();
        let b = self.register.alloc();
        self.register.apply_single(a, &Hadamard.matrix())?;
        self.register.apply_cnot(a, b)?;

        let (phase, parity) = state.bits();
        if parity {
            self.register.apply_single(a, &correction_matrix(CorrectionOperator::PauliX))?;
        }
        if phase {
            self.register.apply_single(a, &correction_matrix(CorrectionOperator::PauliZ))?;
        }
        Ok((Qubit::from_raw(a), Qubit::from_raw(b)))
    }

    fn generate_pair(&mut self, alpha: f64) -> QuantumResult<(Qubit, Excitation)> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(QuantumError::InvalidAlpha(alpha));
        }

        let spin = self.register.alloc();
        let photon = self.register.alloc();
        self.register.apply_single(spin, &RotationY::bright_state(alpha).matrix())?;
        self.register.apply_cnot(spin, photon)?;

        Ok((
            Qubit::from_raw(spin),
            Excitation::new(Qubit::from_raw(photon), self.clock),
        ))
    }

    fn detect(&mut self, left: u64, right: u64, num_resolving: bool) -> QuantumResult<u8> {
        let branches = detection_branches(num_resolving);
        let code = self.register.gmeasure(left, right, &branches, &mut self.rng)?;

        // fótons absorvidos pelos detectores
        self.register.discard(left, &mut self.rng)?;
        self.register.discard(right, &mut self.rng)?;
        Ok(code)
    }

    fn bell_measure_ids(&mut self, a: u64, b: u64) -> QuantumResult<SwapMeasurement> {
        self.register.apply_cnot(a, b)?;
        self.register.apply_single(a, &Hadamard.matrix())?;
        let b0 = self.register.discard(a, &mut self.rng)?;
        let b1 = self.register.discard(b, &mut self.rng)?;
        Ok(SwapMeasurement::new(b0, b1))
    }
}

impl PairSource for StateVectorBackend {
    fn generate(&mut self, alpha: f64) -> BackendResult<(Qubit, Excitation)> {
        Ok(self.generate_pair(alpha)?)
    }
}

impl DetectionBackend for StateVectorBackend {
    fn measure_photons(
        &mut self,
        left: Excitation,
        right: Excitation,
        num_resolving: bool,
    ) -> BackendResult<u8> {
        Ok(self.detect(left.qubit.id(), right.qubit.id(), num_resolving)?)
    }
}

impl BellMeasurement for StateVectorBackend {
    fn bell_measure(&mut self, a: Qubit, b: Qubit) -> BackendResult<SwapMeasurement> {
        Ok(self.bell_measure_ids(a.id(), b.id())?)
    }

    fn measure(&mut self, qubit: Qubit) -> BackendResult<u8> {
        Ok(self.register.discard(qubit.id(), &mut self.rng)?)
    }
}

impl CorrectionPrimitive for StateVectorBackend {
    fn apply_correction(&mut self, qubit: &Qubit, op: CorrectionOperator) -> BackendResult<()> {
        Ok(self.register.apply_single(qubit.id(), &correction_matrix(op))?)
    }
}

impl SimClock for StateVectorBackend {
    fn now(&self) -> SimTime {
        self.clock
    }

    fn advance(&mut self, duration: SimTime) {
        self.clock = self.clock.saturating_add(duration);
    }
}

impl QuantumBackend for StateVectorBackend {
    fn discard(&mut self, qubit: Qubit) -> BackendResult<()> {
        self.register.discard(qubit.id(), &mut self.rng)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "StateVectorBackend"
    }
}
