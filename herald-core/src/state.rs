//! # Modelo de dados — Valores trocados entre os estágios do protocolo
//!
//! Todos os tipos aqui são valores imutáveis: cada tentativa de geração
//! cria instâncias novas e nenhuma delas é compartilhada entre tentativas.
//!
//! ## Rótulo de 2 bits dos estados de Bell
//!
//! ```text
//! |Φ+⟩ = (|00⟩ + |11⟩) / √2   ↔  (0, 0)
//! |Ψ+⟩ = (|01⟩ + |10⟩) / √2   ↔  (0, 1)
//! |Φ-⟩ = (|00⟩ - |11⟩) / √2   ↔  (1, 0)
//! |Ψ-⟩ = (|01⟩ - |10⟩) / √2   ↔  (1, 1)
//! ```
//!
//! O primeiro bit é a fase, o segundo é a paridade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tempo simulado em nanossegundos
pub type SimTime = u64;

// ═══════════════════════════════════════════════════════════════════════════════
// OUTCOME
// ═══════════════════════════════════════════════════════════════════════════════

/// Contagem de cliques nos dois canais de saída do detector
/// para uma única janela de medição.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Cliques no canal A
    pub a: u8,
    /// Cliques no canal B
    pub b: u8,
}

impl Outcome {
    /// Cria novo outcome
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    /// Total de excitações detectadas
    pub fn total(&self) -> u16 {
        u16::from(self.a) + u16::from(self.b)
    }

    /// Ocupação dupla em algum canal
    pub fn is_bunched(&self) -> bool {
        self.a == 2 || self.b == 2
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcome(A={}, B={})", self.a, self.b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// BELL STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// Estado de Bell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BellState {
    /// |Φ+⟩ = (|00⟩ + |11⟩) / √2
    #[default]
    PhiPlus,
    /// |Φ-⟩ = (|00⟩ - |11⟩) / √2
    PhiMinus,
    /// |Ψ+⟩ = (|01⟩ + |10⟩) / √2
    PsiPlus,
    /// |Ψ-⟩ = (|01⟩ - |10⟩) / √2
    PsiMinus,
}

impl BellState {
    /// Os quatro estados, ordenados pelo rótulo de 2 bits
    pub const ALL: [BellState; 4] = [
        BellState::PhiPlus,
        BellState::PsiPlus,
        BellState::PhiMinus,
        BellState::PsiMinus,
    ];

    /// Cria a partir do rótulo (fase, paridade)
    pub const fn from_bits(phase: bool, parity: bool) -> Self {
        match (phase, parity) {
            (false, false) => Self::PhiPlus,
            (false, true) => Self::PsiPlus,
            (true, false) => Self::PhiMinus,
            (true, true) => Self::PsiMinus,
        }
    }

    /// Rótulo (fase, paridade)
    pub const fn bits(self) -> (bool, bool) {
        match self {
            Self::PhiPlus => (false, false),
            Self::PsiPlus => (false, true),
            Self::PhiMinus => (true, false),
            Self::PsiMinus => (true, true),
        }
    }

    /// Rótulo empacotado em 2 bits (fase << 1 | paridade)
    pub const fn index(self) -> u8 {
        let (phase, parity) = self.bits();
        ((phase as u8) << 1) | parity as u8
    }

    /// Inverso de [`BellState::index`]; usa apenas os 2 bits baixos
    pub const fn from_index(index: u8) -> Self {
        Self::from_bits(index & 0b10 != 0, index & 0b01 != 0)
    }

    /// Nome usado em transcrições e configuração
    pub fn label(&self) -> &'static str {
        match self {
            Self::PhiPlus => "PHI_PLUS",
            Self::PhiMinus => "PHI_MINUS",
            Self::PsiPlus => "PSI_PLUS",
            Self::PsiMinus => "PSI_MINUS",
        }
    }

    /// Nome em notação bra-ket
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhiPlus => "|Φ+⟩",
            Self::PhiMinus => "|Φ-⟩",
            Self::PsiPlus => "|Ψ+⟩",
            Self::PsiMinus => "|Ψ-⟩",
        }
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HERALD / SWAP / CORRECTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Resultado do anúncio (herald) de uma tentativa de geração
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeraldResult {
    /// Emaranhamento anunciado no estado indicado
    Success(BellState),
    /// Nada anunciado
    Failure,
}

impl HeraldResult {
    /// Estado anunciado, se houve sucesso
    pub fn state(&self) -> Option<BellState> {
        match self {
            Self::Success(state) => Some(*state),
            Self::Failure => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Par ordenado de bits clássicos de uma medição de Bell local.
///
/// Os valores são crus, como reportados pela primitiva de medição;
/// a validação acontece na conversão para [`BellState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapMeasurement {
    pub b0: u8,
    pub b1: u8,
}

impl SwapMeasurement {
    pub const fn new(b0: u8, b1: u8) -> Self {
        Self { b0, b1 }
    }
}

impl From<(u8, u8)> for SwapMeasurement {
    fn from((b0, b1): (u8, u8)) -> Self {
        Self { b0, b1 }
    }
}

impl fmt::Display for SwapMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.b0, self.b1)
    }
}

/// Operador de correção de um qubit (quadro de Pauli)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrectionOperator {
    Identity,
    PauliX,
    PauliY,
    PauliZ,
}

impl CorrectionOperator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "I",
            Self::PauliX => "X",
            Self::PauliY => "Y",
            Self::PauliZ => "Z",
        }
    }
}

impl fmt::Display for CorrectionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// QUBITS E EXCITAÇÕES
// ═══════════════════════════════════════════════════════════════════════════════

/// Handle de um qubit mantido pelo backend.
///
/// Não implementa `Clone`: operações que consomem o qubit (medição,
/// descarte, medição de Bell) o recebem por valor.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Qubit(u64);

impl Qubit {
    /// Cria handle a partir do ID interno do backend
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// ID interno do backend
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Porta de entrada do detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Port {
    Qin0,
    Qin1,
}

impl Port {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Qin0 => "qin0",
            Self::Qin1 => "qin1",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Self::Qin0 => 0,
            Self::Qin1 => 1,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fóton em voo entregue a uma porta do detector
#[derive(Debug)]
pub struct Excitation {
    /// Modo fotônico no backend
    pub qubit: Qubit,
    /// Instante de chegada ao detector
    pub arrival: SimTime,
    /// Expresso na base de número de ocupação?
    pub number_state: bool,
}

impl Excitation {
    pub fn new(qubit: Qubit, arrival: SimTime) -> Self {
        Self {
            qubit,
            arrival,
            number_state: true,
        }
    }
}

/// Pares de entrada indexados por porta
#[derive(Debug, Default)]
pub struct PortSlots {
    slots: [Option<Excitation>; 2],
}

impl PortSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coloca excitação na porta; devolve a excitação se a porta já estiver ocupada
    pub fn put(&mut self, port: Port, excitation: Excitation) -> Result<(), Excitation> {
        let slot = &mut self.slots[port.slot()];
        if slot.is_some() {
            return Err(excitation);
        }
        *slot = Some(excitation);
        Ok(())
    }

    pub fn is_occupied(&self, port: Port) -> bool {
        self.slots[port.slot()].is_some()
    }

    /// Retira as duas excitações, se ambas estiverem presentes
    pub fn take_pair(&mut self) -> Option<(Excitation, Excitation)> {
        if self.slots.iter().all(Option::is_some) {
            let [left, right] = std::mem::take(&mut self.slots);
            left.zip(right)
        } else {
            None
        }
    }

    /// Portas ainda vazias
    pub fn missing(&self) -> Vec<Port> {
        [Port::Qin0, Port::Qin1]
            .into_iter()
            .filter(|p| !self.is_occupied(*p))
            .collect()
    }

    /// Recoloca um par retirado por [`PortSlots::take_pair`], substituindo o conteúdo
    pub fn restore(&mut self, left: Excitation, right: Excitation) {
        self.slots = [Some(left), Some(right)];
    }

    /// Esvazia as portas, devolvendo o que estava nelas
    pub fn drain(&mut self) -> Vec<Excitation> {
        std::mem::take(&mut self.slots).into_iter().flatten().collect()
    }
}
