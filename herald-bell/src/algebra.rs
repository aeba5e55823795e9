//! # Álgebra de Bell — Composição, lookup de bits e correção de Pauli
//!
//! Os quatro estados de Bell, vistos como rótulos de 2 bits, formam o
//! grupo de Klein sob XOR bit a bit.
//!
//! ## Tabela de composição
//!
//! ```text
//!  ∘  │ Φ+  Ψ+  Φ-  Ψ-
//! ────┼────────────────
//!  Φ+ │ Φ+  Ψ+  Φ-  Ψ-
//!  Ψ+ │ Ψ+  Φ+  Ψ-  Φ-
//!  Φ- │ Φ-  Ψ-  Φ+  Ψ+
//!  Ψ- │ Ψ-  Φ-  Ψ+  Φ+
//! ```
//!
//! ## Entanglement swapping
//!
//! Dado AB em `s_ab`, CD em `s_cd` e uma medição de Bell em BC com bits
//! `bsm`, o par AD fica em `s_ab ∘ bits(bsm) ∘ s_cd`. A correção
//! [`correction_for`] aplicada em A leva AD para Φ+.

use herald_core::{BellState, CorrectionOperator, SwapMeasurement};

use crate::error::{BellError, BellResult};

/// Operações de grupo sobre os rótulos de Bell
pub trait KleinGroup: Sized + Copy {
    /// Elemento neutro
    fn identity() -> Self;

    /// Composição do grupo
    fn compose(self, other: Self) -> Self;

    /// Inverso (todo elemento é o próprio inverso)
    fn inverse(self) -> Self {
        self
    }
}

impl KleinGroup for BellState {
    fn identity() -> Self {
        BellState::PhiPlus
    }

    fn compose(self, other: Self) -> Self {
        BellState::from_index(self.index() ^ other.index())
    }
}

/// Compõe dois estados de Bell (XOR dos rótulos de 2 bits)
pub fn compose(x: BellState, y: BellState) -> BellState {
    x.compose(y)
}

/// Converte um bit cru em `bool`
fn bit(value: u8) -> BellResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(BellError::InvalidBit(other)),
    }
}

/// Lookup bijetor (b0, b1) → estado de Bell
///
/// (0,0)→Φ+, (0,1)→Ψ+, (1,0)→Φ-, (1,1)→Ψ-
pub fn label_from_bits(b0: u8, b1: u8) -> BellResult<BellState> {
    Ok(BellState::from_bits(bit(b0)?, bit(b1)?))
}

/// Lookup a partir de uma medição de Bell
pub fn label_from_measurement(bsm: SwapMeasurement) -> BellResult<BellState> {
    label_from_bits(bsm.b0, bsm.b1)
}

/// Operador que, aplicado a um membro de um par em `label`, leva o par para Φ+
pub fn correction_for(label: BellState) -> CorrectionOperator {
    match label {
        BellState::PhiPlus => CorrectionOperator::Identity,
        BellState::PhiMinus => CorrectionOperator::PauliZ,
        BellState::PsiPlus => CorrectionOperator::PauliX,
        BellState::PsiMinus => CorrectionOperator::PauliY,
    }
}

/// Estado do par externo depois do swap
pub fn swapped_state(
    state_ab: BellState,
    bsm: SwapMeasurement,
    state_cd: BellState,
) -> BellResult<BellState> {
    let swap_state = label_from_measurement(bsm)?;
    Ok(compose(compose(state_ab, swap_state), state_cd))
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_bits_table() {
        assert_eq!(label_from_bits(0, 0).unwrap(), BellState::PhiPlus);
        assert_eq!(label_from_bits(0, 1).unwrap(), BellState::PsiPlus);
        assert_eq!(label_from_bits(1, 0).unwrap(), BellState::PhiMinus);
        assert_eq!(label_from_bits(1, 1).unwrap(), BellState::PsiMinus);
    }

    #[test]
    fn test_label_from_bits_rejects_non_bits() {
        assert_eq!(label_from_bits(2, 0), Err(BellError::InvalidBit(2)));
        assert_eq!(label_from_bits(0, 7), Err(BellError::InvalidBit(7)));
        assert_eq!(label_from_bits(255, 255), Err(BellError::InvalidBit(255)));
    }

    #[test]
    fn test_correction_table() {
        assert_eq!(correction_for(BellState::PhiPlus), CorrectionOperator::Identity);
        assert_eq!(correction_for(BellState::PhiMinus), CorrectionOperator::PauliZ);
        assert_eq!(correction_for(BellState::PsiPlus), CorrectionOperator::PauliX);
        assert_eq!(correction_for(BellState::PsiMinus), CorrectionOperator::PauliY);
    }

    #[test]
    fn test_compose_rows() {
        use BellState::*;
        assert_eq!(compose(PsiPlus, PhiMinus), PsiMinus);
        assert_eq!(compose(PhiMinus, PsiMinus), PsiPlus);
        assert_eq!(compose(PsiMinus, PsiPlus), PhiMinus);
        assert_eq!(compose(PsiMinus, PhiMinus), PsiPlus);
    }
}
