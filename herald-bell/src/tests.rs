//! Testes integrados para herald-bell

use crate::*;
use herald_core::{BellState, CorrectionOperator, SwapMeasurement};

const ALL_BSM: [(u8, u8); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];

#[test]
fn test_compose_commutative() {
    for x in BellState::ALL {
        for y in BellState::ALL {
            assert_eq!(compose(x, y), compose(y, x), "{x} ∘ {y}");
        }
    }
}

#[test]
fn test_compose_identity() {
    for x in BellState::ALL {
        assert_eq!(compose(x, BellState::PhiPlus), x);
        assert_eq!(compose(BellState::identity(), x), x);
    }
}

#[test]
fn test_compose_self_inverse() {
    for x in BellState::ALL {
        assert_eq!(compose(x, x), BellState::PhiPlus);
        assert_eq!(x.inverse(), x);
    }
}

#[test]
fn test_compose_associative() {
    for x in BellState::ALL {
        for y in BellState::ALL {
            for z in BellState::ALL {
                assert_eq!(compose(compose(x, y), z), compose(x, compose(y, z)));
            }
        }
    }
}

#[test]
fn test_compose_closed_and_latin() {
    // cada linha da tabela é uma permutação dos quatro estados
    for x in BellState::ALL {
        let mut row: Vec<BellState> = BellState::ALL.iter().map(|y| compose(x, *y)).collect();
        row.sort();
        row.dedup();
        assert_eq!(row.len(), 4);
    }
}

#[test]
fn test_label_from_bits_bijective() {
    let mut seen = Vec::new();
    for (b0, b1) in ALL_BSM {
        let label = label_from_bits(b0, b1).unwrap();
        assert_eq!(label.bits(), (b0 == 1, b1 == 1));
        seen.push(label);
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_identity_roundtrip_from_bits() {
    let zero = label_from_bits(0, 0).unwrap();
    assert_eq!(compose(zero, zero), BellState::PhiPlus);
}

#[test]
fn test_scenario_psi_plus_swap_phi_minus() {
    let swap = label_from_bits(0, 1).unwrap();
    assert_eq!(swap, BellState::PsiPlus);

    let inner = compose(BellState::PsiPlus, swap);
    assert_eq!(inner, BellState::PhiPlus);

    let outer = compose(inner, BellState::PhiMinus);
    assert_eq!(outer, BellState::PhiMinus);
    assert_eq!(correction_for(outer), CorrectionOperator::PauliZ);

    let via_helper =
        swapped_state(BellState::PsiPlus, SwapMeasurement::new(0, 1), BellState::PhiMinus).unwrap();
    assert_eq!(via_helper, BellState::PhiMinus);
}

#[test]
fn test_swapped_state_rejects_invalid_bits() {
    let result = swapped_state(BellState::PhiPlus, SwapMeasurement::new(0, 2), BellState::PhiPlus);
    assert_eq!(result, Err(BellError::InvalidBit(2)));
}

#[test]
fn test_correction_undoes_outer_state() {
    // Aplicar a correção de `outer` equivale a compor com `outer` de novo.
    for state_ab in BellState::ALL {
        for (b0, b1) in ALL_BSM {
            for state_cd in BellState::ALL {
                let bsm = SwapMeasurement::new(b0, b1);
                let outer = swapped_state(state_ab, bsm, state_cd).unwrap();
                let corrected = compose(outer, correction_label(correction_for(outer)));
                assert_eq!(corrected, BellState::PhiPlus);
            }
        }
    }
}

/// Estado que a correção representa no quadro de Pauli
fn correction_label(op: CorrectionOperator) -> BellState {
    match op {
        CorrectionOperator::Identity => BellState::PhiPlus,
        CorrectionOperator::PauliZ => BellState::PhiMinus,
        CorrectionOperator::PauliX => BellState::PsiPlus,
        CorrectionOperator::PauliY => BellState::PsiMinus,
    }
}
