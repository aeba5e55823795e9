//! Regra de anúncio: outcome → sucesso (com estado) ou falha
//!
//! Um único clique de um lado só projeta os dois qubits de matéria
//! remotos no estado de Bell indicado. Qualquer outro padrão não carrega
//! informação de emaranhamento e a tentativa é descartada.

use herald_core::{BellState, HeraldResult, Outcome};

/// Aplica a regra de anúncio
pub fn herald(outcome: Outcome) -> HeraldResult {
    match (outcome.a, outcome.b) {
        // ocupação dupla: as duas excitações vieram do mesmo lado
        (2, _) | (_, 2) => HeraldResult::Failure,
        (1, 0) => HeraldResult::Success(BellState::PsiPlus),
        (0, 1) => HeraldResult::Success(BellState::PsiMinus),
        // (0,0) não detectou nada; coincidência (1,1) não distingue o caminho
        _ => HeraldResult::Failure,
    }
}
