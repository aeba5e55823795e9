//! Classificação do código cru da medição conjunta em um [`Outcome`]

use herald_core::Outcome;

use crate::error::{PhotonicError, PhotonicResult};

/// Tabela fixa código → (A, B) para a medição de seis outcomes
pub const OUTCOME_TABLE: [Outcome; 6] = [
    Outcome::new(0, 0),
    Outcome::new(1, 0),
    Outcome::new(0, 1),
    Outcome::new(1, 1),
    Outcome::new(2, 0),
    Outcome::new(0, 2),
];

/// Mapeia o código cru em [0,5] para a contagem de cliques nos dois canais
pub fn classify(code: u8) -> PhotonicResult<Outcome> {
    OUTCOME_TABLE
        .get(code as usize)
        .copied()
        .ok_or(PhotonicError::UnclassifiableCode(code))
}

/// Inverso de [`classify`]
pub fn code_of(outcome: Outcome) -> Option<u8> {
    OUTCOME_TABLE
        .iter()
        .position(|o| *o == outcome)
        .map(|i| i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_table() {
        assert_eq!(classify(0).unwrap(), Outcome::new(0, 0));
        assert_eq!(classify(1).unwrap(), Outcome::new(1, 0));
        assert_eq!(classify(2).unwrap(), Outcome::new(0, 1));
        assert_eq!(classify(3).unwrap(), Outcome::new(1, 1));
        assert_eq!(classify(4).unwrap(), Outcome::new(2, 0));
        assert_eq!(classify(5).unwrap(), Outcome::new(0, 2));
    }

    #[test]
    fn test_classify_out_of_range() {
        for code in 6..=u8::MAX {
            assert_eq!(classify(code), Err(PhotonicError::UnclassifiableCode(code)));
        }
    }

    #[test]
    fn test_code_of() {
        for code in 0..6u8 {
            assert_eq!(code_of(classify(code).unwrap()), Some(code));
        }
        assert_eq!(code_of(Outcome::new(2, 2)), None);
    }
}
