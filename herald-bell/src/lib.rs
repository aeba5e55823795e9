//! # 🔗 herald-bell — Álgebra dos estados de Bell
//!
//! Composição de estados anunciados com o resultado de uma medição de Bell
//! local, e a correção de Pauli que leva o par resultante para Φ+.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         BellAlgebra                             │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  compose (grupo de Klein, XOR)            │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  label_from_bits (bits → estado)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  correction_for (estado → Pauli)          │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use herald_bell::{compose, correction_for, label_from_bits};
//! use herald_core::BellState;
//!
//! let swap = label_from_bits(0, 1)?;
//! let outer = compose(compose(BellState::PsiPlus, swap), BellState::PhiMinus);
//! assert_eq!(correction_for(outer), CorrectionOperator::PauliZ);
//! ```

pub mod algebra;
pub mod error;

pub use algebra::{
    KleinGroup, compose, correction_for, label_from_bits, label_from_measurement, swapped_state,
};
pub use error::{BellError, BellResult};

#[cfg(test)]
mod tests;
