//! # 🔭 herald-core — Modelo de dados do protocolo de entanglement swapping
//!
//! Define os valores trocados entre os estágios do protocolo e os traits
//! dos colaboradores externos (fonte de pares, detecção, medição de Bell,
//! correção e relógio simulado).
//!
//! ## Fluxo
//!
//! ```text
//! código cru ─▶ Outcome ─▶ HeraldResult ─┐
//!                                        ├─▶ compose ─▶ correção ─▶ verificação
//! código cru ─▶ Outcome ─▶ HeraldResult ─┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use herald_core::prelude::*;
//!
//! let (spin, photon) = backend.generate(0.2)?;
//! assert!(photon.number_state);
//! ```

pub mod error;
pub mod prelude;
pub mod state;
pub mod traits;

pub use error::{BackendError, BackendResult};
pub use state::{
    BellState, CorrectionOperator, Excitation, HeraldResult, Outcome, Port, PortSlots, Qubit,
    SimTime, SwapMeasurement,
};
pub use traits::{
    BellMeasurement, CorrectionPrimitive, DetectionBackend, PairSource, QuantumBackend, SimClock,
};
