//! # ⚛️ herald-quantum — Backend ideal de vetor de estado
//!
//! Simulação densa e sem ruído dos colaboradores físicos do protocolo:
//! pares spin–fóton, interferência num divisor de feixe 50:50 com
//! detectores resolvendo número, medição de Bell e correções de Pauli.
//!
//! ## Computational Complexity
//!
//! **Gates — O(2^n):** n = qubits vivos (no máximo 6 num trial de swap)
//!
//! **Medição generalizada — O(K × 2^n):** K = ramos de Kraus (5)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          StateVectorBackend                     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QubitRegister (amplitudes + slots)       │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gates (I, H, X, Y, Z, Ry)                │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Optics (fonte + divisor de feixe)        │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use herald_quantum::StateVectorBackend;
//! use herald_core::prelude::*;
//!
//! let mut backend = StateVectorBackend::seeded(42);
//! let (spin, photon) = backend.generate(0.2)?;
//! ```

pub mod backend;
pub mod error;
pub mod gates;
pub mod optics;
pub mod register;

pub use backend::StateVectorBackend;
pub use error::{QuantumError, QuantumResult};
pub use gates::{
    Hadamard, Identity, Matrix2x2, Matrix4x4, PauliX, PauliY, PauliZ, QuantumGate, RotationY,
    correction_matrix,
};
pub use optics::detection_branches;
pub use register::QubitRegister;
