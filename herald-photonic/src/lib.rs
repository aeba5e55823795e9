//! # 📷 herald-photonic — Detecção e anúncio de emaranhamento
//!
//! Dois fótons, um de cada lado do enlace, interferem num divisor de feixe
//! 50:50 seguido de dois detectores. O padrão de cliques é classificado e a
//! regra de anúncio decide se os qubits de matéria ficaram emaranhados.
//!
//! ## Pipeline
//!
//! ```text
//!  qin0 ─┐                 ┌─ A ─┐
//!        ├─▶ [ BS 50:50 ] ─┤     ├─▶ código ─▶ classify ─▶ Outcome ─▶ herald
//!  qin1 ─┘                 └─ B ─┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use herald_photonic::{ClickDetector, Detector, herald};
//!
//! let mut detector = Detector::new("AB");
//! detector.tx_input(Port::Qin0, photon_a)?;
//! detector.tx_input(Port::Qin1, photon_b)?;
//! detector.classify_and_emit(&mut backend)?;
//! let result = herald(detector.pop().unwrap());
//! ```

pub mod classifier;
pub mod detector;
pub mod error;
pub mod herald;

pub use classifier::{OUTCOME_TABLE, classify, code_of};
pub use detector::{ClickDetector, Detector, DetectorConfig};
pub use error::{PhotonicError, PhotonicResult};
pub use herald::herald;
