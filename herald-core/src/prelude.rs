//! Re-exporta o essencial para `use herald_core::prelude::*`

pub use crate::error::{BackendError, BackendResult};
pub use crate::state::{
    BellState, CorrectionOperator, Excitation, HeraldResult, Outcome, Port, PortSlots, Qubit,
    SimTime, SwapMeasurement,
};
pub use crate::traits::{
    BellMeasurement, CorrectionPrimitive, DetectionBackend, PairSource, QuantumBackend, SimClock,
};
