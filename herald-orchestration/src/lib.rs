//! # 🎭 herald-orchestration — Swapping anunciado de emaranhamento
//!
//! Conduz cada trial pela máquina de estados do protocolo: anuncia os
//! enlaces A–B e C–D, mede B e C na base de Bell, corrige A e verifica A–D.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SwapOrchestrator                         │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │            LinkGenerator (AB, CD)                     │  │
//! │  │  generate → detector → herald → retry                 │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │            Swap                                       │  │
//! │  │  Bell(B, C) → compose → correção em A                 │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │            Verificação                                │  │
//! │  │  Bell(A, D) == Φ+  →  TrialReport → Tally             │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use herald_orchestration::{SwapConfig, SwapOrchestrator};
//! use herald_quantum::StateVectorBackend;
//!
//! let config: SwapConfig = "alpha = 0.2\ntrials = 10".parse()?;
//! let mut orch = SwapOrchestrator::new(StateVectorBackend::seeded(42), config)?;
//! let tally = orch.run()?;
//! println!("{tally}");
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod link;
pub mod orchestrator;
pub mod tally;

pub use audit::{AuditRecord, AuditSummary, Expectation, HeraldingAudit, Observation};
pub use config::{LinkConfig, RetryPolicy, SwapConfig};
pub use error::{OrchestrationError, OrchestrationResult};
pub use link::{Attempt, EntangledLink, LinkGenerator};
pub use orchestrator::{LINK_AB, LINK_CD, SwapOrchestrator, TrialReport, TrialStage, TrialVerdict};
pub use tally::Tally;

pub use herald_photonic::DetectorConfig;
