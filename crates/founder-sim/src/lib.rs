//! Founder decision simulator: a deterministic engine that projects company metrics, health,
//! and risk one quarter ahead, plus the narration layer and service plumbing around it.

pub mod config;
pub mod error;
pub mod narration;
pub mod sandbox;
pub mod simulation;
pub mod telemetry;
