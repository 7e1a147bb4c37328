//! Generation orchestrator: collapse loop, regenerate and repair pipeline

/// Uncollapsed nodes bucketed by entropy
pub mod entropy_index;
/// Generator state, collapse loop and regenerate
pub mod generator;
/// Repair plan and full generation
pub mod pipeline;
/// Generation summary
pub mod report;
/// Repair strategy contract
pub mod strategy;
/// Before-images of a regenerate
pub mod transaction;

pub use generator::{ContradictionPolicy, GenerationStats, Generator, GeneratorConfig};
pub use pipeline::RepairPlan;
pub use report::{GenerationReport, StrategyOutcome};
pub use strategy::RepairStrategy;
