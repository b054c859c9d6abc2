/// Cycle engine ordering.
pub mod engine;


/// Individual stage behaviour.
pub mod stages;
