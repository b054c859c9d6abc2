
/// Hazard check, stages and the cycle engine.
pub mod pipeline;
