//! Shared test infrastructure.

/// Fluent constructors for programs and buffer entries.
pub mod builder;
